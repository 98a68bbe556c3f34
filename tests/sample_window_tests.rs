use streaming_chart::api::{StreamingChart, StreamingChartConfig};
use streaming_chart::core::{PointGeometry, SampleWindow, Size};
use streaming_chart::render::NullRenderer;

fn chart(width: f64, point_width: f64) -> StreamingChart<NullRenderer> {
    let config =
        StreamingChartConfig::new(Size::new(width, 100.0), PointGeometry::new(point_width, 1.0));
    StreamingChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn one_at_a_time_appends_evict_oldest_samples() {
    let mut chart = chart(200.0, 50.0);
    assert_eq!(chart.capacity(), 5);

    for value in 1..=7 {
        chart.append(&[f64::from(value)]).expect("append");
    }

    assert_eq!(chart.data(), &[3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn oversized_batch_keeps_only_the_tail() {
    let mut chart = chart(200.0, 50.0);
    chart
        .append(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])
        .expect("append");
    assert_eq!(chart.data(), &[4.0, 5.0, 6.0, 7.0, 8.0]);
    assert_eq!(chart.data_len(), 5);
}

#[test]
fn empty_append_is_a_noop() {
    let mut chart = chart(200.0, 50.0);
    chart.append(&[1.0]).expect("append");
    chart.render().expect("render");

    chart.append(&[]).expect("empty append");
    assert_eq!(chart.data(), &[1.0]);
    assert_eq!(
        chart.pending_invalidation(),
        streaming_chart::api::InvalidationLevel::None
    );
}

#[test]
fn capacity_follows_width_over_point_width() {
    let chart = chart(1000.0, 30.0);
    // floor(1000 / 30) + 1
    assert_eq!(chart.capacity(), 34);
}

#[test]
fn shrinking_resize_recomputes_capacity_before_truncating() {
    let mut chart = chart(200.0, 50.0);
    chart.append(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("append");

    chart.set_size(100.0, 100.0).expect("resize");
    assert_eq!(chart.capacity(), 3);
    assert_eq!(chart.data(), &[3.0, 4.0, 5.0]);

    chart.set_size(400.0, 100.0).expect("resize");
    assert_eq!(chart.capacity(), 9);
    assert_eq!(chart.data(), &[3.0, 4.0, 5.0]);
}

#[test]
fn standalone_window_clear_and_take() {
    let mut window = SampleWindow::with_capacity(4);
    window.append(&[1.0, 2.0]);
    assert_eq!(window.take(), vec![1.0, 2.0]);
    assert!(window.is_empty());

    window.append(&[3.0]);
    window.clear();
    assert_eq!(window.len(), 0);
    assert_eq!(window.capacity(), 4);
}
