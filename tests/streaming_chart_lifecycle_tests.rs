use streaming_chart::api::{ChartLifecycle, InvalidationLevel, StreamingChart, StreamingChartConfig};
use streaming_chart::core::{PointGeometry, Size};
use streaming_chart::error::{ChartError, ChartResult};
use streaming_chart::render::{FrameKind, NullRenderer, RenderFrame, Renderer};

fn config() -> StreamingChartConfig {
    StreamingChartConfig::new(Size::new(200.0, 100.0), PointGeometry::new(50.0, 1.0))
}

#[test]
fn clear_resets_window_and_extremes_to_sentinel() {
    let mut chart = StreamingChart::new(NullRenderer::default(), config()).expect("chart init");
    chart.append(&[1.0, 9.0, -4.0]).expect("append");

    chart.clear();

    assert!(chart.data().is_empty());
    assert_eq!(chart.extremes(), None);
    let tracker = chart.extreme_tracker();
    assert!(tracker.is_sentinel());
    assert_eq!(tracker.min().value, f64::INFINITY);
    assert_eq!(tracker.max().value, f64::NEG_INFINITY);
    assert_eq!(tracker.max().age, chart.capacity());
}

#[test]
fn append_after_clear_matches_fresh_chart() {
    for dynamic in [false, true] {
        let config = if dynamic {
            config().with_dynamic_axis(10.0, 10.0)
        } else {
            config()
        };
        let mut reused =
            StreamingChart::new(NullRenderer::default(), config.clone()).expect("chart init");
        reused.append(&[3.0, 30.0, -7.0, 12.0]).expect("append");
        reused.clear();
        reused.append(&[5.0]).expect("append");

        let mut fresh = StreamingChart::new(NullRenderer::default(), config).expect("chart init");
        fresh.append(&[5.0]).expect("append");

        assert_eq!(reused.snapshot().data, fresh.snapshot().data);
        assert_eq!(reused.snapshot().extremes, fresh.snapshot().extremes);
        assert_eq!(reused.point(), fresh.point());
        assert_eq!(reused.offset(), fresh.offset());
        assert_eq!(reused.extreme_tracker(), fresh.extreme_tracker());
    }
}

#[test]
fn first_render_is_full_and_keeps_lifecycle() {
    let mut chart = StreamingChart::new(NullRenderer::default(), config()).expect("chart init");
    assert_eq!(chart.lifecycle(), ChartLifecycle::Initialized);
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Full);

    chart.render().expect("render");

    assert_eq!(chart.lifecycle(), ChartLifecycle::Initialized);
    assert_eq!(chart.renderer().last_kind, Some(FrameKind::Full));
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::None);

    chart.append(&[1.0, 2.0]).expect("append");
    chart.render().expect("render");
    assert_eq!(chart.lifecycle(), ChartLifecycle::Initialized);
    assert_eq!(chart.renderer().last_kind, Some(FrameKind::Segment));
}

#[test]
fn redraw_promotes_to_styled() {
    let mut chart = StreamingChart::new(NullRenderer::default(), config()).expect("chart init");
    chart.redraw();
    assert_eq!(chart.lifecycle(), ChartLifecycle::Styled);
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Full);
}

#[test]
fn static_append_draws_segment_until_window_scrolls() {
    let mut chart = StreamingChart::new(NullRenderer::default(), config()).expect("chart init");
    chart.render().expect("initial render");

    chart.append(&[1.0, 2.0]).expect("append");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Segment);
    chart.render().expect("render");
    assert_eq!(chart.renderer().last_kind, Some(FrameKind::Segment));

    chart.append(&[3.0, 4.0, 5.0]).expect("fill to capacity");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Segment);
    chart.render().expect("render");
    // previous vertex plus three new ones
    assert_eq!(chart.renderer().last_vertex_count, 4);

    chart.append(&[6.0]).expect("scroll");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Series);
    chart.render().expect("render");
    assert_eq!(chart.renderer().last_kind, Some(FrameKind::Series));
    assert_eq!(chart.renderer().last_vertex_count, 5);
}

#[test]
fn render_without_pending_work_skips_renderer() {
    let mut chart = StreamingChart::new(NullRenderer::default(), config()).expect("chart init");
    chart.render().expect("render");
    chart.render().expect("render");
    assert_eq!(chart.renderer().frame_count, 1);
}

#[test]
fn structural_setters_request_full_redraw() {
    let mut chart = StreamingChart::new(NullRenderer::default(), config()).expect("chart init");
    chart.render().expect("render");

    chart.set_offset(4.0).expect("offset");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Full);
    chart.render().expect("render");

    chart.set_point(25.0, 2.0).expect("point");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Full);
    chart.render().expect("render");

    chart.set_size(300.0, 120.0).expect("size");
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Full);
}

#[derive(Default)]
struct FailingRenderer {
    fail_next: bool,
    frames: Vec<FrameKind>,
}

impl Renderer for FailingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(ChartError::InvalidData("backend unavailable".to_owned()));
        }
        self.frames.push(frame.kind);
        Ok(())
    }
}

#[test]
fn failed_render_keeps_pending_work() {
    let renderer = FailingRenderer {
        fail_next: true,
        frames: Vec::new(),
    };
    let mut chart = StreamingChart::new(renderer, config()).expect("chart init");
    chart.append(&[1.0, 2.0]).expect("append");

    assert!(chart.render().is_err());
    assert_eq!(chart.lifecycle(), ChartLifecycle::Initialized);
    assert_eq!(chart.pending_invalidation(), InvalidationLevel::Full);

    chart.render().expect("retry");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames, vec![FrameKind::Full]);
}
