use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use streaming_chart::api::{
    AxisLineStyle, ChartStyle, FillKind, FillStyle, GridStyle, StreamingChart,
    StreamingChartConfig,
};
use streaming_chart::core::{CoordinateMapper, GridSpacing, PointGeometry, Size};
use streaming_chart::render::{Color, DashPattern, NullRenderer};

fn wave(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.05;
            t.sin() * 40.0 + (t * 0.13).cos() * 15.0
        })
        .collect()
}

fn bench_value_pixel_round_trip(c: &mut Criterion) {
    let mapper = CoordinateMapper::new(
        Size::new(1920.0, 1080.0),
        PointGeometry::new(2.0, 3.5),
        -120.0,
    );

    c.bench_function("value_pixel_round_trip", |b| {
        b.iter(|| {
            let y = mapper.value_to_pixel_y(black_box(42.125));
            let _ = mapper.pixel_y_to_value(y);
        })
    });
}

fn bench_streaming_append_10k(c: &mut Criterion) {
    let samples = wave(10_000);
    let config = StreamingChartConfig::new(Size::new(1600.0, 400.0), PointGeometry::new(2.0, 1.0))
        .with_dynamic_axis(10.0, 10.0);

    c.bench_function("streaming_append_10k_single", |b| {
        b.iter(|| {
            let mut chart = StreamingChart::new(NullRenderer::default(), config.clone())
                .expect("chart init");
            for sample in &samples {
                chart.append(black_box(&[*sample])).expect("append");
            }
        })
    });

    c.bench_function("streaming_append_10k_batched", |b| {
        b.iter(|| {
            let mut chart = StreamingChart::new(NullRenderer::default(), config.clone())
                .expect("chart init");
            for batch in samples.chunks(64) {
                chart.append(black_box(batch)).expect("append");
            }
        })
    });
}

fn bench_full_frame_build(c: &mut Criterion) {
    let style = ChartStyle::line_only()
        .with_grid(GridStyle {
            thickness: 1.0,
            color: Color::rgba(0.0, 0.0, 0.0, 0.2),
            dash: DashPattern::new(),
            spacing: GridSpacing::new(25.0, 10.0),
        })
        .with_axis_line(AxisLineStyle {
            thickness: 1.0,
            color: Color::BLACK,
        })
        .with_fill(FillStyle {
            kind: FillKind::Solid {
                color: Color::rgba(0.0, 0.4, 1.0, 0.3),
            },
            clip: true,
        });
    let config = StreamingChartConfig::new(Size::new(1600.0, 400.0), PointGeometry::new(2.0, 1.0))
        .with_dynamic_axis(10.0, 10.0)
        .with_style(style);
    let mut chart = StreamingChart::new(NullRenderer::default(), config).expect("chart init");
    chart.append(&wave(801)).expect("append");

    c.bench_function("full_frame_build_801", |b| {
        b.iter(|| {
            let _ = chart.build_render_frame().expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_value_pixel_round_trip,
    bench_streaming_append_10k,
    bench_full_frame_build
);
criterion_main!(benches);
