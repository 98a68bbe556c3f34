use proptest::prelude::*;
use streaming_chart::api::{StreamingChart, StreamingChartConfig};
use streaming_chart::core::{PointGeometry, Size};
use streaming_chart::render::NullRenderer;

fn batches_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    proptest::collection::vec(
        proptest::collection::vec(-1_000i32..1_000, 0..12)
            .prop_map(|values| values.into_iter().map(f64::from).collect()),
        1..48,
    )
}

proptest! {
    #[test]
    fn tracked_extremes_match_brute_force_after_every_append(
        width in 1.0f64..40.0,
        dynamic in any::<bool>(),
        batches in batches_strategy()
    ) {
        let mut config = StreamingChartConfig::new(
            Size::new(width, 200.0),
            PointGeometry::new(1.0, 1.0),
        );
        if dynamic {
            config = config.with_dynamic_axis(10.0, 10.0);
        }
        let mut chart = StreamingChart::new(NullRenderer::default(), config).expect("chart init");
        let capacity = chart.capacity();
        prop_assert_eq!(capacity, width.floor() as usize + 1);

        for batch in &batches {
            chart.append(batch).expect("append");
            let data = chart.data();
            prop_assert!(data.len() <= capacity);

            let tracker = chart.extreme_tracker();
            if data.is_empty() {
                prop_assert!(tracker.is_sentinel());
                continue;
            }

            let brute_max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let brute_min = data.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(tracker.max().value, brute_max);
            prop_assert_eq!(tracker.min().value, brute_min);
            prop_assert!(tracker.max().age < capacity);
            prop_assert!(tracker.min().age < capacity);

            let extremes = chart.extremes().expect("non-empty window");
            prop_assert_eq!(data[extremes.max.index], brute_max);
            prop_assert_eq!(data[extremes.min.index], brute_min);
        }
    }

    #[test]
    fn extreme_index_is_latest_occurrence(
        values in proptest::collection::vec(-5i32..5, 1..64)
    ) {
        let config = StreamingChartConfig::new(
            Size::new(16.0, 100.0),
            PointGeometry::new(1.0, 1.0),
        );
        let mut chart = StreamingChart::new(NullRenderer::default(), config).expect("chart init");
        for value in values {
            chart.append(&[f64::from(value)]).expect("append");
        }

        let data = chart.data();
        let extremes = chart.extremes().expect("non-empty window");
        let latest_max = data.iter().rposition(|v| *v == extremes.max.value).expect("max present");
        let latest_min = data.iter().rposition(|v| *v == extremes.min.value).expect("min present");
        prop_assert_eq!(extremes.max.index, latest_max);
        prop_assert_eq!(extremes.min.index, latest_min);
    }
}
