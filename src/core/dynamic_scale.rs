use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisConfig, Extreme, PointGeometry, Size};

/// Lower bound for the value span fitted into the working height.
pub const MIN_WORK_DELTA: f64 = 0.001;

/// Vertical scale derived by the engine: pixels per unit and the value at
/// the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalScale {
    pub point_height: f64,
    pub axis_offset: f64,
}

/// Fits the window range plus the configured margins into the drawing height.
#[must_use]
pub fn fit_dynamic_scale(size: Size, axis: AxisConfig, min: Extreme, max: Extreme) -> VerticalScale {
    let space = axis.dynamic_space;
    let work_height = size.height - space.top - space.bottom;
    let raw_delta = max.value - min.value - axis.offset;
    if raw_delta < MIN_WORK_DELTA {
        debug!(raw_delta, "dynamic scale delta clamped");
    }
    // Spans wider than f64 can hold saturate instead of zeroing the scale.
    let work_delta = raw_delta.clamp(MIN_WORK_DELTA, f64::MAX);
    let point_height = (work_height / work_delta).max(f64::MIN_POSITIVE);
    let axis_offset = (min.value - space.bottom / point_height).clamp(f64::MIN, f64::MAX);
    VerticalScale {
        point_height,
        axis_offset,
    }
}

/// Engine-owned derived scale state.
///
/// Starts from the configured point geometry and axis offset; a dynamic axis
/// overwrites the vertical part on every append.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    point: PointGeometry,
    axis_offset: f64,
}

impl ScaleState {
    #[must_use]
    pub fn from_config(point: PointGeometry, axis: AxisConfig) -> Self {
        Self {
            point,
            axis_offset: axis.offset,
        }
    }

    #[must_use]
    pub fn point(&self) -> PointGeometry {
        self.point
    }

    #[must_use]
    pub fn axis_offset(&self) -> f64 {
        self.axis_offset
    }

    /// Stores `next` and reports whether either component changed.
    ///
    /// Comparison is exact; any bit difference counts as a change.
    pub fn apply(&mut self, next: VerticalScale) -> bool {
        let changed =
            self.point.height != next.point_height || self.axis_offset != next.axis_offset;
        self.point.height = next.point_height;
        self.axis_offset = next.axis_offset;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::{ScaleState, VerticalScale, fit_dynamic_scale};
    use crate::core::{AxisConfig, DynamicSpace, Extreme, PointGeometry, Size};

    #[test]
    fn equal_samples_produce_huge_but_finite_scale() {
        let axis = AxisConfig::dynamic(0.0, DynamicSpace::new(0.0, 0.0));
        let scale = fit_dynamic_scale(
            Size::new(100.0, 100.0),
            axis,
            Extreme::new(4.0, 0),
            Extreme::new(4.0, 0),
        );
        assert_eq!(scale.point_height, 100.0 / 0.001);
        assert_eq!(scale.axis_offset, 4.0);
    }

    #[test]
    fn overflowing_range_keeps_scale_finite() {
        let axis = AxisConfig::dynamic(0.0, DynamicSpace::new(10.0, 10.0));
        let scale = fit_dynamic_scale(
            Size::new(100.0, 100.0),
            axis,
            Extreme::new(-1e308, 0),
            Extreme::new(1e308, 0),
        );
        assert!(scale.point_height.is_finite() && scale.point_height > 0.0);
        assert!(scale.axis_offset.is_finite());
    }

    #[test]
    fn apply_reports_changes_exactly() {
        let mut state =
            ScaleState::from_config(PointGeometry::new(10.0, 2.0), AxisConfig::fixed(1.0));
        assert!(!state.apply(VerticalScale {
            point_height: 2.0,
            axis_offset: 1.0,
        }));
        assert!(state.apply(VerticalScale {
            point_height: 2.0,
            axis_offset: 1.0 + f64::EPSILON,
        }));
        assert_eq!(state.point().width, 10.0);
    }
}
