use serde::{Deserialize, Serialize};

use crate::core::{AxisConfig, DynamicSpace, PointGeometry, Size};

use super::ChartStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamingChartConfig {
    pub size: Size,
    pub point: PointGeometry,
    #[serde(default)]
    pub axis: AxisConfig,
    #[serde(default)]
    pub style: ChartStyle,
}

impl StreamingChartConfig {
    /// Creates a config with a static axis at offset zero and a plain line style.
    #[must_use]
    pub fn new(size: Size, point: PointGeometry) -> Self {
        Self {
            size,
            point,
            axis: AxisConfig::fixed(0.0),
            style: ChartStyle::line_only(),
        }
    }

    /// Sets the value mapped to the bottom edge of a static axis.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.axis.offset = offset;
        self
    }

    /// Enables auto-scaling with the given top/bottom margins in pixels.
    #[must_use]
    pub fn with_dynamic_axis(mut self, top: f64, bottom: f64) -> Self {
        self.axis.is_dynamic = true;
        self.axis.dynamic_space = DynamicSpace::new(top, bottom);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisConfig) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }
}
