use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Smallest point dimension accepted by the engine, in pixels.
pub const MIN_POINT_DIMENSION: f64 = 0.001;

/// Drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Returns `true` when `(x, y)` lies inside the drawing area, edges included.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Pixel spacing between samples (`width`) and pixels per value unit (`height`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    pub width: f64,
    pub height: f64,
}

impl PointGeometry {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidPoint {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Raises both dimensions to `MIN_POINT_DIMENSION`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_POINT_DIMENSION),
            height: self.height.max(MIN_POINT_DIMENSION),
        }
    }
}

/// Value-space margin reserved above and below the data when auto-scaling.
///
/// Both margins are expressed in pixels of the drawing height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DynamicSpace {
    pub top: f64,
    pub bottom: f64,
}

impl DynamicSpace {
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Vertical axis configuration.
///
/// `offset` is the value mapped to the bottom edge of the drawing area while
/// the axis is static.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisConfig {
    pub offset: f64,
    #[serde(default)]
    pub dynamic_space: DynamicSpace,
    #[serde(default)]
    pub is_dynamic: bool,
}

impl AxisConfig {
    #[must_use]
    pub const fn fixed(offset: f64) -> Self {
        Self {
            offset,
            dynamic_space: DynamicSpace::new(0.0, 0.0),
            is_dynamic: false,
        }
    }

    #[must_use]
    pub const fn dynamic(offset: f64, dynamic_space: DynamicSpace) -> Self {
        Self {
            offset,
            dynamic_space,
            is_dynamic: true,
        }
    }

    pub fn validate(self, size: Size) -> ChartResult<Self> {
        if !self.offset.is_finite() {
            return Err(ChartError::InvalidAxis(
                "axis offset must be finite".to_owned(),
            ));
        }
        let DynamicSpace { top, bottom } = self.dynamic_space;
        if !top.is_finite() || !bottom.is_finite() || top < 0.0 || bottom < 0.0 {
            return Err(ChartError::InvalidAxis(
                "dynamic space margins must be finite and >= 0".to_owned(),
            ));
        }
        if self.is_dynamic && top + bottom >= size.height {
            return Err(ChartError::InvalidAxis(format!(
                "dynamic space margins ({top} + {bottom}) leave no working height in {}px",
                size.height
            )));
        }
        Ok(self)
    }
}
