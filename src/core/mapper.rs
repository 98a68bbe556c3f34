use crate::core::{PointGeometry, Size};

/// Fractional indices are quantized to this many steps per point.
pub const INDEX_QUANTIZATION: f64 = 1000.0;

/// How far outside the drawing area a mapped Y may land, in pixels.
///
/// Values mapping further away are saturated so frames stay finite.
pub const MAX_PIXEL_OVERSHOOT: f64 = 1.0e7;

/// Maps between sample space `(index, value)` and local pixel space `(x, y)`.
///
/// The mapper is a value snapshot of the current derived scale; build a new
/// one after any append that may have changed a dynamic axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    size: Size,
    point: PointGeometry,
    axis_offset: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub const fn new(size: Size, point: PointGeometry, axis_offset: f64) -> Self {
        Self {
            size,
            point,
            axis_offset,
        }
    }

    #[must_use]
    pub fn size(self) -> Size {
        self.size
    }

    #[must_use]
    pub fn point(self) -> PointGeometry {
        self.point
    }

    #[must_use]
    pub fn axis_offset(self) -> f64 {
        self.axis_offset
    }

    /// Unrounded Y of `value`; used where sub-pixel placement matters.
    ///
    /// Saturates to `MAX_PIXEL_OVERSHOOT` beyond either edge.
    #[must_use]
    pub fn value_to_exact_pixel_y(self, value: f64) -> f64 {
        let y = self.size.height - (value - self.axis_offset) * self.point.height;
        y.clamp(
            -MAX_PIXEL_OVERSHOOT,
            self.size.height + MAX_PIXEL_OVERSHOOT,
        )
    }

    /// Pixel length of a value span, saturated like mapped Y coordinates.
    #[must_use]
    pub fn value_span_to_pixels(self, span: f64) -> f64 {
        (span.abs() * self.point.height).min(self.size.height + 2.0 * MAX_PIXEL_OVERSHOOT)
    }

    #[must_use]
    pub fn value_to_pixel_y(self, value: f64) -> f64 {
        self.value_to_exact_pixel_y(value).round()
    }

    #[must_use]
    pub fn pixel_y_to_value(self, local_y: f64) -> f64 {
        (self.size.height - local_y) / self.point.height + self.axis_offset
    }

    #[must_use]
    pub fn index_to_pixel_x(self, index: f64) -> f64 {
        (index * self.point.width).round()
    }

    /// Fractional sample index under `local_x`.
    #[must_use]
    pub fn pixel_x_to_index(self, local_x: f64) -> f64 {
        local_x / self.point.width
    }

    /// Nearest sample index under `local_x`, clamped to a window of `len` samples.
    #[must_use]
    pub fn pixel_x_to_nearest_index(self, local_x: f64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = self.pixel_x_to_index(local_x).round();
        if index <= 0.0 || index.is_nan() {
            return Some(0);
        }
        Some((index as usize).min(len - 1))
    }
}

/// Samples `samples` at a fractional index with linear interpolation.
///
/// The index is clamped to the window; an empty window yields `0.0`.
#[must_use]
pub fn interpolated_value(samples: &[f64], index: f64) -> f64 {
    let Some(last) = samples.len().checked_sub(1) else {
        return 0.0;
    };
    let index = (index * INDEX_QUANTIZATION).round() / INDEX_QUANTIZATION;
    let index = index.min(last as f64).max(0.0);
    let floor = index.floor();
    let base = floor as usize;
    if floor == index {
        return samples[base];
    }
    let delta = samples[base + 1] - samples[base];
    samples[base] + delta * (index - floor)
}
