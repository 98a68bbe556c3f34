use crate::core::{CoordinateMapper, interpolated_value};
use crate::render::Renderer;

use super::StreamingChart;

impl<R: Renderer> StreamingChart<R> {
    /// Mapper for the current derived scale.
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        let scale = &self.core.model.scale;
        CoordinateMapper::new(self.core.settings.size, scale.point(), scale.axis_offset())
    }

    /// Sample value at a fractional index, linearly interpolated.
    #[must_use]
    pub fn interpolated_value(&self, index: f64) -> f64 {
        interpolated_value(self.data(), index)
    }

    #[must_use]
    pub fn interpolated_value_by_local_x(&self, local_x: f64) -> f64 {
        self.interpolated_value(self.mapper().pixel_x_to_index(local_x))
    }

    /// Nearest sample index under `local_x`; `None` while the window is empty.
    #[must_use]
    pub fn index_by_local_x(&self, local_x: f64) -> Option<usize> {
        self.mapper()
            .pixel_x_to_nearest_index(local_x, self.data_len())
    }

    #[must_use]
    pub fn fractional_index_by_local_x(&self, local_x: f64) -> f64 {
        self.mapper().pixel_x_to_index(local_x)
    }

    #[must_use]
    pub fn local_x_by_index(&self, index: usize) -> f64 {
        self.mapper().index_to_pixel_x(index as f64)
    }

    #[must_use]
    pub fn value_by_local_y(&self, local_y: f64) -> f64 {
        self.mapper().pixel_y_to_value(local_y)
    }

    #[must_use]
    pub fn local_y_by_value(&self, value: f64) -> f64 {
        self.mapper().value_to_pixel_y(value)
    }
}
