use tracing::debug;

use crate::core::{
    AxisConfig, ExtremeTracker, GridSpacing, PointGeometry, Size, WindowExtremes, window_capacity,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::validation::{validate_grid_offset, validate_grid_spacing, validate_point, validate_size};
use super::{GridStyle, InvalidationLevel, StreamingChart};

/// Quantization step applied when rescaling point geometry on resize.
const POINT_RESCALE_STEP: f64 = 1000.0;

impl<R: Renderer> StreamingChart<R> {
    #[must_use]
    pub fn size(&self) -> Size {
        self.core.settings.size
    }

    /// Resizes the drawing area, keeping point geometry.
    ///
    /// Capacity follows the new width; samples that no longer fit are dropped.
    pub fn set_size(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let size = validate_size(width, height)?;
        self.core.settings.axis.validate(size)?;
        let capacity = window_capacity(size, self.core.settings.point)?;
        self.core.settings.size = size;
        self.rebuild(capacity);
        debug!(width, height, "size changed");
        Ok(())
    }

    /// Resizes the drawing area and scales point geometry by the same ratios,
    /// so roughly the same number of samples stays visible.
    pub fn set_complex_size(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let size = validate_size(width, height)?;
        self.core.settings.axis.validate(size)?;
        let previous = self.core.settings.size;
        let point = self.core.settings.point;
        let rescale = |value: f64, ratio: f64| {
            ((value * ratio) * POINT_RESCALE_STEP).floor() / POINT_RESCALE_STEP
        };
        let point = PointGeometry::new(
            rescale(point.width, width / previous.width),
            rescale(point.height, height / previous.height),
        )
        .clamped();
        let capacity = window_capacity(size, point)?;
        self.core.settings.size = size;
        self.core.settings.point = point;
        self.rebuild(capacity);
        debug!(
            width,
            height,
            point_width = point.width,
            point_height = point.height,
            "complex size changed"
        );
        Ok(())
    }

    /// Current point geometry; the height is the auto-scaled one on a dynamic axis.
    #[must_use]
    pub fn point(&self) -> PointGeometry {
        self.core.model.scale.point()
    }

    /// Point geometry as configured by the host.
    #[must_use]
    pub fn configured_point(&self) -> PointGeometry {
        self.core.settings.point
    }

    /// Sets point geometry; dimensions below 0.001 are raised to it.
    pub fn set_point(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let point = validate_point(width, height)?;
        let capacity = window_capacity(self.core.settings.size, point)?;
        self.core.settings.point = point;
        self.rebuild(capacity);
        debug!(width = point.width, height = point.height, "point changed");
        Ok(())
    }

    /// Value currently mapped to the bottom edge.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.core.model.scale.axis_offset()
    }

    /// Sets the configured axis offset.
    pub fn set_offset(&mut self, value: f64) -> ChartResult<()> {
        if !value.is_finite() {
            return Err(ChartError::InvalidAxis(
                "axis offset must be finite".to_owned(),
            ));
        }
        self.core.settings.axis.offset = value;
        self.rebuild(self.capacity());
        debug!(offset = value, "offset changed");
        Ok(())
    }

    #[must_use]
    pub fn axis(&self) -> AxisConfig {
        self.core.settings.axis
    }

    /// Grid cell size as `(width in points, height in value units)`.
    #[must_use]
    pub fn grid(&self) -> Option<(f64, f64)> {
        self.core
            .settings
            .style
            .grid
            .as_ref()
            .map(|grid| (grid.spacing.width, grid.spacing.height))
    }

    pub fn set_grid(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let grid = self.grid_style_mut()?;
        let spacing = validate_grid_spacing(GridSpacing {
            width,
            height,
            offset: grid.spacing.offset,
        })?;
        grid.spacing = spacing;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    /// Start position of vertical grid lines, in points.
    #[must_use]
    pub fn grid_offset(&self) -> Option<f64> {
        self.core
            .settings
            .style
            .grid
            .as_ref()
            .map(|grid| grid.spacing.offset)
    }

    /// Moves vertical grid lines; hosts decrement it per scrolled sample.
    pub fn set_grid_offset(&mut self, offset: f64) -> ChartResult<()> {
        let offset = validate_grid_offset(offset)?;
        self.grid_style_mut()?.spacing.offset = offset;
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    fn grid_style_mut(&mut self) -> ChartResult<&mut GridStyle> {
        self.core
            .settings
            .style
            .grid
            .as_mut()
            .ok_or_else(|| ChartError::InvalidStyle("no grid is configured".to_owned()))
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        self.core.model.window.as_slice()
    }

    #[must_use]
    pub fn data_len(&self) -> usize {
        self.core.model.window.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.core.model.window.capacity()
    }

    #[must_use]
    pub fn extreme_tracker(&self) -> &ExtremeTracker {
        &self.core.model.tracker
    }

    /// Min/max of the window with their indices; `None` while empty.
    #[must_use]
    pub fn extremes(&self) -> Option<WindowExtremes> {
        self.core
            .model
            .tracker
            .positions(self.core.model.window.len())
    }
}
