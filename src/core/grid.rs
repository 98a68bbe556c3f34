use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::CoordinateMapper;

/// Upper bound on emitted lines per direction.
pub const MAX_GRID_LINES: usize = 4096;

/// Grid cell size and phase.
///
/// `width` and `offset` are measured in points (sample steps), `height` in
/// value units. A zero `width` or `height` disables that direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSpacing {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub offset: f64,
}

impl GridSpacing {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            offset: 0.0,
        }
    }

    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

/// Grid line positions in local pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLines {
    /// X of each vertical line, ascending.
    pub vertical: Vec<f64>,
    /// Y of each horizontal line, from the bottom edge upwards.
    pub horizontal: Vec<f64>,
}

/// Lays out grid lines for the current scale.
///
/// Horizontal lines stay anchored to value multiples of `spacing.height`, so
/// they move with a dynamic axis offset.
#[must_use]
pub fn layout_grid(mapper: CoordinateMapper, spacing: GridSpacing) -> GridLines {
    let size = mapper.size();
    let point = mapper.point();
    let mut lines = GridLines::default();

    let step_x = point.width * spacing.width;
    if step_x > 0.0 {
        let mut x = (spacing.offset * point.width) % step_x;
        if x <= 0.0 {
            x += step_x;
        }
        while x < size.width {
            if lines.vertical.len() == MAX_GRID_LINES {
                warn!(step_x, "vertical grid truncated");
                break;
            }
            lines.vertical.push(x);
            x += step_x;
        }
    }

    let step_y = point.height * spacing.height;
    if step_y > 0.0 {
        let mut shift = (-mapper.axis_offset() * point.height) % step_y;
        if shift < 0.0 {
            shift += step_y;
        }
        let mut y = size.height - shift;
        while y >= 0.0 {
            if lines.horizontal.len() == MAX_GRID_LINES {
                warn!(step_y, "horizontal grid truncated");
                break;
            }
            lines.horizontal.push(y);
            y -= step_y;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::{GridSpacing, layout_grid};
    use crate::core::{CoordinateMapper, PointGeometry, Size};

    #[test]
    fn vertical_lines_skip_left_edge_and_follow_offset() {
        let mapper = CoordinateMapper::new(
            Size::new(100.0, 40.0),
            PointGeometry::new(10.0, 1.0),
            0.0,
        );
        let grid = layout_grid(mapper, GridSpacing::new(3.0, 0.0));
        assert_eq!(grid.vertical, vec![30.0, 60.0, 90.0]);
        assert!(grid.horizontal.is_empty());

        let shifted = layout_grid(mapper, GridSpacing::new(3.0, 0.0).with_offset(-1.0));
        assert_eq!(shifted.vertical, vec![20.0, 50.0, 80.0]);
    }

    #[test]
    fn horizontal_lines_track_axis_offset() {
        let mapper = CoordinateMapper::new(
            Size::new(100.0, 40.0),
            PointGeometry::new(10.0, 2.0),
            -2.5,
        );
        // value 0 sits at y = 40 - 2.5 * 2 = 35; lines every 10 px from there.
        let grid = layout_grid(mapper, GridSpacing::new(0.0, 5.0));
        assert_eq!(grid.horizontal, vec![35.0, 25.0, 15.0, 5.0]);
    }
}
