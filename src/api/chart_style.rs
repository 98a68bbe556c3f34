use serde::{Deserialize, Serialize};

use crate::core::GridSpacing;
use crate::render::{Color, DashPattern, GradientStops};

/// Solid fill behind everything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStyle {
    pub color: Color,
}

/// Grid stroke and spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub thickness: f64,
    pub color: Color,
    #[serde(default)]
    pub dash: DashPattern,
    pub spacing: GridSpacing,
}

/// Horizontal line drawn at value zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLineStyle {
    pub thickness: f64,
    pub color: Color,
}

/// Chart polyline stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub thickness: f64,
    pub color: Color,
    #[serde(default)]
    pub dash: DashPattern,
    /// Clip the line to the drawing area.
    #[serde(default)]
    pub clip: bool,
}

/// Markers drawn on every sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Outline width.
    pub thickness: f64,
    pub radius: f64,
    pub line_color: Color,
    pub fill_color: Color,
    /// Skip markers whose center falls outside the drawing area.
    #[serde(default)]
    pub clip: bool,
}

/// Paint for the area between the chart line and the zero line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FillKind {
    Solid {
        color: Color,
    },
    /// Gradient whose endpoints are given as `[x1, y1, x2, y2]` fractions of
    /// the filled extent.
    LinearGradient {
        /// Span the gradient over `[-m, m]` where `m` is the larger absolute
        /// extreme, so its middle stop lands on value zero.
        #[serde(default)]
        symmetric: bool,
        stops: GradientStops,
        coords: [f64; 4],
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub kind: FillKind,
    #[serde(default)]
    pub clip: bool,
}

/// Visual configuration.
///
/// Every layer is optional; an absent record disables that layer, and a
/// fully transparent color or zero thickness draws nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub background: Option<BackgroundStyle>,
    pub grid: Option<GridStyle>,
    pub axis_line: Option<AxisLineStyle>,
    pub lines: Option<LineStyle>,
    pub points: Option<PointStyle>,
    pub fill: Option<FillStyle>,
}

impl ChartStyle {
    /// Plain black 1px line with no other layers.
    #[must_use]
    pub fn line_only() -> Self {
        Self {
            lines: Some(LineStyle {
                thickness: 1.0,
                color: Color::BLACK,
                dash: DashPattern::new(),
                clip: false,
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_background(mut self, style: BackgroundStyle) -> Self {
        self.background = Some(style);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, style: GridStyle) -> Self {
        self.grid = Some(style);
        self
    }

    #[must_use]
    pub fn with_axis_line(mut self, style: AxisLineStyle) -> Self {
        self.axis_line = Some(style);
        self
    }

    #[must_use]
    pub fn with_lines(mut self, style: LineStyle) -> Self {
        self.lines = Some(style);
        self
    }

    #[must_use]
    pub fn with_points(mut self, style: PointStyle) -> Self {
        self.points = Some(style);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, style: FillStyle) -> Self {
        self.fill = Some(style);
        self
    }
}
