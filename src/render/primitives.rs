use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Size;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Fully transparent colors are skipped when building frames.
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.alpha > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern as alternating on/off lengths in pixels. Empty means solid.
pub type DashPattern = SmallVec<[f64; 4]>;

/// Point in local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle that drawing of a primitive must be clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ClipRect {
    #[must_use]
    pub fn covering(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }
}

/// Draw command for one straight line in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: DashPattern,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: DashPattern::new(),
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        validate_dash(&self.dash)?;
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite with non-negative extent".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Connected chart line through `vertices`.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylinePrimitive {
    pub vertices: Vec<Vertex>,
    pub stroke_width: f64,
    pub color: Color,
    pub dash: DashPattern,
    pub clip: Option<ClipRect>,
}

impl PolylinePrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_vertices(&self.vertices, "polyline")?;
        validate_stroke_width(self.stroke_width)?;
        validate_dash(&self.dash)?;
        self.color.validate()
    }
}

/// Point marker: filled circle with an optional outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Outline width; zero draws no outline.
    pub stroke_width: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "marker center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "marker outline width must be finite and >= 0".to_owned(),
            ));
        }
        self.stroke_color.validate()?;
        self.fill_color.validate()
    }
}

/// Color stop of a linear gradient; `ratio` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub ratio: f64,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(ratio: f64, color: Color) -> Self {
        Self { ratio, color }
    }
}

pub type GradientStops = SmallVec<[GradientStop; 4]>;

/// Paint used for the area under the chart line.
#[derive(Debug, Clone, PartialEq)]
pub enum FillPaint {
    Solid(Color),
    LinearGradient {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stops: GradientStops,
    },
}

/// Closed polygon under the chart line.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPrimitive {
    pub polygon: Vec<Vertex>,
    pub paint: FillPaint,
    pub clip: Option<ClipRect>,
}

impl FillPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.polygon.len() < 3 {
            return Err(ChartError::InvalidData(
                "fill polygon needs at least 3 vertices".to_owned(),
            ));
        }
        validate_vertices(&self.polygon, "fill polygon")?;
        match &self.paint {
            FillPaint::Solid(color) => color.validate(),
            FillPaint::LinearGradient {
                x1,
                y1,
                x2,
                y2,
                stops,
            } => {
                if !x1.is_finite() || !y1.is_finite() || !x2.is_finite() || !y2.is_finite() {
                    return Err(ChartError::InvalidData(
                        "gradient endpoints must be finite".to_owned(),
                    ));
                }
                validate_gradient_stops(stops)
            }
        }
    }
}

pub(crate) fn validate_gradient_stops(stops: &[GradientStop]) -> ChartResult<()> {
    if stops.is_empty() {
        return Err(ChartError::InvalidData(
            "gradient needs at least one stop".to_owned(),
        ));
    }
    let mut previous = 0.0;
    for stop in stops {
        if !stop.ratio.is_finite() || !(previous..=1.0).contains(&stop.ratio) {
            return Err(ChartError::InvalidData(
                "gradient stop ratios must be ascending within [0, 1]".to_owned(),
            ));
        }
        previous = stop.ratio;
        stop.color.validate()?;
    }
    Ok(())
}

fn validate_vertices(vertices: &[Vertex], what: &str) -> ChartResult<()> {
    if vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "{what} vertices must be finite"
        )));
    }
    Ok(())
}

fn validate_stroke_width(width: f64) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_dash(dash: &[f64]) -> ChartResult<()> {
    if dash.iter().any(|len| !len.is_finite() || *len < 0.0) {
        return Err(ChartError::InvalidData(
            "dash lengths must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
