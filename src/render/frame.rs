use crate::core::Size;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, FillPrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive,
};

/// Which layers a frame replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FrameKind {
    /// New samples only; the renderer keeps its existing series drawing and
    /// adds this frame on top.
    Segment,
    /// Series layer (line, markers, fill) cleared and redrawn.
    Series,
    /// Every layer cleared and redrawn.
    Full,
}

/// Chart line, markers and fill for one series pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesPrimitives {
    pub polyline: Option<PolylinePrimitive>,
    pub markers: Vec<CirclePrimitive>,
    pub fill: Option<FillPrimitive>,
}

impl SeriesPrimitives {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polyline.is_none() && self.markers.is_empty() && self.fill.is_none()
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// Layers are listed back to front. `background`, `grid_lines` and
/// `axis_line` are only populated for `FrameKind::Full`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub size: Size,
    pub kind: FrameKind,
    pub background: Option<RectPrimitive>,
    pub grid_lines: Vec<LinePrimitive>,
    pub series: SeriesPrimitives,
    pub axis_line: Option<LinePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(size: Size, kind: FrameKind) -> Self {
        Self {
            size,
            kind,
            background: None,
            grid_lines: Vec::new(),
            series: SeriesPrimitives::default(),
            axis_line: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.size.validate()?;
        if let Some(background) = self.background {
            background.validate()?;
        }
        for line in &self.grid_lines {
            line.validate()?;
        }
        if let Some(polyline) = &self.series.polyline {
            polyline.validate()?;
        }
        for marker in &self.series.markers {
            marker.validate()?;
        }
        if let Some(fill) = &self.series.fill {
            fill.validate()?;
        }
        if let Some(axis_line) = &self.axis_line {
            axis_line.validate()?;
        }
        Ok(())
    }

    /// Number of line-like primitives (grid, axis, chart polyline).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.grid_lines.len()
            + usize::from(self.axis_line.is_some())
            + usize::from(self.series.polyline.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.grid_lines.is_empty()
            && self.axis_line.is_none()
            && self.series.is_empty()
    }
}
