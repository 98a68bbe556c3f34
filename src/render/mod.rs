mod frame;
mod null_renderer;
mod primitives;

pub use frame::{FrameKind, RenderFrame, SeriesPrimitives};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, ClipRect, Color, DashPattern, FillPaint, FillPrimitive, GradientStop,
    GradientStops, LinePrimitive, PolylinePrimitive, RectPrimitive, Vertex,
};

pub(crate) use primitives::validate_gradient_stops;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`; what to clear before
/// drawing it is given by `RenderFrame::kind`.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
