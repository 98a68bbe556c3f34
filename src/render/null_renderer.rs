use crate::error::ChartResult;
use crate::render::{FrameKind, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frame_count: usize,
    pub last_kind: Option<FrameKind>,
    pub last_line_count: usize,
    pub last_vertex_count: usize,
    pub last_marker_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frame_count += 1;
        self.last_kind = Some(frame.kind);
        self.last_line_count = frame.line_count();
        self.last_vertex_count = frame
            .series
            .polyline
            .as_ref()
            .map_or(0, |polyline| polyline.vertices.len());
        self.last_marker_count = frame.series.markers.len();
        Ok(())
    }
}
