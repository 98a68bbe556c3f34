use crate::core::{CoordinateMapper, layout_grid};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, ClipRect, FillPaint, FillPrimitive, FrameKind, LinePrimitive,
    PolylinePrimitive, RectPrimitive, RenderFrame, Renderer, SeriesPrimitives, Vertex,
};

use super::{ChartStyle, FillKind, FillStyle, PendingRedraw, StreamingChart};

impl<R: Renderer> StreamingChart<R> {
    /// Builds a complete frame for the current state.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        Ok(self.build_frame(FrameKind::Full, 0))
    }

    pub(super) fn build_pending_frame(
        &self,
        pending: PendingRedraw,
    ) -> ChartResult<Option<RenderFrame>> {
        let Some(kind) = pending.level().frame_kind() else {
            return Ok(None);
        };
        let start = match kind {
            FrameKind::Segment => pending.segment_start().unwrap_or(0),
            FrameKind::Series | FrameKind::Full => 0,
        };
        Ok(Some(self.build_frame(kind, start)))
    }

    fn build_frame(&self, kind: FrameKind, first_new: usize) -> RenderFrame {
        let size = self.core.settings.size;
        let style = &self.core.settings.style;
        let mapper = self.mapper();
        let mut frame = RenderFrame::new(size, kind);

        if kind == FrameKind::Full {
            frame.background = style
                .background
                .filter(|background| background.color.is_visible())
                .map(|background| {
                    RectPrimitive::new(0.0, 0.0, size.width, size.height, background.color)
                });
            frame.grid_lines = grid_primitives(style, mapper);
            frame.axis_line = axis_line_primitive(style, mapper);
        }

        frame.series = self.series_primitives(style, mapper, first_new);
        frame
    }

    /// Series geometry from window index `first_new` on.
    ///
    /// A non-zero `first_new` also includes the previous vertex so the new
    /// segment connects to what is already drawn.
    fn series_primitives(
        &self,
        style: &ChartStyle,
        mapper: CoordinateMapper,
        first_new: usize,
    ) -> SeriesPrimitives {
        let samples = self.data();
        let first_new = first_new.min(samples.len());
        let first_vertex = first_new.saturating_sub(1);
        let vertices: Vec<Vertex> = samples[first_vertex..]
            .iter()
            .enumerate()
            .map(|(offset, &value)| {
                let index = (first_vertex + offset) as f64;
                Vertex::new(mapper.index_to_pixel_x(index), mapper.value_to_pixel_y(value))
            })
            .collect();
        let size = mapper.size();
        let mut series = SeriesPrimitives::default();

        if let Some(lines) = &style.lines {
            if lines.thickness > 0.0 && lines.color.is_visible() && vertices.len() >= 2 {
                series.polyline = Some(PolylinePrimitive {
                    vertices: vertices.clone(),
                    stroke_width: lines.thickness,
                    color: lines.color,
                    dash: lines.dash.clone(),
                    clip: lines.clip.then(|| ClipRect::covering(size)),
                });
            }
        }

        if let Some(points) = style.points {
            if points.radius > 0.0 {
                let skip = first_new - first_vertex;
                series.markers = vertices
                    .iter()
                    .skip(skip)
                    .filter(|vertex| !points.clip || size.contains(vertex.x, vertex.y))
                    .map(|vertex| CirclePrimitive {
                        x: vertex.x,
                        y: vertex.y,
                        radius: points.radius,
                        stroke_width: points.thickness,
                        stroke_color: points.line_color,
                        fill_color: points.fill_color,
                    })
                    .collect();
            }
        }

        if let Some(fill) = &style.fill {
            series.fill = self.fill_primitive(fill, mapper, vertices);
        }

        series
    }

    /// Closes the chart line down to the zero line.
    ///
    /// The base is clamped to the bottom edge unless the window dips below
    /// zero, so a positive-only series never fills past the drawing area.
    fn fill_primitive(
        &self,
        fill: &FillStyle,
        mapper: CoordinateMapper,
        mut polygon: Vec<Vertex>,
    ) -> Option<FillPrimitive> {
        let (first, last) = match polygon.as_slice() {
            [first, .., last] => (*first, *last),
            _ => return None,
        };
        let size = mapper.size();
        let tracker = self.extreme_tracker();
        let axis_y = mapper.value_to_pixel_y(0.0);
        let base_y = if tracker.min().value < 0.0 {
            axis_y
        } else {
            axis_y.min(size.height)
        };
        polygon.push(Vertex::new(last.x, base_y));
        polygon.push(Vertex::new(first.x, base_y));

        let paint = match &fill.kind {
            FillKind::Solid { color } => FillPaint::Solid(*color),
            FillKind::LinearGradient {
                symmetric,
                stops,
                coords,
            } => {
                let top = tracker.max().value.abs();
                let mut anchor_y = mapper.value_to_pixel_y(top);
                let height = if *symmetric {
                    let bottom = tracker.min().value.abs();
                    let reach = top.max(bottom);
                    if bottom == reach {
                        anchor_y -= mapper.value_span_to_pixels(top - bottom);
                    }
                    2.0 * mapper.value_span_to_pixels(reach)
                } else {
                    mapper.value_span_to_pixels(tracker.max().value - tracker.min().value)
                };
                let width = last.x - first.x;
                FillPaint::LinearGradient {
                    x1: saturate(first.x + coords[0] * width),
                    y1: saturate(anchor_y + coords[1] * height),
                    x2: saturate(first.x + coords[2] * width),
                    y2: saturate(anchor_y + coords[3] * height),
                    stops: stops.clone(),
                }
            }
        };

        Some(FillPrimitive {
            polygon,
            paint,
            clip: fill.clip.then(|| ClipRect::covering(size)),
        })
    }
}

/// Keeps gradient endpoints finite when configured coordinates overshoot.
fn saturate(value: f64) -> f64 {
    value.clamp(f64::MIN, f64::MAX)
}

fn grid_primitives(style: &ChartStyle, mapper: CoordinateMapper) -> Vec<LinePrimitive> {
    let Some(grid) = &style.grid else {
        return Vec::new();
    };
    if grid.thickness <= 0.0 || !grid.color.is_visible() {
        return Vec::new();
    }
    let size = mapper.size();
    let lines = layout_grid(mapper, grid.spacing);
    let vertical = lines
        .vertical
        .iter()
        .map(|&x| LinePrimitive::new(x, 0.0, x, size.height, grid.thickness, grid.color));
    let horizontal = lines
        .horizontal
        .iter()
        .map(|&y| LinePrimitive::new(0.0, y, size.width, y, grid.thickness, grid.color));
    vertical
        .chain(horizontal)
        .map(|line| line.with_dash(grid.dash.clone()))
        .collect()
}

/// Zero line; omitted while value zero is outside the drawing area.
fn axis_line_primitive(style: &ChartStyle, mapper: CoordinateMapper) -> Option<LinePrimitive> {
    let axis_line = style.axis_line?;
    if axis_line.thickness <= 0.0 || !axis_line.color.is_visible() {
        return None;
    }
    let size = mapper.size();
    let y = mapper.value_to_exact_pixel_y(0.0);
    if !size.contains(0.0, y) {
        return None;
    }
    Some(LinePrimitive::new(
        0.0,
        y,
        size.width,
        y,
        axis_line.thickness,
        axis_line.color,
    ))
}
