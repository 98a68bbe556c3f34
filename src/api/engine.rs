use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_chart_style;
use super::{ChartStyle, InvalidationLevel, engine_core::EngineCore};

/// Configuration lifecycle of a chart.
///
/// Only `set_style` and `redraw` move a chart to `Styled`; rendering does
/// not change the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLifecycle {
    /// Constructed; neither `set_style` nor `redraw` has been called yet.
    Initialized,
    /// Style applied or redraw requested at least once.
    Styled,
}

/// Streaming line chart facade consumed by host applications.
///
/// `StreamingChart` owns the sample window, extreme tracker and derived
/// scale, and hands draw instructions to its renderer.
pub struct StreamingChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> StreamingChart<R> {
    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.core.settings.style
    }

    /// Replaces the style and requests a full redraw.
    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        validate_chart_style(&style)?;
        self.core.settings.style = style;
        self.core.runtime.lifecycle = ChartLifecycle::Styled;
        self.invalidate(InvalidationLevel::Full);
        debug!("style replaced");
        Ok(())
    }

    #[must_use]
    pub fn lifecycle(&self) -> ChartLifecycle {
        self.core.runtime.lifecycle
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.core.runtime.pending.level()
    }

    pub(super) fn invalidate(&mut self, level: InvalidationLevel) {
        self.core.runtime.pending.merge(level);
    }

    /// Draws pending changes.
    ///
    /// A new chart starts with a full redraw pending, so its first frame is
    /// always `Full`. Nothing reaches the renderer when nothing is pending; on
    /// renderer failure the pending work is kept for the next attempt.
    pub fn render(&mut self) -> ChartResult<()> {
        let pending = self.core.runtime.pending;
        let Some(frame) = self.build_pending_frame(pending)? else {
            trace!("render skipped, nothing pending");
            return Ok(());
        };
        self.renderer.render(&frame)?;
        self.core.runtime.pending.clear();
        trace!(kind = ?frame.kind, "frame rendered");
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
