use crate::core::{
    AxisConfig, ExtremeTracker, PointGeometry, SampleWindow, ScaleState, Size,
};

use super::{ChartLifecycle, ChartStyle, PendingRedraw};

/// Caller-supplied configuration, replaced only through setters.
pub(super) struct ChartSettings {
    pub(super) size: Size,
    pub(super) point: PointGeometry,
    pub(super) axis: AxisConfig,
    pub(super) style: ChartStyle,
}

/// Window and everything derived from it.
pub(super) struct ChartModel {
    pub(super) window: SampleWindow,
    pub(super) tracker: ExtremeTracker,
    pub(super) scale: ScaleState,
}

impl ChartModel {
    pub(super) fn new(settings: &ChartSettings, capacity: usize) -> Self {
        Self {
            window: SampleWindow::with_capacity(capacity),
            tracker: ExtremeTracker::new(capacity),
            scale: ScaleState::from_config(settings.point, settings.axis),
        }
    }
}

pub(super) struct ChartRuntimeState {
    pub(super) lifecycle: ChartLifecycle,
    pub(super) pending: PendingRedraw,
}

/// Internal engine core state used by the public facade (`StreamingChart`).
pub(super) struct EngineCore {
    pub(super) settings: ChartSettings,
    pub(super) model: ChartModel,
    pub(super) runtime: ChartRuntimeState,
}
