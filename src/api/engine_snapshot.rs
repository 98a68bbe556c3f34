use serde::{Deserialize, Serialize};

use crate::core::{AxisConfig, PointGeometry, Size, WindowExtremes};
use crate::render::Renderer;

use super::{ChartLifecycle, StreamingChart};

/// Serializable engine state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub size: Size,
    pub axis: AxisConfig,
    /// Derived point geometry (auto-scaled height on a dynamic axis).
    pub point: PointGeometry,
    pub axis_offset: f64,
    pub capacity: usize,
    pub lifecycle: ChartLifecycle,
    pub data: Vec<f64>,
    pub extremes: Option<WindowExtremes>,
}

impl<R: Renderer> StreamingChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            size: self.size(),
            axis: self.axis(),
            point: self.point(),
            axis_offset: self.offset(),
            capacity: self.capacity(),
            lifecycle: self.lifecycle(),
            data: self.data().to_vec(),
            extremes: self.extremes(),
        }
    }
}
