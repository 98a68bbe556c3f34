use tracing::debug;

use crate::core::window_capacity;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{
    ChartLifecycle, PendingRedraw, StreamingChart, StreamingChartConfig,
    engine_core::{ChartModel, ChartRuntimeState, ChartSettings, EngineCore},
};

impl<R: Renderer> StreamingChart<R> {
    /// Creates an empty chart after validating the whole configuration.
    pub fn new(renderer: R, config: StreamingChartConfig) -> ChartResult<Self> {
        validate_config(&config)?;
        let StreamingChartConfig {
            size,
            point,
            axis,
            style,
        } = config;
        let settings = ChartSettings {
            size,
            point: point.clamped(),
            axis,
            style,
        };
        let capacity = window_capacity(settings.size, settings.point)?;
        let model = ChartModel::new(&settings, capacity);
        debug!(
            width = size.width,
            height = size.height,
            capacity = model.window.capacity(),
            dynamic = axis.is_dynamic,
            "streaming chart created"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                settings,
                model,
                runtime: ChartRuntimeState {
                    lifecycle: ChartLifecycle::Initialized,
                    pending: PendingRedraw::full(),
                },
            },
        })
    }
}
