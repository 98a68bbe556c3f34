mod chart_style;
mod coordinate_queries;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod invalidation;
mod json_contract;
mod render_frame_builder;
mod validation;

pub use chart_style::{
    AxisLineStyle, BackgroundStyle, ChartStyle, FillKind, FillStyle, GridStyle, LineStyle,
    PointStyle,
};
pub use engine::{ChartLifecycle, StreamingChart};
pub use engine_config::StreamingChartConfig;
pub use engine_snapshot::ChartSnapshot;
pub use invalidation::{InvalidationLevel, PendingRedraw};
pub use json_contract::{
    CHART_CONFIG_JSON_SCHEMA_V1, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartConfigJsonContractV1,
    ChartSnapshotJsonContractV1,
};
