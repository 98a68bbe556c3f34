//! streaming-chart: real-time streaming line-chart core.
//!
//! The crate keeps a bounded, scrolling window of samples, tracks its
//! extremes incrementally, auto-fits the vertical scale and turns the
//! result into backend-agnostic draw instructions for a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{StreamingChart, StreamingChartConfig};
pub use error::{ChartError, ChartResult};
