pub mod dynamic_scale;
pub mod extremum;
pub mod grid;
pub mod mapper;
pub mod sample_window;
pub mod types;

pub use dynamic_scale::{MIN_WORK_DELTA, ScaleState, VerticalScale, fit_dynamic_scale};
pub use extremum::{Extreme, ExtremePosition, ExtremeRefresh, ExtremeTracker, WindowExtremes};
pub use grid::{GridLines, GridSpacing, layout_grid};
pub use mapper::{CoordinateMapper, MAX_PIXEL_OVERSHOOT, interpolated_value};
pub use sample_window::{MAX_WINDOW_CAPACITY, SampleWindow, window_capacity};
pub use types::{AxisConfig, DynamicSpace, MIN_POINT_DIMENSION, PointGeometry, Size};
