use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart size: width={width}, height={height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("invalid point geometry: width={width}, height={height}")]
    InvalidPoint { width: f64, height: f64 },

    #[error("invalid axis: {0}")]
    InvalidAxis(String),

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
