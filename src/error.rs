use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("degenerate data range on {axis} axis: min and max must differ")]
    DegenerateRange { axis: char },

    #[error("unrecognized axis direction: {0}")]
    UnknownAxisDirection(u8),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
