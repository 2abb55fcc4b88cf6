use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the tipselect library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a pressure or flow measurement is non-finite or not
    /// strictly positive.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when the tip chart contains no rows to match against.
    #[error("tip chart is empty; nothing to match against")]
    EmptyChart,

    /// Raised when the tip chart fails load-time validation.
    #[error("invalid tip chart data: {message}")]
    ChartDataValidation { message: String },

    /// Chart file could not be located at the resolved path.
    #[error("tip chart not found at {path}")]
    ChartNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the tip chart")]
    ProjectDirsUnavailable,

    /// Raised when a matched tip size cannot be resolved back to a chart
    /// row. Indicates a defect in the matching logic, not bad input.
    #[error("matched tip size {tip} has no row in the chart")]
    TipNotInChart { tip: f64 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
