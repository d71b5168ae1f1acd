//! Error types for the anofox-smoothing library.

use thiserror::Error;

/// Result type alias for smoothing and forecasting operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Broad category of a [`ForecastError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad hyperparameters or input data, rejected before any state changes.
    Validation,
    /// An operation was called on a model that has not been fitted.
    State,
    /// The recursion produced non-finite state for otherwise valid input.
    Computation,
}

/// Errors that can occur during smoothing and forecasting operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// NaN or infinity found in the input.
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Zero or negative value passed to a model that divides by the data.
    #[error(
        "multiplicative seasonality requires strictly positive data, got {value} at index {index}"
    )]
    NonPositiveValue { index: usize, value: f64 },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl ForecastError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::FitRequired => ErrorKind::State,
            ForecastError::ComputationError(_) => ErrorKind::Computation,
            _ => ErrorKind::Validation,
        }
    }
}
