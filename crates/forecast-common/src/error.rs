//! Error types for forecast-strips crates.

use thiserror::Error;

/// Result type alias using ForecastError.
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Primary error type for forecast processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    // === Input Errors ===
    /// The sample sequence cannot be segmented (empty, unknown first token,
    /// zero stride, or label drift in strict mode).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // === Document Errors ===
    #[error("Failed to parse forecast document: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ForecastError {
    /// Build an `InvalidInput` error from anything displayable.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ForecastError::InvalidInput(msg.into())
    }
}

// Conversion from common error types
impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Parse(format!("JSON error: {}", err))
    }
}
