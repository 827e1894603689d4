//! Reference predictor errors

use std::path::PathBuf;
use thiserror::Error;

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Errors raised while building features or running a sequence model
#[derive(Error, Debug)]
pub enum PredictorError {
    /// Fewer hourly rows than the model looks back over
    #[error("Insufficient history: need {required} hourly rows, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// A configured feature column is absent from the input
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// Input matrix does not match the model
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Invalid model configuration
    #[error("Invalid model configuration: {0}")]
    Config(String),

    /// Model configuration could not be read
    #[error("Failed to read {}: {reason}", path.display())]
    Io { path: PathBuf, reason: String },
}
