//! Harness error types.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::model::{Period, Timedelta};

/// Errors that abort an evaluation run.
///
/// None of these are retried; every failure is surfaced to the caller.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// A required input file does not exist
    #[error("File {} not found!", .0.display())]
    MissingInput(PathBuf),

    /// Input schema or value could not be understood
    #[error("Malformed input in {series}: {reason}")]
    MalformedInput { series: String, reason: String },

    /// A window could not be built for an evaluation point
    #[error("Missing feature '{feature}' for period {period} at {timestamp}")]
    MissingFeature {
        feature: String,
        period: Period,
        timestamp: Timedelta,
    },

    /// The predictor exceeded the per-call wall-clock budget
    #[error(
        "Prediction took too long at period {period}, {timestamp} (actual={:.1}s, max={:.1}s) -- exiting!",
        .elapsed.as_secs_f64(),
        .budget.as_secs_f64()
    )]
    BudgetExceeded {
        period: Period,
        timestamp: Timedelta,
        elapsed: Duration,
        budget: Duration,
    },

    /// The predictor returned an error
    #[error("Predictor failed at period {period}, {timestamp}: {reason}")]
    PredictorFailed {
        period: Period,
        timestamp: Timedelta,
        reason: String,
    },

    /// Scoring or assembly was attempted on misaligned tables
    #[error("Index mismatch: {0}")]
    IndexMismatch(String),

    /// Every ground-truth cell was missing
    #[error("No scorable cells: every ground-truth value is missing")]
    NoScorableCells,

    /// Filesystem failure while reading or writing
    #[error("I/O error on {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },

    /// Invalid run configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HarnessError {
    /// Shorthand for [`HarnessError::MalformedInput`].
    pub fn malformed(series: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            series: series.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`HarnessError::Io`].
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
