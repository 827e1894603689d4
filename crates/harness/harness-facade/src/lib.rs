//! Harness Facade
//!
//! Unified re-exports for the evaluation harness plus the end-to-end
//! [`run_evaluation`] pipeline:
//! - `harness_spi` - data model, predictor contract, errors
//! - `harness_api` - run configuration
//! - `harness_core` - loading, windowing, replay, scoring
//!
//! # Example
//!
//! ```rust,ignore
//! use harness_facade::{fn_predictor, run_evaluation, RunConfig};
//!
//! let config = RunConfig::new("data");
//! let persistence = fn_predictor("persistence", |_| Ok((-10.0, -10.0)));
//! let outcome = run_evaluation(&config, &persistence)?;
//! println!("evaluated {} points", outcome.frame.len());
//! ```

mod pipeline;

// Re-export everything from SPI
pub use harness_spi::*;

// Re-export everything from API
pub use harness_api::*;

// Re-export core modules and their entry points
pub use harness_core::{
    build_ground_truth, build_submission_frame, check_aligned, ensure_inputs_exist, frame,
    load_series, output, read_series, runner, score, scorer, store, validate, validate_value,
    window, write_submission, write_submission_to, FeatureStore, PredictionRunner, RunSummary,
    SeriesSchema, Validated, WindowExtractor, HORIZON, LOOKBACK,
};

pub use pipeline::{run_evaluation, RunOutcome};
