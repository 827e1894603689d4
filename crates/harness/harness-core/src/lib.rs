//! Harness Core
//!
//! Loading, windowing, replay and scoring for Dst forecast evaluation:
//!
//! - [`store`]: CSV inputs into [`TimeSeries`](harness_spi::TimeSeries) tables
//! - [`frame`]: submission frame and ground truth from the labels
//! - [`window`]: per-point lookback windows
//! - [`runner`]: budgeted, in-order predictor replay
//! - [`scorer`]: joint RMSE over both horizons
//! - [`output`]: CSV submission writer

pub mod frame;
pub mod output;
pub mod runner;
pub mod scorer;
pub mod store;
pub mod validate;
pub mod window;

pub use frame::{build_ground_truth, build_submission_frame, check_aligned, HORIZON, LOOKBACK};
pub use output::{write_submission, write_submission_to};
pub use runner::{PredictionRunner, RunSummary};
pub use scorer::score;
pub use store::{ensure_inputs_exist, load_series, read_series, FeatureStore, SeriesSchema};
pub use validate::{validate_value, Validated};
pub use window::WindowExtractor;
