//! Harness Service Provider Interface
//!
//! Defines the data model, the external predictor contract and the error
//! taxonomy shared by every harness crate.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{fn_predictor, FnPredictor, PredictResult, Predictor};
pub use error::{HarnessError, Result};
pub use model::{
    EvaluationPoint, FeatureWindow, GroundTruthRow, GroundTruthTable, ParseTimedeltaError, Period,
    PeriodSeries, PredictionRecord, SeriesWindow, SubmissionFrame, SubmissionTable, Timedelta,
    TimeSeries,
};
