//! Model module containing the harness data types

mod frame;
mod period;
mod series;
mod table;
mod timedelta;
mod window;

pub use frame::SubmissionFrame;
pub use period::{EvaluationPoint, Period};
pub use series::{PeriodSeries, TimeSeries};
pub use table::{GroundTruthRow, GroundTruthTable, PredictionRecord, SubmissionTable};
pub use timedelta::{ParseTimedeltaError, Timedelta};
pub use window::{FeatureWindow, SeriesWindow};
