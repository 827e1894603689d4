//! Predictor Core
//!
//! Reference Dst forecaster for the evaluation harness. Minute-level solar
//! wind is aggregated to hourly means and standard deviations, joined with
//! the latest sunspot number, standard-scaled, gap-filled and handed to a
//! [`SequenceModel`](predictor_spi::SequenceModel).

pub mod config;
pub mod context;
pub mod features;
pub mod impute;
pub mod model;
pub mod scaler;

pub use config::{LinearWeights, PredictorConfig, DEFAULT_SOLAR_WIND_FEATURES, DEFAULT_TIMESTEPS};
pub use context::PredictorContext;
pub use features::{aggregate_hourly, HourlyFeatures, SUNSPOT_FEATURE};
pub use impute::{forward_fill, impute, interpolate_linear};
pub use model::LinearSequenceModel;
pub use predictor_spi::{PredictorError, Result, SequenceModel};
pub use scaler::StandardScaler;
