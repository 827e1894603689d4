//! Predictor state shared across calls.

use std::path::Path;

use harness_spi::{FeatureWindow, PredictResult, Predictor};
use predictor_spi::{PredictorError, Result, SequenceModel};
use tracing::{debug, info};

use crate::config::PredictorConfig;
use crate::features::{aggregate_hourly, HourlyFeatures, SUNSPOT_FEATURE};
use crate::impute::impute;
use crate::model::LinearSequenceModel;
use crate::scaler::StandardScaler;

/// Loaded once, then borrowed by every prediction.
#[derive(Debug, Clone)]
pub struct PredictorContext<M = LinearSequenceModel> {
    timesteps: usize,
    solar_wind_features: Vec<String>,
    scaler: StandardScaler,
    model: M,
}

impl PredictorContext<LinearSequenceModel> {
    /// Build the linear reference predictor from its configuration.
    pub fn from_config(config: PredictorConfig) -> Result<Self> {
        config.validate()?;
        let model = LinearSequenceModel::new(
            config.timesteps,
            config.feature_width(),
            config.model.bias,
            config.model.weights,
        )?;
        Ok(Self {
            timesteps: config.timesteps,
            solar_wind_features: config.solar_wind_features,
            scaler: config.scaler,
            model,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let context = Self::from_config(PredictorConfig::from_json_file(path)?)?;
        info!(
            "loaded predictor from {} ({} timesteps, {} features)",
            path.display(),
            context.timesteps,
            context.solar_wind_features.len()
        );
        Ok(context)
    }
}

impl<M: SequenceModel> PredictorContext<M> {
    /// Pair any sequence model with a feature pipeline.
    pub fn with_model(
        timesteps: usize,
        solar_wind_features: Vec<String>,
        scaler: StandardScaler,
        model: M,
    ) -> Result<Self> {
        let width = 2 * solar_wind_features.len() + 1;
        if model.input_shape() != (timesteps, width) {
            return Err(PredictorError::ShapeMismatch {
                expected: model.input_shape(),
                actual: (timesteps, width),
            });
        }
        if scaler.width() != width {
            return Err(PredictorError::Config(format!(
                "scaler covers {} columns, features produce {width}",
                scaler.width()
            )));
        }
        Ok(Self {
            timesteps,
            solar_wind_features,
            scaler,
            model,
        })
    }

    pub fn timesteps(&self) -> usize {
        self.timesteps
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Hourly, scaled and imputed model input for one window.
    pub fn features(&self, window: &FeatureWindow<'_>) -> Result<HourlyFeatures> {
        let mut hourly = aggregate_hourly(&window.solar_wind, &self.solar_wind_features)?;
        hourly.push_constant(SUNSPOT_FEATURE, window.latest_sunspot);
        self.scaler.transform(&mut hourly.rows)?;
        impute(&mut hourly);

        if hourly.len() < self.timesteps {
            return Err(PredictorError::InsufficientHistory {
                required: self.timesteps,
                actual: hourly.len(),
            });
        }
        hourly.keep_last(self.timesteps);
        Ok(hourly)
    }

    /// Forecast `[t0, t0 + 1h]`; values are not range checked.
    pub fn forecast(&self, window: &FeatureWindow<'_>) -> Result<[f64; 2]> {
        let features = self.features(window)?;
        let out = self.model.forward(&features.rows)?;
        debug!("{} {}: forecast {:?}", window.period, window.t0, out);
        Ok(out)
    }
}

impl<M: SequenceModel> Predictor for PredictorContext<M> {
    fn name(&self) -> &str {
        "linear-sequence"
    }

    fn predict(&self, window: &FeatureWindow<'_>) -> PredictResult<(f64, f64)> {
        let [t0, t1] = self.forecast(window)?;
        Ok((t0, t1))
    }
}
