//! Reference predictor configuration

use std::fs;
use std::path::Path;

use predictor_spi::{PredictorError, Result};
use serde::{Deserialize, Serialize};

use crate::scaler::StandardScaler;

/// Default number of hourly rows fed to the model.
pub const DEFAULT_TIMESTEPS: usize = 32;

/// Solar-wind columns used when the configuration names none.
pub const DEFAULT_SOLAR_WIND_FEATURES: [&str; 7] = [
    "bt",
    "temperature",
    "bx_gse",
    "by_gse",
    "bz_gse",
    "speed",
    "density",
];

/// Trained parameters of the linear model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearWeights {
    pub bias: [f64; 2],
    pub weights: [Vec<f64>; 2],
}

/// Everything needed to rebuild a trained predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    #[serde(default = "default_timesteps")]
    pub timesteps: usize,
    #[serde(default = "default_features")]
    pub solar_wind_features: Vec<String>,
    pub scaler: StandardScaler,
    pub model: LinearWeights,
}

fn default_timesteps() -> usize {
    DEFAULT_TIMESTEPS
}

fn default_features() -> Vec<String> {
    DEFAULT_SOLAR_WIND_FEATURES.iter().map(|s| s.to_string()).collect()
}

impl PredictorConfig {
    /// Read and validate a JSON configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| PredictorError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| PredictorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Columns per hourly row: a mean and a std per feature plus sunspots.
    pub fn feature_width(&self) -> usize {
        2 * self.solar_wind_features.len() + 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.timesteps == 0 {
            return Err(PredictorError::Config("timesteps must be positive".to_string()));
        }
        if self.solar_wind_features.is_empty() {
            return Err(PredictorError::Config(
                "at least one solar wind feature is required".to_string(),
            ));
        }
        self.scaler.validate()?;
        if self.scaler.width() != self.feature_width() {
            return Err(PredictorError::Config(format!(
                "scaler covers {} columns, features produce {}",
                self.scaler.width(),
                self.feature_width()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json(timesteps: usize, features: &[&str]) -> String {
        let width = 2 * features.len() + 1;
        serde_json::json!({
            "timesteps": timesteps,
            "solar_wind_features": features,
            "scaler": { "mean": vec![0.0; width], "scale": vec![1.0; width] },
            "model": {
                "bias": [-10.0, -11.0],
                "weights": [vec![0.0; timesteps * width], vec![0.0; timesteps * width]]
            }
        })
        .to_string()
    }

    #[test]
    fn test_parse_config() {
        let config = PredictorConfig::from_json_str(&json(4, &["bt", "speed"])).unwrap();
        assert_eq!(config.timesteps, 4);
        assert_eq!(config.feature_width(), 5);
        assert_eq!(config.model.bias, [-10.0, -11.0]);
    }

    #[test]
    fn test_defaults_apply() {
        let width = 2 * DEFAULT_SOLAR_WIND_FEATURES.len() + 1;
        let text = serde_json::json!({
            "scaler": { "mean": vec![0.0; width], "scale": vec![1.0; width] },
            "model": { "bias": [0.0, 0.0], "weights": [[], []] }
        })
        .to_string();
        let config = PredictorConfig::from_json_str(&text).unwrap();
        assert_eq!(config.timesteps, DEFAULT_TIMESTEPS);
        assert_eq!(config.solar_wind_features.len(), 7);
        assert_eq!(config.solar_wind_features[0], "bt");
    }

    #[test]
    fn test_scaler_width_must_match_features() {
        let mut value: serde_json::Value = serde_json::from_str(&json(4, &["bt"])).unwrap();
        value["solar_wind_features"] = serde_json::json!(["bt", "speed"]);
        match PredictorConfig::from_json_str(&value.to_string()) {
            Err(PredictorError::Config(msg)) => assert!(msg.contains("scaler covers 3 columns")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_timesteps_rejected() {
        assert!(PredictorConfig::from_json_str(&json(0, &["bt"])).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json(2, &["bt"]).as_bytes()).unwrap();
        let config = PredictorConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.solar_wind_features, vec!["bt".to_string()]);
    }

    #[test]
    fn test_missing_file() {
        match PredictorConfig::from_json_file("/nonexistent/model.json") {
            Err(PredictorError::Io { path, .. }) => assert!(path.ends_with("model.json")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
