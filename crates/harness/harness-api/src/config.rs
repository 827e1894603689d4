//! Run configuration types.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use harness_spi::{HarnessError, Result};
use serde::{Deserialize, Serialize};

use crate::layout::{InputLayout, InputPaths};
use crate::policy::ValidationPolicy;

/// Default wall-clock ceiling for a single predictor call.
pub const DEFAULT_TIME_BUDGET_SECS: f64 = 30.0;

/// Configuration for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directory holding the four input files
    pub data_dir: PathBuf,
    /// Where to write predictions; `None` skips writing
    pub output: Option<PathBuf>,
    /// Compute and log the RMSE against ground truth
    pub print_score: bool,
    /// Per-call predictor budget in seconds
    pub time_budget_secs: f64,
    /// Repair rules for predictor output
    pub validation: ValidationPolicy,
    /// Input file names
    pub inputs: InputLayout,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output: Some(PathBuf::from("submission.csv")),
            print_score: false,
            time_budget_secs: DEFAULT_TIME_BUDGET_SECS,
            validation: ValidationPolicy::default(),
            inputs: InputLayout::default(),
        }
    }
}

impl RunConfig {
    /// Create a configuration reading from `data_dir` with defaults elsewhere.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file; absent keys take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| HarnessError::io(path, e))?;
        let config: RunConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| HarnessError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Per-call budget as a [`Duration`]; zero when the configured value is invalid.
    pub fn time_budget(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_budget_secs).unwrap_or_default()
    }

    /// Paths of the four inputs.
    pub fn input_paths(&self) -> InputPaths {
        self.inputs.resolve(&self.data_dir)
    }

    /// Reject values the runner cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !self.time_budget_secs.is_finite() || self.time_budget_secs <= 0.0 {
            return Err(HarnessError::Config(format!(
                "time budget must be a positive number of seconds, got {}",
                self.time_budget_secs
            )));
        }
        if !self.validation.is_consistent() {
            return Err(HarnessError::Config(format!(
                "validation policy needs finite min <= sentinel <= max, got {:?}",
                self.validation
            )));
        }
        Ok(())
    }
}

/// Builder for RunConfig.
#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    data_dir: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    print_score: Option<bool>,
    time_budget_secs: Option<f64>,
    validation: Option<ValidationPolicy>,
    inputs: Option<InputLayout>,
}

impl RunConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: RunConfig) -> Self {
        Self {
            data_dir: Some(config.data_dir),
            output: Some(config.output),
            print_score: Some(config.print_score),
            time_budget_secs: Some(config.time_budget_secs),
            validation: Some(config.validation),
            inputs: Some(config.inputs),
        }
    }

    /// Set the data directory.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the output file.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(Some(path.into()));
        self
    }

    /// Do not write predictions.
    pub fn no_output(mut self) -> Self {
        self.output = Some(None);
        self
    }

    /// Enable or disable scoring.
    pub fn print_score(mut self, enabled: bool) -> Self {
        self.print_score = Some(enabled);
        self
    }

    /// Set the per-call time budget in seconds.
    pub fn time_budget_secs(mut self, secs: f64) -> Self {
        self.time_budget_secs = Some(secs);
        self
    }

    /// Set the per-call time budget.
    pub fn time_budget(self, budget: Duration) -> Self {
        self.time_budget_secs(budget.as_secs_f64())
    }

    /// Set the validation policy.
    pub fn validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = Some(policy);
        self
    }

    /// Set the input file names.
    pub fn inputs(mut self, layout: InputLayout) -> Self {
        self.inputs = Some(layout);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<RunConfig> {
        let defaults = RunConfig::default();
        let config = RunConfig {
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
            output: self.output.unwrap_or(defaults.output),
            print_score: self.print_score.unwrap_or(defaults.print_score),
            time_budget_secs: self.time_budget_secs.unwrap_or(defaults.time_budget_secs),
            validation: self.validation.unwrap_or(defaults.validation),
            inputs: self.inputs.unwrap_or(defaults.inputs),
        };
        config.validate()?;
        Ok(config)
    }
}
