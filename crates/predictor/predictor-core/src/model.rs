//! Linear sequence model

use predictor_spi::{PredictorError, Result, SequenceModel};
use serde::{Deserialize, Serialize};

/// One bias and one weight per input cell for each horizon.
///
/// Weights are laid out row-major over the `(timesteps, features)` input,
/// oldest hour first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSequenceModel {
    timesteps: usize,
    features: usize,
    bias: [f64; 2],
    weights: [Vec<f64>; 2],
}

impl LinearSequenceModel {
    pub fn new(
        timesteps: usize,
        features: usize,
        bias: [f64; 2],
        weights: [Vec<f64>; 2],
    ) -> Result<Self> {
        let model = Self {
            timesteps,
            features,
            bias,
            weights,
        };
        model.validate()?;
        Ok(model)
    }

    /// Model predicting `bias` regardless of input.
    pub fn constant(timesteps: usize, features: usize, bias: [f64; 2]) -> Self {
        let cells = timesteps * features;
        Self {
            timesteps,
            features,
            bias,
            weights: [vec![0.0; cells], vec![0.0; cells]],
        }
    }

    pub fn validate(&self) -> Result<()> {
        let cells = self.timesteps * self.features;
        for (horizon, weights) in self.weights.iter().enumerate() {
            if weights.len() != cells {
                return Err(PredictorError::Config(format!(
                    "horizon {horizon} has {} weights, expected {cells} ({} x {})",
                    weights.len(),
                    self.timesteps,
                    self.features
                )));
            }
        }
        Ok(())
    }
}

impl SequenceModel for LinearSequenceModel {
    fn input_shape(&self) -> (usize, usize) {
        (self.timesteps, self.features)
    }

    fn forward(&self, input: &[Vec<f64>]) -> Result<[f64; 2]> {
        self.check_shape(input)?;
        let mut out = self.bias;
        for (o, weights) in out.iter_mut().zip(&self.weights) {
            *o += input
                .iter()
                .flatten()
                .zip(weights)
                .map(|(x, w)| x * w)
                .sum::<f64>();
        }
        Ok(out)
    }
}
