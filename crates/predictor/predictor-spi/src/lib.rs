//! Predictor Service Provider Interface
//!
//! Defines the contract for sequence models that map an hourly feature
//! matrix to the two Dst forecasts, and the errors of the reference
//! predictor pipeline.

mod error;

pub use error::{PredictorError, Result};

/// A model over a `(timesteps, features)` input matrix.
pub trait SequenceModel {
    /// Expected `(timesteps, features)` of the input.
    fn input_shape(&self) -> (usize, usize);

    /// Forecast `[t0, t0 + 1h]` from rows ordered oldest first.
    ///
    /// Missing cells propagate as NaN in the output.
    fn forward(&self, input: &[Vec<f64>]) -> Result<[f64; 2]>;

    /// Check `input` against [`input_shape`](Self::input_shape).
    fn check_shape(&self, input: &[Vec<f64>]) -> Result<()> {
        let (timesteps, features) = self.input_shape();
        if input.len() != timesteps {
            return Err(PredictorError::ShapeMismatch {
                expected: (timesteps, features),
                actual: (input.len(), input.first().map_or(0, Vec::len)),
            });
        }
        if let Some(row) = input.iter().find(|row| row.len() != features) {
            return Err(PredictorError::ShapeMismatch {
                expected: (timesteps, features),
                actual: (input.len(), row.len()),
            });
        }
        Ok(())
    }
}

impl<M: SequenceModel + ?Sized> SequenceModel for Box<M> {
    fn input_shape(&self) -> (usize, usize) {
        (**self).input_shape()
    }

    fn forward(&self, input: &[Vec<f64>]) -> Result<[f64; 2]> {
        (**self).forward(input)
    }
}
