//! Per-column standard scaling

use predictor_spi::{PredictorError, Result};
use serde::{Deserialize, Serialize};

/// Subtracts a stored mean and divides by a stored scale, column by column.
///
/// A zero scale is treated as one, so constant training columns pass
/// through centred but unscaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Number of columns the scaler expects.
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != self.scale.len() {
            return Err(PredictorError::Config(format!(
                "scaler has {} means but {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(PredictorError::Config(
                "scaler parameters must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Scale `rows` in place. NaN cells stay NaN.
    pub fn transform(&self, rows: &mut [Vec<f64>]) -> Result<()> {
        self.check_width(rows)?;
        for row in rows.iter_mut() {
            for (x, (mean, scale)) in row.iter_mut().zip(self.params()) {
                *x = (*x - mean) / scale;
            }
        }
        Ok(())
    }

    fn params(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mean
            .iter()
            .zip(&self.scale)
            .map(|(&m, &s)| (m, if s == 0.0 { 1.0 } else { s }))
    }

    fn check_width(&self, rows: &[Vec<f64>]) -> Result<()> {
        match rows.iter().find(|row| row.len() != self.width()) {
            Some(row) => Err(PredictorError::ShapeMismatch {
                expected: (rows.len(), self.width()),
                actual: (rows.len(), row.len()),
            }),
            None => Ok(()),
        }
    }
}
