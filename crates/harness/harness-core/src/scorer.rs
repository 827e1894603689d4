//! RMSE of a submission against ground truth.

use harness_spi::{GroundTruthTable, HarnessError, Result, SubmissionTable};
use tracing::warn;

/// Root mean squared error over every `(point, horizon)` cell.
///
/// Both tables must share the same index in the same order. Cells whose
/// ground truth is missing are left out of the mean.
pub fn score(predictions: &SubmissionTable, ground_truth: &GroundTruthTable) -> Result<f64> {
    if predictions.len() != ground_truth.len() {
        return Err(HarnessError::IndexMismatch(format!(
            "submission has {} rows, ground truth has {}",
            predictions.len(),
            ground_truth.len()
        )));
    }

    let mut actual = Vec::with_capacity(2 * ground_truth.len());
    let mut predicted = Vec::with_capacity(2 * ground_truth.len());
    let mut skipped = 0usize;

    for (record, truth) in predictions.iter().zip(ground_truth.rows()) {
        if record.point != truth.point {
            return Err(HarnessError::IndexMismatch(format!(
                "submission row {} does not match ground truth row {}",
                record.point, truth.point
            )));
        }
        for (value, expected) in [(record.t0, truth.t0), (record.t1, truth.t1)] {
            match expected {
                Some(expected) => {
                    actual.push(expected);
                    predicted.push(value);
                }
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        warn!("{} ground-truth cells are missing and were not scored", skipped);
    }
    if actual.is_empty() {
        return Err(HarnessError::NoScorableCells);
    }
    Ok(metrics::rmse(&actual, &predicted))
}

pub mod metrics {
    //! Forecast accuracy metrics

    /// Mean Squared Error
    pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
        if actual.len() != predicted.len() || actual.is_empty() {
            return f64::NAN;
        }
        let sum: f64 = actual
            .iter()
            .zip(predicted.iter())
            .map(|(a, p)| (a - p).powi(2))
            .sum();
        sum / actual.len() as f64
    }

    /// Root Mean Squared Error
    pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
        mse(actual, predicted).sqrt()
    }
}
