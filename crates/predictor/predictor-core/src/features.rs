//! Hourly aggregation of minute-level solar wind.

use harness_spi::{SeriesWindow, Timedelta};
use predictor_spi::{PredictorError, Result};

/// Name of the sunspot feature column.
pub const SUNSPOT_FEATURE: &str = "smoothed_ssn";

/// Hourly feature table, one row per hour that has at least one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyFeatures {
    pub columns: Vec<String>,
    pub hours: Vec<Timedelta>,
    pub rows: Vec<Vec<f64>>,
}

impl HourlyFeatures {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Values of column `idx` in hour order.
    pub fn column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[idx]).collect()
    }

    /// Overwrite column `idx` with `values`.
    pub fn set_column(&mut self, idx: usize, values: &[f64]) {
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[idx] = *value;
        }
    }

    /// Append a column holding the same value in every row.
    pub fn push_constant(&mut self, name: &str, value: f64) {
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(value);
        }
    }

    /// Drop all but the last `n` rows.
    pub fn keep_last(&mut self, n: usize) {
        let skip = self.len().saturating_sub(n);
        self.hours.drain(..skip);
        self.rows.drain(..skip);
    }
}

/// Aggregate `features` to the floor of each hour.
///
/// Columns are every `{feature}_mean` followed by every `{feature}_std`.
/// NaN samples are skipped; the standard deviation is the sample one and is
/// NaN for hours with fewer than two values.
pub fn aggregate_hourly(window: &SeriesWindow<'_>, features: &[String]) -> Result<HourlyFeatures> {
    let indices = features
        .iter()
        .map(|f| {
            window
                .column_index(f)
                .ok_or_else(|| PredictorError::MissingColumn(f.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut columns: Vec<String> = features.iter().map(|f| format!("{f}_mean")).collect();
    columns.extend(features.iter().map(|f| format!("{f}_std")));

    let mut hours = Vec::new();
    let mut rows = Vec::new();
    let timestamps = window.timestamps();
    let samples = window.rows();

    let mut start = 0;
    while start < timestamps.len() {
        let hour = timestamps[start].floor_hour();
        let end = start
            + timestamps[start..]
                .iter()
                .take_while(|t| t.floor_hour() == hour)
                .count();

        let mut means = Vec::with_capacity(indices.len());
        let mut stds = Vec::with_capacity(indices.len());
        for &idx in &indices {
            let values: Vec<f64> = samples[start..end]
                .iter()
                .map(|row| row[idx])
                .filter(|v| !v.is_nan())
                .collect();
            let (mean, std) = mean_std(&values);
            means.push(mean);
            stds.push(std);
        }
        means.extend(stds);

        hours.push(hour);
        rows.push(means);
        start = end;
    }

    Ok(HourlyFeatures {
        columns,
        hours,
        rows,
    })
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (f64::NAN, f64::NAN);
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    if n < 2 {
        return (mean, f64::NAN);
    }
    let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, var.sqrt())
}
