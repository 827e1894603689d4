//! Borrowed lookback windows handed to the predictor.

use super::{Period, Timedelta};

/// A contiguous slice of one period of a [`TimeSeries`](super::TimeSeries).
#[derive(Debug, Clone, Copy)]
pub struct SeriesWindow<'a> {
    columns: &'a [String],
    timestamps: &'a [Timedelta],
    rows: &'a [Vec<f64>],
}

impl<'a> SeriesWindow<'a> {
    pub fn new(columns: &'a [String], timestamps: &'a [Timedelta], rows: &'a [Vec<f64>]) -> Self {
        debug_assert_eq!(timestamps.len(), rows.len());
        Self {
            columns,
            timestamps,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn columns(&self) -> &'a [String] {
        self.columns
    }

    pub fn timestamps(&self) -> &'a [Timedelta] {
        self.timestamps
    }

    pub fn rows(&self) -> &'a [Vec<f64>] {
        self.rows
    }

    pub fn first_timestamp(&self) -> Option<Timedelta> {
        self.timestamps.first().copied()
    }

    pub fn last_timestamp(&self) -> Option<Timedelta> {
        self.timestamps.last().copied()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Values of one column in timestamp order.
    pub fn column(&self, column: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(column)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }
}

/// Everything a forecaster may see at decision time `t0` for one period.
#[derive(Debug, Clone, Copy)]
pub struct FeatureWindow<'a> {
    pub period: &'a Period,
    pub t0: Timedelta,
    /// Solar wind in `[t0 - 7 days, t0 - 1 minute]`
    pub solar_wind: SeriesWindow<'a>,
    /// Last seven satellite positions at or before `t0`
    pub satellite_positions: SeriesWindow<'a>,
    /// Latest smoothed sunspot number at or before `t0`
    pub latest_sunspot: f64,
}
