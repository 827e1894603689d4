//! Irregularly sampled series keyed by `(period, timedelta)`.

use std::collections::HashMap;

use crate::error::{HarnessError, Result};

use super::{Period, SeriesWindow, Timedelta};

/// Samples of one period, sorted ascending by timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodSeries {
    timestamps: Vec<Timedelta>,
    rows: Vec<Vec<f64>>,
}

impl PeriodSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[Timedelta] {
        &self.timestamps
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Largest timestamp of the period, `None` when empty.
    pub fn max_timestamp(&self) -> Option<Timedelta> {
        self.timestamps.last().copied()
    }

    /// Number of samples strictly before `t`; the index of the first sample at or after `t`.
    pub fn count_before(&self, t: Timedelta) -> usize {
        self.timestamps.partition_point(|ts| *ts < t)
    }

    /// Number of samples at or before `t`.
    pub fn count_at_or_before(&self, t: Timedelta) -> usize {
        self.timestamps.partition_point(|ts| *ts <= t)
    }

    /// First row recorded at exactly `t`, if any.
    pub fn row_at(&self, t: Timedelta) -> Option<&[f64]> {
        let idx = self.count_before(t);
        match self.timestamps.get(idx) {
            Some(ts) if *ts == t => Some(self.rows[idx].as_slice()),
            _ => None,
        }
    }

    /// Borrow rows `start..end` as a window.
    pub fn slice<'a>(&'a self, columns: &'a [String], start: usize, end: usize) -> SeriesWindow<'a> {
        let end = end.min(self.len());
        let start = start.min(end);
        SeriesWindow::new(columns, &self.timestamps[start..end], &self.rows[start..end])
    }
}

/// A named table of numeric columns grouped by period.
///
/// Periods keep the order in which they first appear in the source; rows are
/// stably sorted by timestamp inside each period. Sampling is preserved as
/// loaded, nothing is resampled.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    name: String,
    columns: Vec<String>,
    periods: Vec<(Period, PeriodSeries)>,
    index: HashMap<Period, usize>,
}

impl TimeSeries {
    /// Build a series from unordered rows.
    ///
    /// Fails with [`HarnessError::MalformedInput`] when a row does not have
    /// one value per column.
    pub fn from_rows<I>(name: impl Into<String>, columns: Vec<String>, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Period, Timedelta, Vec<f64>)>,
    {
        let name = name.into();
        let mut periods: Vec<(Period, Vec<(Timedelta, Vec<f64>)>)> = Vec::new();
        let mut index: HashMap<Period, usize> = HashMap::new();

        for (period, timedelta, values) in rows {
            if values.len() != columns.len() {
                return Err(HarnessError::malformed(
                    &name,
                    format!(
                        "row at ({period}, {timedelta}) has {} values, expected {}",
                        values.len(),
                        columns.len()
                    ),
                ));
            }
            let slot = match index.get(&period) {
                Some(&slot) => slot,
                None => {
                    index.insert(period.clone(), periods.len());
                    periods.push((period, Vec::new()));
                    periods.len() - 1
                }
            };
            periods[slot].1.push((timedelta, values));
        }

        let periods = periods
            .into_iter()
            .map(|(period, mut samples)| {
                samples.sort_by_key(|(ts, _)| *ts);
                let (timestamps, rows) = samples.into_iter().unzip();
                (period, PeriodSeries { timestamps, rows })
            })
            .collect();

        Ok(Self {
            name,
            columns,
            periods,
            index,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Periods in order of first appearance.
    pub fn periods(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter().map(|(p, _)| p)
    }

    pub fn period(&self, period: &Period) -> Option<&PeriodSeries> {
        self.index.get(period).map(|&slot| &self.periods[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Period, &PeriodSeries)> {
        self.periods.iter().map(|(p, s)| (p, s))
    }

    /// Total number of rows across all periods.
    pub fn len(&self) -> usize {
        self.periods.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of `column` at exactly `(period, t)`.
    pub fn value_at(&self, period: &Period, t: Timedelta, column: usize) -> Option<f64> {
        self.period(period)?.row_at(t).and_then(|row| row.get(column).copied())
    }
}
