//! Prediction and ground-truth tables indexed by evaluation point.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::EvaluationPoint;

/// Forecasts for `t0` and `t0 + 1h` at one evaluation point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub point: EvaluationPoint,
    pub t0: f64,
    pub t1: f64,
}

impl PredictionRecord {
    pub fn new(point: EvaluationPoint, t0: f64, t1: f64) -> Self {
        Self { point, t0, t1 }
    }
}

/// Predictions in submission-frame order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionTable {
    records: Vec<PredictionRecord>,
    lookup: HashMap<EvaluationPoint, usize>,
}

impl SubmissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite the record for `record.point`, keeping first-insert order.
    pub fn insert(&mut self, record: PredictionRecord) {
        match self.lookup.get(&record.point) {
            Some(&idx) => self.records[idx] = record,
            None => {
                self.lookup.insert(record.point.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, point: &EvaluationPoint) -> Option<&PredictionRecord> {
        self.lookup.get(point).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PredictionRecord> {
        self.records.iter()
    }

    pub fn index(&self) -> impl Iterator<Item = &EvaluationPoint> {
        self.records.iter().map(|r| &r.point)
    }
}

impl FromIterator<PredictionRecord> for SubmissionTable {
    fn from_iter<I: IntoIterator<Item = PredictionRecord>>(iter: I) -> Self {
        let mut table = SubmissionTable::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

/// True `(t0, t1)` label pairs; a missing label is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthRow {
    pub point: EvaluationPoint,
    pub t0: Option<f64>,
    pub t1: Option<f64>,
}

/// Ground truth in submission-frame order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundTruthTable {
    rows: Vec<GroundTruthRow>,
}

impl GroundTruthTable {
    pub fn new(rows: Vec<GroundTruthRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[GroundTruthRow] {
        &self.rows
    }

    pub fn index(&self) -> impl Iterator<Item = &EvaluationPoint> {
        self.rows.iter().map(|r| &r.point)
    }
}
