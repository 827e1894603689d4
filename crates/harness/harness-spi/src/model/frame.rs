//! Ordered set of evaluation points.

use super::{EvaluationPoint, Period};

/// Evaluation points grouped by period, ascending in time within each period.
///
/// Downstream iteration relies on this order: windows only ever move forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFrame {
    points: Vec<EvaluationPoint>,
}

impl SubmissionFrame {
    /// Wrap points that are already grouped by period and sorted within each group.
    pub fn new(points: Vec<EvaluationPoint>) -> Self {
        debug_assert!(points
            .windows(2)
            .all(|w| w[0].period != w[1].period || w[0].timedelta < w[1].timedelta));
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[EvaluationPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvaluationPoint> {
        self.points.iter()
    }

    /// Contiguous runs of points sharing a period, in frame order.
    pub fn by_period(&self) -> Vec<(&Period, &[EvaluationPoint])> {
        let mut groups = Vec::new();
        let mut start = 0;
        for idx in 1..=self.points.len() {
            if idx == self.points.len() || self.points[idx].period != self.points[start].period {
                groups.push((&self.points[start].period, &self.points[start..idx]));
                start = idx;
            }
        }
        groups
    }
}
