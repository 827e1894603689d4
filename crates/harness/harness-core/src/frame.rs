//! Submission frame and ground truth derived from the Dst labels.

use harness_spi::{
    EvaluationPoint, GroundTruthRow, GroundTruthTable, HarnessError, Result, SubmissionFrame,
    Timedelta, TimeSeries,
};

use crate::store::DST_COLUMN;

/// History every evaluation point must have behind it.
pub const LOOKBACK: Timedelta = Timedelta::from_days(7);
/// Distance between the two forecast horizons.
pub const HORIZON: Timedelta = Timedelta::from_hours(1);

/// Derive the points to evaluate from the label series.
///
/// Keeps label timestamps at least [`LOOKBACK`] after period start and drops
/// the maximum timestamp of each period, which has no `t0 + 1h` label.
/// Points are grouped by period and ascending within each period.
///
/// Repeated label timestamps yield a single point, so every
/// `(period, timedelta)` key in the frame is unique.
pub fn build_submission_frame(labels: &TimeSeries) -> SubmissionFrame {
    let mut points = Vec::new();
    for (period, series) in labels.iter() {
        let Some(t_max) = series.max_timestamp() else {
            continue;
        };
        let start = series.count_before(LOOKBACK);
        let mut last = None;
        for &t in &series.timestamps()[start..] {
            if t == t_max || last == Some(t) {
                continue;
            }
            points.push(EvaluationPoint::new(period.clone(), t));
            last = Some(t);
        }
    }
    SubmissionFrame::new(points)
}

/// Look up the true `(t0, t0 + 1h)` labels for every frame point.
///
/// The returned table has exactly the frame's index. A label that is absent
/// or NaN is reported as `None`.
pub fn build_ground_truth(labels: &TimeSeries, frame: &SubmissionFrame) -> Result<GroundTruthTable> {
    let dst = labels.column_index(DST_COLUMN).ok_or_else(|| {
        HarnessError::malformed(labels.name(), format!("missing column '{DST_COLUMN}'"))
    })?;
    let lookup = |point: &EvaluationPoint, t: Timedelta| {
        labels
            .value_at(&point.period, t, dst)
            .filter(|v| !v.is_nan())
    };

    let rows = frame
        .iter()
        .map(|point| GroundTruthRow {
            point: point.clone(),
            t0: lookup(point, point.timedelta),
            t1: lookup(point, point.timedelta + HORIZON),
        })
        .collect();
    Ok(GroundTruthTable::new(rows))
}

/// Fail with [`HarnessError::IndexMismatch`] unless both tables share one index.
pub fn check_aligned(frame: &SubmissionFrame, truth: &GroundTruthTable) -> Result<()> {
    if frame.len() != truth.len() {
        return Err(HarnessError::IndexMismatch(format!(
            "submission frame has {} rows, ground truth has {}",
            frame.len(),
            truth.len()
        )));
    }
    if let Some((expected, found)) = frame.iter().zip(truth.index()).find(|(a, b)| a != b) {
        return Err(HarnessError::IndexMismatch(format!(
            "Ground truth index and submission format do not match: expected {expected}, found {found}"
        )));
    }
    Ok(())
}
