//! Sequential replay of the submission frame through a predictor.

use std::time::{Duration, Instant};

use harness_api::{RunConfig, ValidationPolicy};
use harness_spi::{
    HarnessError, PredictionRecord, Predictor, Result, SubmissionFrame, SubmissionTable,
};
use tracing::{debug, info, warn};

use crate::validate::{validate_value, Validated};
use crate::window::WindowExtractor;

/// Timing and repair statistics of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub points: usize,
    pub total_predict_time: Duration,
    pub slowest_call: Duration,
    pub sentinel_substitutions: usize,
    pub clamped_values: usize,
}

impl RunSummary {
    fn record_timing(&mut self, elapsed: Duration) {
        self.points += 1;
        self.total_predict_time += elapsed;
        self.slowest_call = self.slowest_call.max(elapsed);
    }

    fn record_validation(&mut self, validated: Validated) -> f64 {
        match validated {
            Validated::Sentinel(_) => self.sentinel_substitutions += 1,
            Validated::Clamped(_) => self.clamped_values += 1,
            Validated::Valid(_) => {}
        }
        validated.value()
    }

    /// Mean wall-clock time per predictor call.
    pub fn mean_call(&self) -> Duration {
        match u32::try_from(self.points) {
            Ok(n) if n > 0 => self.total_predict_time / n,
            _ => Duration::ZERO,
        }
    }
}

/// Feeds windows to a predictor one point at a time, in frame order.
///
/// A call slower than the budget aborts the whole run. Calls cannot be
/// interrupted, so the budget is checked once the call has returned.
#[derive(Debug, Clone)]
pub struct PredictionRunner {
    budget: Duration,
    policy: ValidationPolicy,
}

impl PredictionRunner {
    pub fn new(budget: Duration, policy: ValidationPolicy) -> Self {
        Self { budget, policy }
    }

    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.time_budget(), config.validation)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Predict every frame point and collect the validated records.
    pub fn run<P>(
        &self,
        frame: &SubmissionFrame,
        extractor: &WindowExtractor<'_>,
        predictor: &P,
    ) -> Result<(SubmissionTable, RunSummary)>
    where
        P: Predictor + ?Sized,
    {
        let mut submission = SubmissionTable::with_capacity(frame.len());
        let mut summary = RunSummary::default();

        for (period, points) in frame.by_period() {
            info!(
                "making predictions for period {} ({} points) with {}",
                period,
                points.len(),
                predictor.name()
            );

            for point in points {
                let window = extractor.extract(point)?;

                let start = Instant::now();
                let result = predictor.predict(&window);
                let elapsed = start.elapsed();

                if elapsed > self.budget {
                    return Err(HarnessError::BudgetExceeded {
                        period: period.clone(),
                        timestamp: point.timedelta,
                        elapsed,
                        budget: self.budget,
                    });
                }
                if elapsed > self.budget / 2 {
                    warn!(
                        "slow prediction at {}: {:.2?} of {:.2?} budget",
                        point, elapsed, self.budget
                    );
                }
                summary.record_timing(elapsed);

                let (t0, t1) = result.map_err(|e| HarnessError::PredictorFailed {
                    period: period.clone(),
                    timestamp: point.timedelta,
                    reason: e.to_string(),
                })?;

                let v0 = validate_value(&self.policy, t0);
                let v1 = validate_value(&self.policy, t1);
                if v0 != Validated::Valid(t0) || v1 != Validated::Valid(t1) {
                    debug!("repaired prediction at {}: ({}, {}) -> ({:?}, {:?})", point, t0, t1, v0, v1);
                }
                let record = PredictionRecord::new(
                    point.clone(),
                    summary.record_validation(v0),
                    summary.record_validation(v1),
                );
                submission.insert(record);
            }
        }

        if summary.sentinel_substitutions > 0 || summary.clamped_values > 0 {
            warn!(
                "replaced {} non-finite values with {} and clamped {} out-of-range values",
                summary.sentinel_substitutions, self.policy.sentinel, summary.clamped_values
            );
        }
        info!(
            "predicted {} points, mean call {:.2?}, slowest {:.2?}",
            summary.points,
            summary.mean_call(),
            summary.slowest_call
        );

        Ok((submission, summary))
    }
}
