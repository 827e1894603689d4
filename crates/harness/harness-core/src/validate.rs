//! Repair of predictor output before it enters the submission table.

use harness_api::ValidationPolicy;

/// Outcome of validating one forecast value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validated {
    /// Finite and inside the accepted range
    Valid(f64),
    /// Non-finite, replaced by the sentinel
    Sentinel(f64),
    /// Finite but out of range, clamped to the nearest bound
    Clamped(f64),
}

impl Validated {
    pub fn value(self) -> f64 {
        match self {
            Validated::Valid(v) | Validated::Sentinel(v) | Validated::Clamped(v) => v,
        }
    }
}

/// Apply `policy` to a single value.
pub fn validate_value(policy: &ValidationPolicy, value: f64) -> Validated {
    if !value.is_finite() {
        Validated::Sentinel(policy.sentinel)
    } else if value < policy.min || value > policy.max {
        Validated::Clamped(value.clamp(policy.min, policy.max))
    } else {
        Validated::Valid(value)
    }
}
