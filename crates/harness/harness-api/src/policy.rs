//! Output validation policy.

use serde::{Deserialize, Serialize};

/// Replacement rules for predictor output.
///
/// Non-finite values become `sentinel`; finite values outside `[min, max]`
/// are clamped to the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub sentinel: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            sentinel: -12.0,
            min: -2000.0,
            max: 500.0,
        }
    }
}

impl ValidationPolicy {
    pub fn is_consistent(&self) -> bool {
        self.sentinel.is_finite()
            && self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && (self.min..=self.max).contains(&self.sentinel)
    }
}
