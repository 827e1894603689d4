//! Periods and evaluation points.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Timedelta;

/// Identifier of an independent evaluation episode with its own zeroed timeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(String);

impl Period {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Period {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Period {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `(period, t0)` pair at which forecasts for `t0` and `t0 + 1h` are required.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvaluationPoint {
    pub period: Period,
    pub timedelta: Timedelta,
}

impl EvaluationPoint {
    pub fn new(period: impl Into<Period>, timedelta: Timedelta) -> Self {
        Self {
            period: period.into(),
            timedelta,
        }
    }
}

impl fmt::Display for EvaluationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.period, self.timedelta)
    }
}
