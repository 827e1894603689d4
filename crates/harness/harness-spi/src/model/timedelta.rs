//! Duration since the start of a period.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Elapsed time since period start, millisecond precision.
///
/// Parses and prints the pandas `Timedelta` text form used by the input
/// files, e.g. `"7 days 00:00:00"` or `"-1 days +23:00:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timedelta(i64);

impl Timedelta {
    pub const ZERO: Timedelta = Timedelta(0);

    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub const fn from_seconds(s: i64) -> Self {
        Self(s * MS_PER_SECOND)
    }

    pub const fn from_minutes(m: i64) -> Self {
        Self(m * MS_PER_MINUTE)
    }

    pub const fn from_hours(h: i64) -> Self {
        Self(h * MS_PER_HOUR)
    }

    pub const fn from_days(d: i64) -> Self {
        Self(d * MS_PER_DAY)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Round down to the start of the hour containing this instant.
    pub const fn floor_hour(&self) -> Self {
        Self(self.0.div_euclid(MS_PER_HOUR) * MS_PER_HOUR)
    }
}

impl Add for Timedelta {
    type Output = Timedelta;

    fn add(self, rhs: Timedelta) -> Timedelta {
        Timedelta(self.0 + rhs.0)
    }
}

impl Sub for Timedelta {
    type Output = Timedelta;

    fn sub(self, rhs: Timedelta) -> Timedelta {
        Timedelta(self.0 - rhs.0)
    }
}

impl fmt::Display for Timedelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.0.div_euclid(MS_PER_DAY);
        let rest = self.0.rem_euclid(MS_PER_DAY);
        let hours = rest / MS_PER_HOUR;
        let minutes = (rest % MS_PER_HOUR) / MS_PER_MINUTE;
        let seconds = (rest % MS_PER_MINUTE) / MS_PER_SECOND;
        let millis = rest % MS_PER_SECOND;

        // pandas writes a leading '+' on the clock part of negative deltas
        let sign = if days < 0 { "+" } else { "" };
        write!(f, "{days} days {sign}{hours:02}:{minutes:02}:{seconds:02}")?;
        if millis != 0 {
            write!(f, ".{:06}", millis * 1_000)?;
        }
        Ok(())
    }
}

/// Error returned when a timedelta string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimedeltaError(String);

impl fmt::Display for ParseTimedeltaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid timedelta '{}'", self.0)
    }
}

impl std::error::Error for ParseTimedeltaError {}

impl FromStr for Timedelta {
    type Err = ParseTimedeltaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimedeltaError(s.to_string());
        let text = s.trim();
        if text.is_empty() {
            return Err(err());
        }

        let mut total = 0i64;
        let mut clock = text;

        if let Some(idx) = text.find("day") {
            let days: i64 = text[..idx].trim().parse().map_err(|_| err())?;
            total = days.checked_mul(MS_PER_DAY).ok_or_else(err)?;
            clock = text[idx..]
                .trim_start_matches("days")
                .trim_start_matches("day")
                .trim_start_matches(',')
                .trim();
            if clock.is_empty() {
                return Ok(Timedelta(total));
            }
        }

        let (negative, clock) = match clock.as_bytes()[0] {
            b'-' => (true, &clock[1..]),
            b'+' => (false, &clock[1..]),
            _ => (false, clock),
        };

        let mut parts = clock.split(':');
        let (Some(h), Some(m), Some(sec), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        let hours: i64 = h.parse().map_err(|_| err())?;
        let minutes: i64 = m.parse().map_err(|_| err())?;
        let (whole, frac) = sec.split_once('.').unwrap_or((sec, ""));
        let seconds: i64 = whole.parse().map_err(|_| err())?;
        if !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(err());
        }
        // Only millisecond precision is kept
        let millis = frac
            .chars()
            .chain(std::iter::repeat('0'))
            .take(3)
            .collect::<String>()
            .parse::<i64>()
            .map_err(|_| err())?;

        let clock_ms = [
            (hours, MS_PER_HOUR),
            (minutes, MS_PER_MINUTE),
            (seconds, MS_PER_SECOND),
            (millis, 1),
        ]
        .iter()
        .try_fold(0i64, |acc, &(value, unit)| {
            value.checked_mul(unit).and_then(|ms| acc.checked_add(ms))
        })
        .ok_or_else(err)?;
        let clock_ms = if negative { -clock_ms } else { clock_ms };
        total = total.checked_add(clock_ms).ok_or_else(err)?;
        Ok(Timedelta(total))
    }
}

impl Serialize for Timedelta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timedelta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
