//! Replay-and-score harness for Dst forecasts
//!
//! Replays historical solar-wind, satellite-position and sunspot data hour by
//! hour, hands a predictor only what was observable at each decision time,
//! enforces a per-call time budget and scores the results against the Dst
//! labels.

pub use harness_facade::*;
