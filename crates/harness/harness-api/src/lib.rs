//! Harness configuration types
//!
//! - [`RunConfig`]: what to evaluate and how strictly
//! - [`InputLayout`]: file names of the four inputs inside the data directory
//! - [`ValidationPolicy`]: how invalid predictor output is repaired

mod config;
mod layout;
mod policy;

// Re-export SPI types used in the configuration surface
pub use harness_spi::{HarnessError, Result};

pub use config::{RunConfig, RunConfigBuilder, DEFAULT_TIME_BUDGET_SECS};
pub use layout::{InputLayout, InputPaths};
pub use policy::ValidationPolicy;
