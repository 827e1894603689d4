//! Error module containing the harness error type and result alias

mod harness_error;

pub use harness_error::HarnessError;

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;
