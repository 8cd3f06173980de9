//! Crate error type and `Result` alias.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors surfaced by data generation, reporting and process setup.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Generator bounds are inverted.
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },
    /// A statistic was requested over an empty sample list.
    #[error("no samples recorded for {0}")]
    EmptySamples(String),
    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
    /// A report could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
