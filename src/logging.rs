//! Installs the `tracing` subscriber used by the binary.

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BenchError, Result};

/// Filter applied when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs a formatted subscriber writing to stderr.
///
/// An explicit `level` wins over `RUST_LOG`; stdout is left to the report.
pub fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| BenchError::Logging(format!("invalid log level: {e}")))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|_| BenchError::Logging("logging already initialized".into()))
}
