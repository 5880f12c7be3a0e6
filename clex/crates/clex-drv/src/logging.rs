//! Tracing subscriber setup.
//!
//! Logs go to stderr so the report on stdout stays machine-readable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{ClexError, Result};

/// Default filter without `--verbose`.
const DEFAULT_FILTER: &str = "warn";

/// Filter with `--verbose`.
const VERBOSE_FILTER: &str = "debug";

/// Builds the filter: `RUST_LOG` wins when set, otherwise the verbosity
/// default.
pub fn build_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber. Call once, from the binary.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(subscriber)
        .try_init()
        .map_err(|e| ClexError::Logging(e.to_string()))?;

    Ok(())
}
