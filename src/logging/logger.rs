// file: src/logging/logger.rs
// version: 1.0.0
// guid: f4628109-0651-4ea7-9b10-d4bba0456802

//! Logger initialization and configuration
//!
//! Logs go to stderr. Stdout is reserved for the banner and the compiler.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{BuildError, Result};

/// Level used when neither a flag nor `RUST_LOG` picks one
pub const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter for the given flags. `quiet` wins over `verbose`.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| BuildError::logging(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside a named span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}
