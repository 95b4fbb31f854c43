use crate::shared::Result;
use anyhow::Context;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Where and how verbosely the diagnostic log is written
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Append to this file; stderr when None
    pub log_file: Option<PathBuf>,
    /// Used when `RUST_LOG` is not set
    pub level: Level,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            log_file: None,
            level: Level::INFO,
        }
    }
}

/// Parses a level name (`trace`, `debug`, `info`, `warn`, `error`).
///
/// # Errors
/// Returns an error for any other value
pub fn parse_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => anyhow::bail!(
            "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
            other
        ),
    }
}

/// Installs the global `tracing` subscriber.
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Errors
/// Returns an error if the log file cannot be opened for appending
pub fn init_logging(options: &LoggingOptions) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.level.as_str().to_lowercase()));

    let layer = match &options.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_filter(env_filter)
                .boxed()
        }
        None => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter)
            .boxed(),
    };

    if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
    Ok(())
}
