//! Logging setup for the `ledgerline` binary.
//!
//! Logs go to stderr. Stdout is reserved for the JSON reports the subcommands
//! print, so `ledgerline inspect tx.bin | jq` keeps working at any log level.

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Colored lines with source locations.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Resolves the event filter. A set `RUST_LOG` wins over `--log-level`; a
/// malformed `--log-level` is an error rather than a silent fallback.
pub fn event_filter(log_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(log_level).with_context(|| format!("invalid log filter {log_level:?}"))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(log_level: &str, format: LogFormat) -> Result<()> {
    let filter = event_filter(log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
    .context("tracing subscriber already installed")?;

    tracing::debug!(?format, "logging ready");
    Ok(())
}
