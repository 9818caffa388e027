//! Logger initialization built on tracing-subscriber.
//!
//! Console logging with a configurable level and output format. The level can
//! always be overridden at runtime through the standard `RUST_LOG` variable.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerSettings;

/// Output format for console logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// Single-line human-readable output
    Compact,
    /// Newline-delimited JSON for log collectors
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "full" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format '{}'. Valid formats are: pretty, compact, json",
                s
            )),
        }
    }
}

/// Initializes the global tracing subscriber from logger settings.
///
/// `RUST_LOG` takes precedence over the configured level when set, so a
/// deployment can raise verbosity without editing configuration files.
///
/// # Errors
///
/// Returns an error if the format string is unknown or a global subscriber
/// has already been installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let format = settings
        .format
        .parse::<LogFormat>()
        .map_err(anyhow::Error::msg)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.ansi);

    match format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
