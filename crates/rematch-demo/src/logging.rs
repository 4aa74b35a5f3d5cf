//! Logging setup for the demo binary.
//!
//! Events go to stderr so that results on stdout stay clean. A filter that
//! does not parse is reported and replaced with the default.

use rust_rematch::config::DEFAULT_LOG_LEVEL;
use rust_rematch::{LogFormat, LoggingConfig, RematchError, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the event filter from a directive string such as `info` or
/// `rust_rematch=trace,warn`.
pub fn filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| RematchError::config(format!("invalid log filter {level:?}: {e}")))
}

/// Build the filter for `level`, falling back to the default directive.
///
/// The rejection, if any, is returned alongside the fallback filter.
pub fn filter_or_default(level: &str) -> (EnvFilter, Option<RematchError>) {
    match filter(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(err)),
    }
}

/// Install the global subscriber.
///
/// An invalid filter is reported on stderr and replaced with the default.
/// Fails only if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let (filter, rejected) = filter_or_default(&config.level);
    if let Some(err) = rejected {
        eprintln!("warning: {err}; using {DEFAULT_LOG_LEVEL:?}");
    }
    let registry = tracing_subscriber::registry().with(filter);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let installed = match config.format {
        LogFormat::Full => registry.with(fmt_layer).try_init(),
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    };

    installed.map_err(|e| RematchError::config(format!("failed to install subscriber: {e}")))
}
