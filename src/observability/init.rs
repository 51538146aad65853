//! Tracing initialization and subscriber setup.

use crate::domain::error::{BookshelfError, Result};
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Events are formatted as plain text on stderr, which Zellij forwards to its
/// own log file. The filter comes from `config.trace_level` and falls back to
/// `"info"` when unset or unparsable.
///
/// Calling this more than once is harmless: only the first call installs a
/// subscriber.
///
/// # Example
///
/// ```rust
/// use bookshelf::observability::init_tracing;
/// use bookshelf::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let (filter, rejected) = match build_filter(config.trace_level.as_deref()) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_TRACE_LEVEL), Some(e)),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false),
    );

    let _ = subscriber.try_init();

    if let Some(e) = rejected {
        tracing::warn!(error = %e, "using default trace level");
    }
}

fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    let level = level.unwrap_or(DEFAULT_TRACE_LEVEL);
    EnvFilter::try_new(level)
        .map_err(|e| BookshelfError::Config(format!("invalid trace_level {level:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_info() {
        assert_eq!(build_filter(None).unwrap().to_string(), "info");
    }

    #[test]
    fn filter_uses_configured_level() {
        assert_eq!(build_filter(Some("debug")).unwrap().to_string(), "debug");
    }

    #[test]
    fn bad_directive_is_a_config_error() {
        let err = build_filter(Some("[not a directive")).unwrap_err();
        assert!(matches!(err, BookshelfError::Config(_)));
    }

    #[test]
    fn init_twice_does_not_panic() {
        let config = Config::default();
        init_tracing(&config);
        init_tracing(&config);
    }
}
