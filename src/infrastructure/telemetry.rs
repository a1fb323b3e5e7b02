//! Tracing subscriber setup

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Multi-line human-readable output
    Pretty,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(Error::application(format!("unknown log format '{other}'"))),
        }
    }
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level)
            .map_err(|e| Error::application(format!("invalid log level '{}': {e}", settings.level))),
    }
}

/// Install the global subscriber
pub fn init_tracing(settings: &LoggingSettings) -> Result<()> {
    let filter = env_filter(settings)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match settings.format.parse::<LogFormat>()? {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    installed.map_err(|e| Error::application(format!("failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn logging(level: &str, format: &str) -> LoggingSettings {
        LoggingSettings {
            level: level.to_string(),
            format: format.to_string(),
        }
    }

    #[rstest]
    #[case("json", LogFormat::Json)]
    #[case("JSON", LogFormat::Json)]
    #[case("pretty", LogFormat::Pretty)]
    #[case(" Pretty ", LogFormat::Pretty)]
    fn test_log_format_parsing(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let error = "xml".parse::<LogFormat>().unwrap_err();
        assert_eq!(error.to_string(), "Application error: unknown log format 'xml'");
    }

    #[test]
    fn test_unknown_format_fails_before_installing() {
        assert!(init_tracing(&logging("info", "xml")).is_err());
    }

    #[test]
    fn test_configured_level_builds_a_filter() {
        assert!(env_filter(&logging("debug,hyper=warn", "json")).is_ok());
    }
}
