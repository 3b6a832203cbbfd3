//! Tracing subscriber setup for the binary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}

impl TracingConfig {
    /// Default filter for a CLI verbosity level.
    pub fn for_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        };
        Self {
            default_filter: format!("{level},orthos={level}"),
            ..Self::default()
        }
    }
}

/// Install the global subscriber. Logs go to stderr so that command output
/// on stdout stays machine readable.
pub fn init_tracing(config: TracingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let result = if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert!(TracingConfig::for_verbosity(0).default_filter.starts_with("error"));
        assert!(TracingConfig::for_verbosity(2).default_filter.starts_with("info"));
        assert!(TracingConfig::for_verbosity(7).default_filter.starts_with("debug"));
    }
}
