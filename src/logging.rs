//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::error::{Result, ReviewError};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `config.level` when set. Fails if a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ReviewError::Logging(e.to_string()))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            ReviewError::Logging(format!("invalid log level {:?}: {}", config.level, e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig {
            level: "risk_analyst=verbose".to_string(),
            json: false,
        };
        assert!(matches!(build_filter(&config), Err(ReviewError::Logging(_))));
    }

    #[test]
    fn test_valid_level_accepted() {
        let config = LoggingConfig {
            level: "risk_analyst=debug,warn".to_string(),
            json: true,
        };
        assert!(build_filter(&config).is_ok());
    }
}
