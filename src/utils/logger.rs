use crate::config::toml_config::{LogFormat, LoggingConfig};
use crate::utils::error::{FlippError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is absent or unparsable.
pub fn default_directive(verbose: bool, logging: &LoggingConfig) -> String {
    if verbose {
        "flipp=debug".to_string()
    } else {
        format!("flipp={}", logging.level.trim().to_ascii_lowercase())
    }
}

/// Installs the global subscriber. Output goes to stderr so stdout carries
/// only the greeting.
pub fn init_cli_logger(verbose: bool, logging: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive(verbose, logging)).map_err(|e| {
            FlippError::LoggerError {
                message: e.to_string(),
            }
        })?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match logging.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init(),
    };

    installed.map_err(|e| FlippError::LoggerError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_config_level() {
        let logging = LoggingConfig::default();
        assert_eq!(default_directive(false, &logging), "flipp=warn");

        let logging = LoggingConfig {
            level: " Info ".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(default_directive(false, &logging), "flipp=info");
    }

    #[test]
    fn test_verbose_overrides_config_level() {
        let logging = LoggingConfig {
            level: "error".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(default_directive(true, &logging), "flipp=debug");
    }

    #[test]
    fn test_directives_parse() {
        for level in crate::config::toml_config::LOG_LEVELS {
            let logging = LoggingConfig {
                level: level.to_string(),
                ..LoggingConfig::default()
            };
            assert!(EnvFilter::try_new(default_directive(false, &logging)).is_ok());
        }
    }
}
