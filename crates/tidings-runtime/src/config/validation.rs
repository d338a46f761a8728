//! Configuration validation.

use super::error::{ConfigError, ConfigResult};
use super::schema::{LogOutput, TidingsConfig};

/// Validates a loaded configuration.
///
/// Checks the settings serde cannot express on its own:
/// - file output needs a file path with a file name
/// - filter keys must be non-empty module paths without whitespace
pub fn validate_config(config: &TidingsConfig) -> ConfigResult<()> {
    let logging = &config.logging;

    if logging.output == LogOutput::File {
        match &logging.file_path {
            None => {
                return Err(ConfigError::validation(
                    "logging.output is 'file' but logging.file_path is not set",
                ));
            }
            Some(path) if path.file_name().is_none() => {
                return Err(ConfigError::validation(format!(
                    "logging.file_path '{}' does not name a file",
                    path.display()
                )));
            }
            Some(_) => {}
        }
    }

    for module in logging.filters.keys() {
        if module.is_empty() || module.chars().any(char::is_whitespace) {
            return Err(ConfigError::validation(format!(
                "invalid module name in logging.filters: '{module}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TidingsConfig::default()).is_ok());
    }

    #[test]
    fn test_file_output_requires_path() {
        let mut config = TidingsConfig::default();
        config.logging.output = LogOutput::File;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError { .. })
        ));

        config.logging.file_path = Some(PathBuf::from("logs/.."));
        assert!(validate_config(&config).is_err());

        config.logging.file_path = Some(PathBuf::from("logs/tidings.log"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_filter_module_names() {
        let mut config = TidingsConfig::default();
        config
            .logging
            .filters
            .insert("tidings framework".into(), LogLevel::Debug);
        assert!(validate_config(&config).is_err());
    }
}
