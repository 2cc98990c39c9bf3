//! Configuration validation

use super::PluginConfig;
use crate::error::{Result, SceneHookError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator for the plugin
///
/// Checks that:
/// - the command name is non-empty and holds no whitespace
/// - the log level is one `tracing` understands
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns [`SceneHookError::InvalidConfiguration`] naming the first bad
    /// setting.
    pub fn validate(config: &PluginConfig) -> Result<()> {
        Self::validate_command_name(&config.command_name)?;
        Self::validate_log_level(&config.log_level)?;
        Ok(())
    }

    fn validate_command_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(SceneHookError::InvalidConfiguration(
                "Command name cannot be empty".to_string(),
            ));
        }

        if name.chars().any(char::is_whitespace) {
            return Err(SceneHookError::InvalidConfiguration(format!(
                "Invalid command name: '{}'. Command names cannot contain whitespace.",
                name
            )));
        }

        Ok(())
    }

    fn validate_log_level(level: &str) -> Result<()> {
        if !LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)) {
            return Err(SceneHookError::InvalidConfiguration(format!(
                "Invalid log level: '{}'. Expected one of: {}",
                level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
