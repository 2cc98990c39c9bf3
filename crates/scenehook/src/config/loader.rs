//! Configuration loader for the plugin

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::{ConfigValidator, PluginConfig};
use crate::error::{Result, SceneHookError};

const CONFIG_DIR: &str = "scenehook";
const CONFIG_FILE: &str = "config.yaml";

/// Configuration loader for the plugin
///
/// Loads settings from YAML configuration files following a hierarchy:
/// 1. Project configuration (`.scenehook/config.yaml`)
/// 2. User configuration (`<config dir>/scenehook/config.yaml`)
/// 3. Built-in defaults
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read,
    /// is not valid YAML, or holds invalid settings.
    pub fn load() -> Result<PluginConfig> {
        Self::load_with(&Self::project_path(), Self::user_path().as_deref())
    }

    /// Load settings from an explicit project file and optional user file
    pub fn load_with(project: &Path, user: Option<&Path>) -> Result<PluginConfig> {
        let mut merged = Mapping::new();

        if let Some(user) = user {
            Self::merge(&mut merged, Self::read_mapping(user)?);
        }
        // Project keys override user keys
        Self::merge(&mut merged, Self::read_mapping(project)?);

        let config: PluginConfig = serde_yaml::from_value(Value::Mapping(merged))?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Project configuration path, relative to the working directory
    pub fn project_path() -> PathBuf {
        PathBuf::from(format!(".{}", CONFIG_DIR)).join(CONFIG_FILE)
    }

    /// User configuration path, if the platform has a config directory
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load settings from a single file
    ///
    /// A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<PluginConfig> {
        let mapping = Self::read_mapping(path)?;
        let config: PluginConfig = serde_yaml::from_value(Value::Mapping(mapping))?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Parse YAML configuration content
    ///
    /// Expected YAML format:
    /// ```yaml
    /// command_name: sceneHook
    /// debug: false
    /// install_on_load: true
    /// log_level: info
    /// ```
    pub fn parse_yaml(content: &str) -> Result<PluginConfig> {
        let mapping = Self::parse_mapping(content)?;
        let config: PluginConfig = serde_yaml::from_value(Value::Mapping(mapping))?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn read_mapping(path: &Path) -> Result<Mapping> {
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file");
            return Ok(Mapping::new());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SceneHookError::InvalidConfiguration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(path = %path.display(), "Loaded configuration file");

        Self::parse_mapping(&content)
    }

    fn parse_mapping(content: &str) -> Result<Mapping> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| SceneHookError::InvalidConfiguration(format!("Invalid YAML: {}", e)))?;

        match value {
            Value::Null => Ok(Mapping::new()),
            Value::Mapping(mapping) => Ok(mapping),
            _ => Err(SceneHookError::InvalidConfiguration(
                "Configuration must be a mapping".to_string(),
            )),
        }
    }

    fn merge(base: &mut Mapping, overlay: Mapping) {
        for (key, value) in overlay {
            base.insert(key, value);
        }
    }
}
