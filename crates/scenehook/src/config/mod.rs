//! Plugin configuration
//!
//! Settings are read from YAML files in two places, project first:
//!
//! 1. Project configuration (`.scenehook/config.yaml`)
//! 2. User configuration (`<config dir>/scenehook/config.yaml`)
//!
//! A key set in the project file wins over the same key in the user file.
//! Keys set nowhere take their defaults.

pub mod loader;
pub mod validator;

pub use loader::ConfigLoader;
pub use validator::ConfigValidator;

use serde::{Deserialize, Serialize};

/// Settings for one plugin session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Name the host registers the command under
    pub command_name: String,

    /// Start the session with debug diagnostics enabled
    pub debug: bool,

    /// Install host callbacks when the plugin loads
    pub install_on_load: bool,

    /// `tracing` level filter used by [`crate::logging::init_logging`]
    pub log_level: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            command_name: "sceneHook".to_string(),
            debug: false,
            install_on_load: true,
            log_level: "info".to_string(),
        }
    }
}
