//! Scene Hook
//!
//! Attach scripts to the lifecycle events of a host application (new scene,
//! open, save, import, export, reference, plugin load, ...) and run them when
//! the host signals those events.
//!
//! # Overview
//!
//! Users manage scripts through a single command. When an event fires, every
//! script attached to it runs. Some events are *checked*: they fire before an
//! operation, and any script that evaluates to false vetoes that operation.
//!
//! # Architecture
//!
//! The system consists of five main components:
//!
//! 1. **Event Catalog** (`catalog`): The fixed set of events and their labels
//! 2. **Script Registry** (`registry`): Stores scripts per event
//! 3. **Dispatcher** (`dispatcher`): Runs an event's scripts and decides vetoes
//! 4. **Lifecycle** (`lifecycle`): Registers callbacks with the host
//! 5. **Command Surface** (`cli`): Flag-based command for managing scripts
//!
//! [`ScenePlugin`] wires them together for one host session.
//!
//! # Quick Start
//!
//! ```ignore
//! use scenehook::{PluginConfig, ScenePlugin, TracingSink};
//!
//! let plugin = ScenePlugin::load(host, executor, Arc::new(TracingSink), PluginConfig::default())?;
//!
//! plugin.execute([
//!     "--add-event", "AfterSave",
//!     "--script-name", "notify",
//!     "--script", "print('saved')",
//! ])?;
//!
//! let listing = plugin.execute(["--list-scripts", "AfterSave"])?;
//! println!("{}", listing);
//!
//! // When the host saves, the AfterSave callback runs `notify`.
//! plugin.unload()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Configuration
//!
//! Plugin settings live in `.scenehook/config.yaml`:
//!
//! ```yaml
//! command_name: sceneHook
//! debug: false
//! install_on_load: true
//! log_level: info
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T>` which is an alias for
//! `std::result::Result<T, SceneHookError>`. Script failures during dispatch
//! are reported through [`Diagnostics`] and never abort the host.
//!
//! # Thread Safety
//!
//! All components are `Send + Sync`. No registry lock is held while scripts
//! run, so a script may itself manage scripts or trigger further events.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod files;
pub mod lifecycle;
pub mod logging;
pub mod plugin;
pub mod registry;
pub mod types;

// Re-export public types
pub use catalog::{EventCatalog, EventId, EventKind};
pub use cli::{CommandOutput, SceneCommand, SceneHookArgs, SceneHookCli};
pub use config::{ConfigLoader, PluginConfig};
pub use diagnostics::{DiagnosticSink, Diagnostics, MemorySink, Severity, TracingSink};
pub use dispatcher::{SceneCallback, SceneDispatcher};
pub use error::{Result, SceneHookError};
pub use executor::{FnExecutor, ScriptExecutor};
pub use files::{compare_files, FilenameQuery};
pub use lifecycle::{CallbackManager, HostStatus, SceneHost};
pub use plugin::ScenePlugin;
pub use registry::{escape, unescape, ScriptKey, ScriptRegistry};
pub use types::{CallbackId, DispatchOutcome, ScriptEntry};
