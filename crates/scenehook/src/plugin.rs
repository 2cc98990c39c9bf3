//! One plugin session inside a host
//!
//! [`ScenePlugin`] wires the registry, dispatcher, callback manager and
//! command surface together for the lifetime of one host load.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    cli::{CommandOutput, SceneHookCli},
    config::PluginConfig,
    diagnostics::{DiagnosticSink, Diagnostics},
    dispatcher::SceneDispatcher,
    error::Result,
    executor::ScriptExecutor,
    lifecycle::{CallbackManager, SceneHost},
    registry::ScriptRegistry,
};

/// A loaded scene hook plugin
pub struct ScenePlugin {
    config: PluginConfig,
    diagnostics: Arc<Diagnostics>,
    registry: ScriptRegistry,
    manager: CallbackManager,
    cli: SceneHookCli,
}

impl ScenePlugin {
    /// Build a session and, if configured, install host callbacks
    ///
    /// A host that refuses a callback does not fail the load: the failure is
    /// reported and the command stays usable so scripts can still be managed.
    pub fn load(
        host: Arc<dyn SceneHost>,
        executor: Arc<dyn ScriptExecutor>,
        sink: Arc<dyn DiagnosticSink>,
        config: PluginConfig,
    ) -> Result<Self> {
        let diagnostics = Arc::new(Diagnostics::new(sink));
        diagnostics.set_debug(config.debug);

        let registry = ScriptRegistry::new(diagnostics.clone());
        let dispatcher = SceneDispatcher::new(registry.clone(), executor);
        let manager = CallbackManager::new(host.clone(), dispatcher);
        let cli = SceneHookCli::new(registry.clone()).with_host(host);

        if config.install_on_load {
            if let Err(e) = manager.install() {
                warn!(error = %e, "Plugin loaded without all scene callbacks");
            }
        }

        info!(
            command = %config.command_name,
            installed = manager.installed_count(),
            "Scene hook plugin loaded"
        );

        Ok(Self {
            config,
            diagnostics,
            registry,
            manager,
            cli,
        })
    }

    /// Run one invocation of the registered command
    pub fn execute<I, T>(&self, args: I) -> Result<CommandOutput>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        self.cli.execute_args(args)
    }

    /// Install any callbacks not yet registered with the host
    pub fn install(&self) -> Result<()> {
        self.manager.install()
    }

    /// Remove every host callback
    pub fn unload(&self) -> Result<()> {
        self.manager.remove()?;
        info!(command = %self.config.command_name, "Scene hook plugin unloaded");
        Ok(())
    }

    /// Settings the session was loaded with
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Name the host should register the command under
    pub fn command_name(&self) -> &str {
        &self.config.command_name
    }

    /// Session diagnostics
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Session script registry
    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    /// Session callback manager
    pub fn manager(&self) -> &CallbackManager {
        &self.manager
    }
}

impl std::fmt::Debug for ScenePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScenePlugin")
            .field("config", &self.config)
            .field("manager", &self.manager)
            .finish_non_exhaustive()
    }
}
