//! Installation state and install/remove

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::{debug, error, info};

use super::SceneHost;
use crate::{
    catalog::{EventCatalog, EventId},
    diagnostics::Diagnostics,
    dispatcher::{callback_for, SceneDispatcher},
    error::{Result, SceneHookError},
    types::CallbackId,
};

/// Tracks which catalog events have a live host callback
///
/// An event is installed exactly when the manager holds a [`CallbackId`] for
/// it.
pub struct CallbackManager {
    host: Arc<dyn SceneHost>,
    dispatcher: SceneDispatcher,
    diagnostics: Arc<Diagnostics>,
    installed: RwLock<BTreeMap<EventId, CallbackId>>,
}

impl CallbackManager {
    /// Create a manager with nothing installed
    pub fn new(host: Arc<dyn SceneHost>, dispatcher: SceneDispatcher) -> Self {
        let diagnostics = dispatcher.registry().diagnostics().clone();
        Self {
            host,
            dispatcher,
            diagnostics,
            installed: RwLock::new(BTreeMap::new()),
        }
    }

    /// Host this manager registers with
    pub fn host(&self) -> &Arc<dyn SceneHost> {
        &self.host
    }

    /// Dispatcher the installed callbacks call into
    pub fn dispatcher(&self) -> &SceneDispatcher {
        &self.dispatcher
    }

    /// Register a callback for every event not yet installed
    ///
    /// Stops at the first event the host refuses and returns
    /// [`SceneHookError::HostRegistrationFailure`]; earlier events stay
    /// installed. No lock is held while the host is called, so a host may
    /// fire callbacks or query the manager during registration.
    pub fn install(&self) -> Result<()> {
        for kind in EventCatalog::all_kinds() {
            if self.read()?.contains_key(&kind.id) {
                continue;
            }

            let callback = callback_for(kind, &self.dispatcher);
            match self.host.add_callback(kind, callback) {
                Ok(id) => {
                    self.write()?.insert(kind.id, id);
                    debug!(event = %kind.host_name(), callback = %id, "Installed callback");
                    self.diagnostics
                        .debug(format!("installed callback for {}", kind.host_name()));
                }
                Err(status) => {
                    error!(event = %kind.host_name(), status = %status, "Host refused callback");
                    self.diagnostics.error(format!(
                        "could not install callback for {}: {}",
                        kind.host_name(),
                        status
                    ));
                    return Err(SceneHookError::HostRegistrationFailure {
                        event: kind.host_name(),
                        status: status.to_string(),
                    });
                }
            }
        }

        info!(installed = self.installed_count(), "Scene callbacks installed");
        self.diagnostics.status("installed scenehook");
        Ok(())
    }

    /// Unregister every installed callback
    pub fn remove(&self) -> Result<()> {
        self.diagnostics.status("scenehook: removing all callbacks");

        let removed = std::mem::take(&mut *self.write()?);

        for kind in EventCatalog::all_kinds() {
            if let Some(id) = removed.get(&kind.id) {
                self.host.remove_callback(*id);
                debug!(event = %kind.host_name(), callback = %id, "Removed callback");
                self.diagnostics
                    .debug(format!("removed callback for {}", kind.host_name()));
            }
        }

        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<EventId, CallbackId>>> {
        self.installed.read().map_err(|e| {
            SceneHookError::StorageError(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<EventId, CallbackId>>> {
        self.installed.write().map_err(|e| {
            SceneHookError::StorageError(format!("Failed to acquire write lock: {}", e))
        })
    }

    /// Whether an event currently has a host callback
    pub fn is_installed(&self, id: EventId) -> bool {
        self.read()
            .map(|installed| installed.contains_key(&id))
            .unwrap_or(false)
    }

    /// Host handle for an installed event
    pub fn callback_id(&self, id: EventId) -> Option<CallbackId> {
        self.read()
            .ok()
            .and_then(|installed| installed.get(&id).copied())
    }

    /// Number of installed events
    pub fn installed_count(&self) -> usize {
        self.read()
            .map(|installed| installed.len())
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for CallbackManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackManager")
            .field("installed", &self.installed_count())
            .finish_non_exhaustive()
    }
}
