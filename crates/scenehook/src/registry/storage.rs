//! In-memory script storage

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use super::{escape, ScriptKey};
use crate::{
    catalog::{EventCatalog, EventId, EventKind},
    diagnostics::Diagnostics,
    error::{Result, SceneHookError},
    types::ScriptEntry,
};

type Slots = BTreeMap<EventId, BTreeMap<ScriptKey, ScriptEntry>>;

/// Scripts attached to each catalog event
///
/// Cloning is cheap and clones share the same storage, so the command surface
/// and the dispatcher can each hold a handle.
#[derive(Clone)]
pub struct ScriptRegistry {
    slots: Arc<RwLock<Slots>>,
    diagnostics: Arc<Diagnostics>,
}

impl ScriptRegistry {
    /// Create a registry with one empty collection per catalog event
    pub fn new(diagnostics: Arc<Diagnostics>) -> Self {
        let slots = EventCatalog::all_kinds()
            .iter()
            .map(|kind| (kind.id, BTreeMap::new()))
            .collect();

        Self {
            slots: Arc::new(RwLock::new(slots)),
            diagnostics,
        }
    }

    /// Diagnostics this registry reports to
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Slots>> {
        self.slots
            .read()
            .map_err(|e| SceneHookError::StorageError(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Slots>> {
        self.slots.write().map_err(|e| {
            SceneHookError::StorageError(format!("Failed to acquire write lock: {}", e))
        })
    }

    fn resolve(&self, event: &str) -> Result<&'static EventKind> {
        EventCatalog::lookup_by_label(event).ok_or_else(|| {
            self.diagnostics.error(format!("unknown event \"{}\"", event));
            SceneHookError::UnknownEvent(event.to_string())
        })
    }

    /// Attach a script to an event, replacing any script with the same name
    pub fn add(&self, event: &str, entry: ScriptEntry) -> Result<()> {
        let kind = self.resolve(event)?;
        let name = entry.name.clone();

        let mut slots = self.write()?;
        slots
            .entry(kind.id)
            .or_default()
            .insert(ScriptKey::new(&name), entry);
        drop(slots);

        self.diagnostics
            .debug(format!("script \"{}\" added to event \"{}\"", name, kind.label));
        Ok(())
    }

    /// Detach a script from an event
    ///
    /// Returns whether a script was removed. A missing script is reported as a
    /// warning and is not an error.
    pub fn remove(&self, event: &str, name: &str) -> Result<bool> {
        let kind = self.resolve(event)?;

        let removed = self
            .write()?
            .get_mut(&kind.id)
            .and_then(|scripts| scripts.remove(&ScriptKey::new(name)));

        match removed {
            Some(entry) => {
                self.diagnostics.debug(format!(
                    "script \"{}\" deleted from event \"{}\"",
                    entry.name, kind.label
                ));
                Ok(true)
            }
            None => {
                self.diagnostics.warn(format!(
                    "no script \"{}\" attached to event \"{}\"",
                    name, kind.label
                ));
                Ok(false)
            }
        }
    }

    /// Look up one script
    pub fn get(&self, event: &str, name: &str) -> Result<Option<ScriptEntry>> {
        let kind = self.resolve(event)?;
        let slots = self.read()?;
        Ok(slots
            .get(&kind.id)
            .and_then(|scripts| scripts.get(&ScriptKey::new(name)))
            .cloned())
    }

    /// Name and escaped body of each script attached to an event
    pub fn list(&self, event: &str) -> Result<Vec<(String, String)>> {
        let kind = self.resolve(event)?;
        let slots = self.read()?;
        Ok(slots
            .get(&kind.id)
            .map(|scripts| {
                scripts
                    .values()
                    .map(|entry| (entry.name.clone(), escape(&entry.body)))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Label, name and escaped body of every script, in catalog order
    pub fn list_all(&self) -> Result<Vec<(String, String, String)>> {
        let slots = self.read()?;
        let mut all = Vec::new();
        for kind in EventCatalog::all_kinds() {
            if let Some(scripts) = slots.get(&kind.id) {
                all.extend(scripts.values().map(|entry| {
                    (
                        kind.label.to_string(),
                        entry.name.clone(),
                        escape(&entry.body),
                    )
                }));
            }
        }
        Ok(all)
    }

    /// Snapshot of an event's scripts in execution order
    pub fn scripts(&self, id: EventId) -> Result<Vec<ScriptEntry>> {
        let slots = self.read()?;
        Ok(slots
            .get(&id)
            .map(|scripts| scripts.values().cloned().collect())
            .unwrap_or_default())
    }

    /// Number of scripts attached to an event
    pub fn script_count(&self, id: EventId) -> Result<usize> {
        Ok(self.read()?.get(&id).map_or(0, |scripts| scripts.len()))
    }

    /// Number of event collections, one per catalog event
    pub fn slot_count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

impl std::fmt::Debug for ScriptRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptRegistry").finish_non_exhaustive()
    }
}
