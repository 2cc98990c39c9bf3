//! Shared test doubles for the scenehook integration tests

#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};

use scenehook::{
    dispatcher::SceneCallback, CallbackId, DispatchOutcome, EventId, EventKind, FilenameQuery,
    HostStatus, Result, SceneHookError, SceneHost, ScriptEntry, ScriptExecutor,
};

/// Host that keeps its callbacks so tests can fire events
#[derive(Default)]
pub struct RecordingHost {
    next_id: Mutex<u64>,
    callbacks: Mutex<BTreeMap<CallbackId, Arc<dyn SceneCallback>>>,
    refused: Mutex<Vec<EventId>>,
    filenames: Mutex<HashMap<FilenameQuery, String>>,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Refuse registration for `event`
    pub fn refuse(&self, event: EventId) {
        self.refused.lock().unwrap().push(event);
    }

    /// Report `name` for `query`
    pub fn set_filename(&self, query: FilenameQuery, name: &str) {
        self.filenames
            .lock()
            .unwrap()
            .insert(query, name.to_string());
    }

    pub fn live(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    pub fn is_registered(&self, event: EventId) -> bool {
        self.callbacks
            .lock()
            .unwrap()
            .values()
            .any(|callback| callback.event().id == event)
    }

    /// Fire `event` the way the host would, returning `None` if nothing is registered
    pub fn fire(&self, event: EventId) -> Option<DispatchOutcome> {
        let callbacks: Vec<Arc<dyn SceneCallback>> = self
            .callbacks
            .lock()
            .unwrap()
            .values()
            .filter(|callback| callback.event().id == event)
            .cloned()
            .collect();

        let mut outcome = None;
        for callback in callbacks {
            let fired = callback.fire();
            outcome = Some(match outcome {
                Some(DispatchOutcome::Vetoed) => DispatchOutcome::Vetoed,
                _ => fired,
            });
        }
        outcome
    }
}

impl SceneHost for RecordingHost {
    fn add_callback(
        &self,
        event: &'static EventKind,
        callback: Arc<dyn SceneCallback>,
    ) -> std::result::Result<CallbackId, HostStatus> {
        if self.refused.lock().unwrap().contains(&event.id) {
            return Err(HostStatus::new(format!("{} not supported", event.host_name())));
        }

        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = CallbackId(*next);
        self.callbacks.lock().unwrap().insert(id, callback);
        Ok(id)
    }

    fn remove_callback(&self, id: CallbackId) {
        self.callbacks.lock().unwrap().remove(&id);
    }

    fn pending_filename(&self, query: FilenameQuery) -> Option<String> {
        self.filenames.lock().unwrap().get(&query).cloned()
    }
}

/// Executor whose behavior is driven by the script body
///
/// - `fail`: returns an error
/// - `0` or `false`: evaluates to false
/// - anything else: succeeds and evaluates to true
#[derive(Default)]
pub struct ScriptedExecutor {
    ran: Mutex<Vec<ScriptEntry>>,
}

impl ScriptedExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Names of the scripts run so far, in order
    pub fn ran(&self) -> Vec<String> {
        self.ran
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Entries exactly as the dispatcher handed them over, in order
    pub fn entries(&self) -> Vec<ScriptEntry> {
        self.ran.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.ran.lock().unwrap().clear();
    }

    fn record(&self, entry: &ScriptEntry) -> Result<()> {
        self.ran.lock().unwrap().push(entry.clone());
        if entry.body == "fail" {
            return Err(SceneHookError::ExecutionFailed(format!(
                "script {} raised",
                entry.name
            )));
        }
        Ok(())
    }
}

impl ScriptExecutor for ScriptedExecutor {
    fn execute(&self, entry: &ScriptEntry) -> Result<()> {
        self.record(entry)
    }

    fn evaluate(&self, entry: &ScriptEntry) -> Result<bool> {
        self.record(entry)?;
        Ok(!matches!(entry.body.as_str(), "0" | "false"))
    }
}
