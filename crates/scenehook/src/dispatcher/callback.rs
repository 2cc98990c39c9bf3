//! Host-facing callbacks
//!
//! The host stores one [`SceneCallback`] per installed event and calls
//! [`SceneCallback::fire`] when that event occurs. Each callback captures the
//! event it serves, so the host never has to pass context back in.

use std::sync::Arc;

use super::SceneDispatcher;
use crate::{catalog::EventKind, types::DispatchOutcome};

/// A callback registered with the host for one event
pub trait SceneCallback: Send + Sync {
    /// Event this callback serves
    fn event(&self) -> &'static EventKind;

    /// Run the event's scripts
    ///
    /// For checked events the host must abort its pending operation when the
    /// outcome is [`DispatchOutcome::Vetoed`]. Unchecked callbacks always
    /// complete.
    fn fire(&self) -> DispatchOutcome;
}

/// Callback for an unchecked event
#[derive(Debug, Clone)]
pub struct NotifyCallback {
    event: &'static EventKind,
    dispatcher: SceneDispatcher,
}

impl NotifyCallback {
    /// Create a callback for `event`
    pub fn new(event: &'static EventKind, dispatcher: SceneDispatcher) -> Self {
        Self { event, dispatcher }
    }
}

impl SceneCallback for NotifyCallback {
    fn event(&self) -> &'static EventKind {
        self.event
    }

    fn fire(&self) -> DispatchOutcome {
        self.dispatcher.notify(self.event)
    }
}

/// Callback for a checked event
#[derive(Debug, Clone)]
pub struct CheckCallback {
    event: &'static EventKind,
    dispatcher: SceneDispatcher,
}

impl CheckCallback {
    /// Create a callback for `event`
    pub fn new(event: &'static EventKind, dispatcher: SceneDispatcher) -> Self {
        Self { event, dispatcher }
    }
}

impl SceneCallback for CheckCallback {
    fn event(&self) -> &'static EventKind {
        self.event
    }

    fn fire(&self) -> DispatchOutcome {
        self.dispatcher.check(self.event)
    }
}

/// Build the right callback kind for an event
pub fn callback_for(
    event: &'static EventKind,
    dispatcher: &SceneDispatcher,
) -> Arc<dyn SceneCallback> {
    if event.checked {
        Arc::new(CheckCallback::new(event, dispatcher.clone()))
    } else {
        Arc::new(NotifyCallback::new(event, dispatcher.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{EventCatalog, EventId},
        diagnostics::Diagnostics,
        error::Result,
        executor::FnExecutor,
        registry::ScriptRegistry,
        types::ScriptEntry,
    };

    fn create_dispatcher() -> SceneDispatcher {
        let registry = ScriptRegistry::new(Arc::new(Diagnostics::default()));
        registry
            .add("BeforeSaveCheck", ScriptEntry::new("deny", "0"))
            .unwrap();
        registry
            .add("BeforeSave", ScriptEntry::new("deny", "0"))
            .unwrap();
        let executor = FnExecutor::new(
            |_: &ScriptEntry| -> Result<()> { Ok(()) },
            |script: &ScriptEntry| -> Result<bool> { Ok(script.body == "1") },
        );
        SceneDispatcher::new(registry, Arc::new(executor))
    }

    #[test]
    fn test_callback_for_checked_event() {
        let dispatcher = create_dispatcher();
        let kind = EventCatalog::lookup_by_identifier(EventId::BeforeSaveCheck).unwrap();
        let callback = callback_for(kind, &dispatcher);

        assert_eq!(callback.event().id, EventId::BeforeSaveCheck);
        assert_eq!(callback.fire(), DispatchOutcome::Vetoed);
    }

    #[test]
    fn test_callback_for_unchecked_event() {
        let dispatcher = create_dispatcher();
        let kind = EventCatalog::lookup_by_identifier(EventId::BeforeSave).unwrap();
        let callback = callback_for(kind, &dispatcher);

        assert_eq!(callback.fire(), DispatchOutcome::Completed);
    }
}
