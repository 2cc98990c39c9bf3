//! Script dispatch for one event firing

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    catalog::{EventCatalog, EventId, EventKind},
    diagnostics::Diagnostics,
    executor::ScriptExecutor,
    registry::ScriptRegistry,
    types::{DispatchOutcome, ScriptEntry},
};

/// Runs the scripts attached to an event
///
/// Script failures never escape a dispatch: unchecked events keep going,
/// checked events treat a failed evaluation as a veto.
#[derive(Clone)]
pub struct SceneDispatcher {
    registry: ScriptRegistry,
    executor: Arc<dyn ScriptExecutor>,
    diagnostics: Arc<Diagnostics>,
}

impl SceneDispatcher {
    /// Create a dispatcher reading from `registry`
    pub fn new(registry: ScriptRegistry, executor: Arc<dyn ScriptExecutor>) -> Self {
        let diagnostics = registry.diagnostics().clone();
        Self {
            registry,
            executor,
            diagnostics,
        }
    }

    /// Registry this dispatcher reads from
    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    /// Dispatch an event, choosing the checked or unchecked path from the catalog
    pub fn dispatch(&self, id: EventId) -> DispatchOutcome {
        match EventCatalog::lookup_by_identifier(id) {
            Some(kind) if kind.checked => self.check(kind),
            Some(kind) => self.notify(kind),
            None => DispatchOutcome::Completed,
        }
    }

    fn snapshot(&self, kind: &EventKind) -> Vec<ScriptEntry> {
        match self.registry.scripts(kind.id) {
            Ok(scripts) => scripts,
            Err(e) => {
                self.diagnostics.error(format!(
                    "could not read scripts for event \"{}\": {}",
                    kind.label, e
                ));
                Vec::new()
            }
        }
    }

    fn announce(&self, kind: &EventKind, script: &ScriptEntry) {
        self.diagnostics.debug(format!(
            "executing script \"{}\" for event \"{}\"",
            script.name, kind.label
        ));
        self.diagnostics.debug(&script.body);
    }

    /// Run every script of an unchecked event
    ///
    /// Always completes; failures are reported and the next script runs.
    pub fn notify(&self, kind: &EventKind) -> DispatchOutcome {
        self.diagnostics
            .debug(format!("executing scripts for event \"{}\"", kind.label));

        let scripts = self.snapshot(kind);
        debug!(event = %kind.label, script_count = scripts.len(), "Dispatching event");

        let mut failures = 0usize;
        for script in &scripts {
            self.announce(kind, script);
            if let Err(e) = self.executor.execute(script) {
                failures += 1;
                warn!(event = %kind.label, script = %script.name, error = %e, "Script failed");
                self.diagnostics.warn(format!(
                    "script \"{}\" for event \"{}\" failed: {}",
                    script.name, kind.label, e
                ));
            }
        }

        if !scripts.is_empty() {
            info!(
                event = %kind.label,
                script_count = scripts.len(),
                failures = failures,
                "Event scripts executed"
            );
        }
        DispatchOutcome::Completed
    }

    /// Evaluate the scripts of a checked event until one vetoes
    pub fn check(&self, kind: &EventKind) -> DispatchOutcome {
        self.diagnostics
            .debug(format!("executing check scripts for event \"{}\"", kind.label));

        let scripts = self.snapshot(kind);
        debug!(event = %kind.label, script_count = scripts.len(), "Dispatching checked event");

        for script in &scripts {
            self.announce(kind, script);
            let allowed = match self.executor.evaluate(script) {
                Ok(allowed) => allowed,
                Err(e) => {
                    warn!(event = %kind.label, script = %script.name, error = %e, "Check script failed");
                    self.diagnostics.warn(format!(
                        "script \"{}\" for event \"{}\" failed: {}",
                        script.name, kind.label, e
                    ));
                    false
                }
            };

            if !allowed {
                info!(event = %kind.label, script = %script.name, "Operation vetoed");
                return DispatchOutcome::Vetoed;
            }
        }

        DispatchOutcome::Completed
    }
}

impl std::fmt::Debug for SceneDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneDispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        diagnostics::MemorySink,
        error::{Result, SceneHookError},
    };

    /// Records every call; evaluates bodies "1" as true and "fail" as an error
    struct MockExecutor {
        calls: Mutex<Vec<String>>,
    }

    impl MockExecutor {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ScriptExecutor for MockExecutor {
        fn execute(&self, script: &ScriptEntry) -> Result<()> {
            self.calls.lock().unwrap().push(script.name.clone());
            if script.body == "fail" {
                return Err(SceneHookError::ExecutionFailed("Mock failure".to_string()));
            }
            Ok(())
        }

        fn evaluate(&self, script: &ScriptEntry) -> Result<bool> {
            self.calls.lock().unwrap().push(script.name.clone());
            if script.body == "fail" {
                return Err(SceneHookError::ExecutionFailed("Mock failure".to_string()));
            }
            Ok(script.body == "1")
        }
    }

    fn create_dispatcher(scripts: &[(&str, &str, &str)]) -> (Arc<MockExecutor>, SceneDispatcher) {
        let diagnostics = Arc::new(Diagnostics::new(Arc::new(MemorySink::new())));
        let registry = ScriptRegistry::new(diagnostics);
        for (event, name, body) in scripts {
            registry.add(event, ScriptEntry::new(*name, *body)).unwrap();
        }
        let executor = Arc::new(MockExecutor::new());
        let dispatcher = SceneDispatcher::new(registry, executor.clone() as Arc<dyn ScriptExecutor>);
        (executor, dispatcher)
    }

    #[test]
    fn test_notify_runs_every_script() {
        let (executor, dispatcher) = create_dispatcher(&[
            ("AfterSave", "a", "x"),
            ("AfterSave", "b", "fail"),
            ("AfterSave", "c", "x"),
            ("AfterOpen", "other", "x"),
        ]);

        let outcome = dispatcher.dispatch(EventId::AfterSave);

        assert_eq!(outcome, DispatchOutcome::Completed);
        assert_eq!(executor.calls(), vec!["a", "b", "c"]);
        assert_eq!(dispatcher.registry().diagnostics().warning_count(), 1);
    }

    #[test]
    fn test_check_short_circuits() {
        let (executor, dispatcher) = create_dispatcher(&[
            ("BeforeSaveCheck", "A", "1"),
            ("BeforeSaveCheck", "B", "0"),
            ("BeforeSaveCheck", "C", "1"),
        ]);

        let outcome = dispatcher.dispatch(EventId::BeforeSaveCheck);

        assert_eq!(outcome, DispatchOutcome::Vetoed);
        assert_eq!(executor.calls(), vec!["A", "B"]);
    }

    #[test]
    fn test_check_all_true_proceeds() {
        let (executor, dispatcher) = create_dispatcher(&[
            ("BeforeOpenCheck", "a", "1"),
            ("BeforeOpenCheck", "b", "1"),
        ]);

        assert!(dispatcher.dispatch(EventId::BeforeOpenCheck).proceed());
        assert_eq!(executor.calls().len(), 2);
    }

    #[test]
    fn test_check_empty_proceeds() {
        let (executor, dispatcher) = create_dispatcher(&[]);
        assert!(dispatcher.dispatch(EventId::BeforeNewCheck).proceed());
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn test_check_failure_vetoes() {
        let (executor, dispatcher) = create_dispatcher(&[
            ("BeforeNewCheck", "a", "fail"),
            ("BeforeNewCheck", "b", "1"),
        ]);

        assert!(dispatcher.dispatch(EventId::BeforeNewCheck).is_vetoed());
        assert_eq!(executor.calls(), vec!["a"]);
    }

    #[test]
    fn test_unchecked_event_never_vetoes() {
        let (_executor, dispatcher) = create_dispatcher(&[("BeforeSave", "a", "0")]);
        assert_eq!(dispatcher.dispatch(EventId::BeforeSave), DispatchOutcome::Completed);
    }
}
