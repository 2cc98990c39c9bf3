//! Core data types for the scene hook system
//!
//! # Examples
//!
//! ```ignore
//! use scenehook::ScriptEntry;
//!
//! let entry = ScriptEntry::new("notify", "print('saved')")
//!     .with_display(true);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named script attached to one event kind
///
/// # Fields
///
/// * `name` - Name, unique per event under case-insensitive comparison
/// * `body` - Opaque script source handed to the executor
/// * `display_enabled` - Whether the host shows the script's output
/// * `undo_enabled` - Whether the script participates in the host's undo queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Script name as last written
    pub name: String,

    /// Script source
    pub body: String,

    /// Show execution output
    #[serde(default)]
    pub display_enabled: bool,

    /// Record execution in the undo queue
    #[serde(default)]
    pub undo_enabled: bool,
}

impl ScriptEntry {
    /// Create an entry with display and undo disabled
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            display_enabled: false,
            undo_enabled: false,
        }
    }

    /// Set whether the output is displayed
    pub fn with_display(mut self, enabled: bool) -> Self {
        self.display_enabled = enabled;
        self
    }

    /// Set whether execution is undoable
    pub fn with_undo(mut self, enabled: bool) -> Self {
        self.undo_enabled = enabled;
        self
    }
}

/// Terminal state of one dispatch
///
/// A dispatch starts idle, runs its scripts and ends either completed or
/// vetoed. Only checked events can end vetoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchOutcome {
    /// Every script ran (unchecked) or every script agreed (checked)
    Completed,

    /// A checked script returned a falsy result; the host must abort
    Vetoed,
}

impl DispatchOutcome {
    /// Whether the host may go ahead with the pending operation
    pub fn proceed(self) -> bool {
        self == DispatchOutcome::Completed
    }

    /// Whether the dispatch vetoed the operation
    pub fn is_vetoed(self) -> bool {
        self == DispatchOutcome::Vetoed
    }
}

/// Opaque handle to a host-side callback registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallbackId(pub u64);

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "callback#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_entry_defaults() {
        let entry = ScriptEntry::new("notify", "print('saved')");
        assert!(!entry.display_enabled);
        assert!(!entry.undo_enabled);

        let entry = entry.with_display(true).with_undo(true);
        assert!(entry.display_enabled);
        assert!(entry.undo_enabled);
    }

    #[test]
    fn test_dispatch_outcome() {
        assert!(DispatchOutcome::Completed.proceed());
        assert!(!DispatchOutcome::Vetoed.proceed());
        assert!(DispatchOutcome::Vetoed.is_vetoed());
    }

    #[test]
    fn test_script_entry_yaml_defaults() {
        let entry: ScriptEntry = serde_yaml::from_str("name: a\nbody: b\n").unwrap();
        assert_eq!(entry, ScriptEntry::new("a", "b"));
    }
}
