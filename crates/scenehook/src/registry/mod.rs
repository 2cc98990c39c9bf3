//! Script registry
//!
//! Holds the scripts attached to each catalog event. Every catalog event owns
//! exactly one collection from construction on, so a collection can never
//! exist for an event outside the catalog.
//!
//! Script names are compared case-insensitively: adding `Notify` after
//! `notify` replaces the earlier entry instead of creating a second one. The
//! registry iterates a collection in ascending order of the lowercased name,
//! and that order is also the execution order used by the dispatcher.
//!
//! # Examples
//!
//! ```ignore
//! use scenehook::{Diagnostics, ScriptEntry, ScriptRegistry};
//!
//! let registry = ScriptRegistry::new(Arc::new(Diagnostics::tracing()));
//! registry.add("AfterSave", ScriptEntry::new("notify", "print('saved')"))?;
//!
//! for (name, body) in registry.list("AfterSave")? {
//!     println!("{} => {}", name, body);
//! }
//!
//! // Removing twice is fine
//! registry.remove("AfterSave", "notify")?;
//! registry.remove("AfterSave", "notify")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod escape;
pub mod storage;

pub use escape::{escape, unescape};
pub use storage::ScriptRegistry;

use std::fmt;

/// Case-insensitive script name key
///
/// Stores the lowercased name so ordering and equality ignore case without a
/// custom comparator on the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptKey(String);

impl ScriptKey {
    /// Normalize a script name into a key
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    /// The normalized name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScriptKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
