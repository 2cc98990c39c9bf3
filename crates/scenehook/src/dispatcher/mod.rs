//! Event dispatch
//!
//! When the host signals an event, the installed callback asks the
//! [`SceneDispatcher`] to run that event's scripts:
//!
//! 1. Snapshot the event's scripts from the registry (registry order)
//! 2. Unchecked events: execute every script, reporting failures and carrying on
//! 3. Checked events: evaluate scripts until one returns false, which vetoes
//!    the host operation; remaining scripts are skipped
//!
//! # Examples
//!
//! ```ignore
//! let dispatcher = SceneDispatcher::new(registry, Arc::new(executor));
//! let outcome = dispatcher.dispatch(EventId::BeforeSaveCheck);
//! if outcome.is_vetoed() {
//!     // host aborts the save
//! }
//! ```

pub mod callback;
pub mod event;

pub use callback::{callback_for, CheckCallback, NotifyCallback, SceneCallback};
pub use event::SceneDispatcher;
