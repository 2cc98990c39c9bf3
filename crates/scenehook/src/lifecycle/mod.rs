//! Callback lifecycle
//!
//! Connects the event catalog to the host's notification mechanism. The
//! [`CallbackManager`] registers one callback per catalog event on
//! [`install`](CallbackManager::install) and unregisters them on
//! [`remove`](CallbackManager::remove). Both walk the whole catalog and skip
//! events already in the requested state, so calling either twice is harmless.
//!
//! Install is not atomic: if the host refuses an event, the events installed
//! before it stay installed and the failure is returned.

pub mod host;
pub mod manager;

pub use host::{HostStatus, SceneHost};
pub use manager::CallbackManager;
