//! Host notification interface

use std::{fmt, sync::Arc};

use crate::{
    catalog::EventKind, dispatcher::SceneCallback, files::FilenameQuery, types::CallbackId,
};

/// Status returned by a host that refused a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStatus(pub String);

impl HostStatus {
    /// Create a status from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What scenehook needs from the embedding application
///
/// Hosts call [`SceneCallback::fire`] synchronously on their own thread when
/// an event occurs. For checked events the returned outcome decides whether
/// the pending operation goes ahead.
pub trait SceneHost: Send + Sync {
    /// Register `callback` for `event`, returning a handle for later removal
    fn add_callback(
        &self,
        event: &'static EventKind,
        callback: Arc<dyn SceneCallback>,
    ) -> std::result::Result<CallbackId, HostStatus>;

    /// Drop a registration made by [`add_callback`](Self::add_callback)
    fn remove_callback(&self, id: CallbackId);

    /// File name involved in the host's pending file operation, if any
    fn pending_filename(&self, _query: FilenameQuery) -> Option<String> {
        None
    }
}
