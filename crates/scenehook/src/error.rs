//! Error types for scenehook
//!
//! Every fallible operation in the crate returns [`Result<T>`]. Errors are
//! recovered at the operation boundary: the command surface turns them into an
//! error diagnostic and a failed command, the lifecycle manager reports them to
//! its caller. Nothing here is fatal to the host process.
//!
//! Removing a script that is not attached to an event is not an error: it
//! succeeds with a warning diagnostic.
//!
//! # Examples
//!
//! ```ignore
//! match registry.add("AfterSav", entry) {
//!     Ok(()) => {}
//!     Err(SceneHookError::UnknownEvent(label)) => eprintln!("no event {}", label),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur in the scene hook system
#[derive(Debug, Error)]
pub enum SceneHookError {
    /// The caller referenced an event label that is not in the catalog
    #[error("unknown event \"{0}\"")]
    UnknownEvent(String),

    /// A command needs a companion flag that was not supplied
    ///
    /// The string is the long flag name, e.g. `--script-name`.
    #[error("no {0} specified")]
    MissingRequiredArgument(&'static str),

    /// The host refused to register a callback during install
    ///
    /// Kinds installed before the failing one stay installed.
    #[error("could not install callback for {event}: {status}")]
    HostRegistrationFailure {
        /// Host-side symbolic name of the event kind
        event: String,
        /// Status reported by the host
        status: String,
    },

    /// Command-line arguments could not be parsed or named no action
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The script executor failed to run a script
    #[error("script execution failed: {0}")]
    ExecutionFailed(String),

    /// A file name query name is not recognised
    #[error("unknown name type \"{0}\"")]
    UnknownFilenameQuery(String),

    /// The host has no file name for the requested query
    #[error("host has no file name for {0}")]
    FilenameUnavailable(String),

    /// Registry storage error
    ///
    /// Raised when a registry or installation lock is poisoned.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Invalid plugin configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// YAML (de)serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for scene hook operations
pub type Result<T> = std::result::Result<T, SceneHookError>;
