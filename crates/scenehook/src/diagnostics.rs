//! User-facing diagnostics
//!
//! Messages meant for the person driving the host (unknown event, script not
//! attached, callbacks installed) go through a [`DiagnosticSink`]. Hosts route
//! them to their own message surface; [`TracingSink`] routes them to `tracing`.
//!
//! [`Diagnostics`] wraps a sink with the per-invocation debug switch and the
//! error/warning counters the command surface resets on every call.

use std::sync::{
    atomic::{AtomicBool, AtomicU32, Ordering},
    Arc, Mutex,
};

use tracing::{debug, error, info, warn};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Verbose output, suppressed unless debug mode is on
    Debug,
    /// Something unexpected that did not fail the operation
    Warning,
    /// The operation failed
    Error,
    /// Informational status
    Status,
}

/// Destination for diagnostic messages
pub trait DiagnosticSink: Send + Sync {
    /// Deliver one message
    fn emit(&self, severity: Severity, message: &str);
}

/// Sink that forwards messages to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => debug!(target: "scenehook", "{}", message),
            Severity::Warning => warn!(target: "scenehook", "{}", message),
            Severity::Error => error!(target: "scenehook", "{}", message),
            Severity::Status => info!(target: "scenehook", "{}", message),
        }
    }
}

/// Sink that keeps every message in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured messages
    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Captured messages of one severity
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, severity: Severity, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((severity, message.to_string()));
        }
    }
}

/// Diagnostic reporter with debug switch and counters
pub struct Diagnostics {
    sink: Arc<dyn DiagnosticSink>,
    debug: AtomicBool,
    errors: AtomicU32,
    warnings: AtomicU32,
}

impl Diagnostics {
    /// Create a reporter writing to `sink`
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            sink,
            debug: AtomicBool::new(false),
            errors: AtomicU32::new(0),
            warnings: AtomicU32::new(0),
        }
    }

    /// Reporter writing to [`TracingSink`]
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    /// Zero the counters and turn debug output off
    pub fn reset(&self) {
        self.errors.store(0, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
        self.debug.store(false, Ordering::Relaxed);
    }

    /// Switch debug output, returning the previous setting
    pub fn set_debug(&self, on: bool) -> bool {
        self.debug.swap(on, Ordering::Relaxed)
    }

    /// Whether debug output is on
    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Errors reported since the last reset
    pub fn error_count(&self) -> u32 {
        self.errors.load(Ordering::Relaxed)
    }

    /// Warnings reported since the last reset
    pub fn warning_count(&self) -> u32 {
        self.warnings.load(Ordering::Relaxed)
    }

    /// Report a debug message
    pub fn debug(&self, message: impl AsRef<str>) {
        if self.is_debug() {
            self.sink.emit(Severity::Debug, message.as_ref());
        }
    }

    /// Report a warning
    pub fn warn(&self, message: impl AsRef<str>) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
        self.sink.emit(Severity::Warning, message.as_ref());
    }

    /// Report an error
    pub fn error(&self, message: impl AsRef<str>) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        self.sink.emit(Severity::Error, message.as_ref());
    }

    /// Report a status line
    pub fn status(&self, message: impl AsRef<str>) {
        self.sink.emit(Severity::Status, message.as_ref());
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::tracing()
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("debug", &self.is_debug())
            .field("errors", &self.error_count())
            .field("warnings", &self.warning_count())
            .finish()
    }
}
