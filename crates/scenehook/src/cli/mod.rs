//! Command surface for the scene hook registry
//!
//! The host registers a single command. Each invocation parses its flags with
//! [`SceneHookArgs`], selects one [`SceneCommand`] and runs it against the
//! shared [`ScriptRegistry`].

pub mod commands;
pub mod formatter;

pub use commands::{
    add_script, list_all_scripts, list_events, list_scripts, remove_script, SceneCommand,
    SceneHookArgs,
};
pub use formatter::{
    format_event_script_record, format_event_script_records, format_script_record,
    format_script_records,
};

use std::{ffi::OsString, fmt, sync::Arc};

use clap::{error::ErrorKind, Parser};
use tracing::debug;

use crate::{
    catalog::EventCatalog,
    diagnostics::Diagnostics,
    error::{Result, SceneHookError},
    files::{compare_files, FilenameQuery},
    lifecycle::SceneHost,
    registry::ScriptRegistry,
    types::ScriptEntry,
};

/// Result handed back to the host by one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// One string per record
    Lines(Vec<String>),
    /// A single string
    Text(String),
    /// A boolean answer
    Flag(bool),
    /// No result
    Empty,
}

impl CommandOutput {
    /// Render for display, one record per line
    pub fn render(&self) -> String {
        match self {
            CommandOutput::Lines(lines) => lines.join("\n"),
            CommandOutput::Text(text) => text.clone(),
            CommandOutput::Flag(flag) => flag.to_string(),
            CommandOutput::Empty => String::new(),
        }
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Scene hook command interface
#[derive(Clone)]
pub struct SceneHookCli {
    registry: ScriptRegistry,
    diagnostics: Arc<Diagnostics>,
    host: Option<Arc<dyn SceneHost>>,
}

impl SceneHookCli {
    /// Create a command interface over `registry`
    pub fn new(registry: ScriptRegistry) -> Self {
        let diagnostics = registry.diagnostics().clone();
        Self {
            registry,
            diagnostics,
            host: None,
        }
    }

    /// Answer `--get-filename` from `host`
    pub fn with_host(mut self, host: Arc<dyn SceneHost>) -> Self {
        self.host = Some(host);
        self
    }

    /// Registry the commands operate on
    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    /// Parse and run one invocation
    ///
    /// Diagnostic counters are reset first and debug mode follows `--debug`.
    /// Failures are reported at error severity before being returned.
    pub fn execute_args<I, T>(&self, args: I) -> Result<CommandOutput>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.diagnostics.reset();

        let args = match SceneHookArgs::try_parse_from(args) {
            Ok(args) => args,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                return Ok(CommandOutput::Text(e.to_string()));
            }
            Err(e) => {
                let message = e.kind().as_str().unwrap_or("no or unknown arguments");
                let err = SceneHookError::InvalidArguments(message.to_string());
                self.report(&err);
                return Err(err);
            }
        };

        self.diagnostics.set_debug(args.debug);
        debug!(?args, "Parsed scene hook arguments");

        let result = args.command().and_then(|command| self.execute(command));
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    /// Run a command that has already been selected
    pub fn execute(&self, command: SceneCommand) -> Result<CommandOutput> {
        match command {
            SceneCommand::ListEvents => Ok(CommandOutput::Lines(EventCatalog::labels())),
            SceneCommand::ListAllScripts => {
                let scripts = self.registry.list_all()?;
                Ok(CommandOutput::Lines(format_event_script_records(&scripts)))
            }
            SceneCommand::ListScripts { event } => {
                let scripts = self.registry.list(&event)?;
                Ok(CommandOutput::Lines(format_script_records(&scripts)))
            }
            SceneCommand::AddScript {
                event,
                name,
                body,
                display_enabled,
                undo_enabled,
            } => {
                let entry = ScriptEntry::new(name, body)
                    .with_display(display_enabled)
                    .with_undo(undo_enabled);
                self.registry.add(&event, entry)?;
                Ok(CommandOutput::Empty)
            }
            SceneCommand::RemoveScript { event, name } => {
                self.registry.remove(&event, &name)?;
                Ok(CommandOutput::Empty)
            }
            SceneCommand::GetFilename { query } => self.pending_filename(&query),
            SceneCommand::CompareFiles { first, second } => {
                Ok(CommandOutput::Flag(compare_files(&first, &second)))
            }
        }
    }

    fn pending_filename(&self, query: &str) -> Result<CommandOutput> {
        let query = match query.parse::<FilenameQuery>() {
            Ok(query) => query,
            Err(err) => {
                self.diagnostics.status("known name types are:");
                for known in FilenameQuery::ALL {
                    self.diagnostics.status(format!("  {}", known));
                }
                return Err(err);
            }
        };

        self.host
            .as_ref()
            .and_then(|host| host.pending_filename(query))
            .map(CommandOutput::Text)
            .ok_or_else(|| SceneHookError::FilenameUnavailable(query.to_string()))
    }

    fn report(&self, err: &SceneHookError) {
        // The registry reports unknown labels itself.
        if !matches!(err, SceneHookError::UnknownEvent(_)) {
            self.diagnostics.error(err.to_string());
        }
    }
}

impl fmt::Debug for SceneHookCli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneHookCli")
            .field("registry", &self.registry)
            .field("has_host", &self.host.is_some())
            .finish()
    }
}
