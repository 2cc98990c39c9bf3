//! Command-line flags and the commands they select

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, SceneHookError};

/// Flags accepted by the scene hook command
///
/// One invocation performs one action. Companion flags such as
/// `--script-name` only matter to the action that reads them.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "sceneHook")]
#[command(about = "Attach scripts to host scene events")]
#[command(no_binary_name = true)]
#[command(disable_version_flag = true)]
pub struct SceneHookArgs {
    /// Verbose diagnostics for this invocation
    #[arg(short, long)]
    pub debug: bool,

    /// List every event label
    #[arg(long)]
    pub list_events: bool,

    /// List the scripts of every event
    #[arg(long)]
    pub list_all_scripts: bool,

    /// List the scripts of one event
    #[arg(long, value_name = "EVENT")]
    pub list_scripts: Option<String>,

    /// Attach a script to an event
    #[arg(long, value_name = "EVENT")]
    pub add_event: Option<String>,

    /// Detach a script from an event
    #[arg(long, value_name = "EVENT")]
    pub del_event: Option<String>,

    /// Script name for --add-event and --del-event
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub script_name: Option<String>,

    /// Script body for --add-event
    #[arg(long, value_name = "BODY", allow_hyphen_values = true)]
    pub script: Option<String>,

    /// Show the script's output when it runs
    #[arg(long)]
    pub display_enabled: bool,

    /// Record the script's changes in the undo queue
    #[arg(long)]
    pub undo_enabled: bool,

    /// Ask the host for the file of a pending operation
    #[arg(long, value_name = "QUERY")]
    pub get_filename: Option<String>,

    /// Compare this file with --file2
    #[arg(long, value_name = "FILE")]
    pub compare_files: Option<PathBuf>,

    /// Second file for --compare-files
    #[arg(long, value_name = "FILE")]
    pub file2: Option<PathBuf>,
}

/// A single scene hook command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneCommand {
    /// List every event label
    ListEvents,

    /// List the scripts of every event
    ListAllScripts,

    /// List the scripts of one event
    ListScripts {
        /// Event label
        event: String,
    },

    /// Attach a script to an event
    AddScript {
        /// Event label
        event: String,

        /// Script name
        name: String,

        /// Script body
        body: String,

        /// Show execution output
        display_enabled: bool,

        /// Record execution in the undo queue
        undo_enabled: bool,
    },

    /// Detach a script from an event
    RemoveScript {
        /// Event label
        event: String,

        /// Script name
        name: String,
    },

    /// Ask the host for a pending file name
    GetFilename {
        /// Query name, e.g. `beforeSaveFilename`
        query: String,
    },

    /// Compare two files byte for byte
    CompareFiles {
        /// First file
        first: PathBuf,

        /// Second file
        second: PathBuf,
    },
}

impl SceneHookArgs {
    /// Pick the command these flags select
    ///
    /// Action flags are tried in a fixed order: list-events, list-all-scripts,
    /// get-filename, list-scripts, add-event, del-event, compare-files.
    pub fn command(&self) -> Result<SceneCommand> {
        if self.list_events {
            return Ok(SceneCommand::ListEvents);
        }
        if self.list_all_scripts {
            return Ok(SceneCommand::ListAllScripts);
        }
        if let Some(query) = &self.get_filename {
            return Ok(SceneCommand::GetFilename {
                query: query.clone(),
            });
        }
        if let Some(event) = &self.list_scripts {
            return Ok(SceneCommand::ListScripts {
                event: event.clone(),
            });
        }
        if let Some(event) = &self.add_event {
            let name = self
                .script_name
                .clone()
                .ok_or(SceneHookError::MissingRequiredArgument("--script-name"))?;
            let body = self
                .script
                .clone()
                .ok_or(SceneHookError::MissingRequiredArgument("--script"))?;
            return Ok(SceneCommand::AddScript {
                event: event.clone(),
                name,
                body,
                display_enabled: self.display_enabled,
                undo_enabled: self.undo_enabled,
            });
        }
        if let Some(event) = &self.del_event {
            let name = self
                .script_name
                .clone()
                .ok_or(SceneHookError::MissingRequiredArgument("--script-name"))?;
            return Ok(SceneCommand::RemoveScript {
                event: event.clone(),
                name,
            });
        }
        if let Some(first) = &self.compare_files {
            let second = self
                .file2
                .clone()
                .ok_or(SceneHookError::MissingRequiredArgument("--file2"))?;
            return Ok(SceneCommand::CompareFiles {
                first: first.clone(),
                second,
            });
        }

        Err(SceneHookError::InvalidArguments(
            "no or unknown arguments".to_string(),
        ))
    }
}

/// List every event label
pub fn list_events() -> SceneCommand {
    SceneCommand::ListEvents
}

/// List the scripts of every event
pub fn list_all_scripts() -> SceneCommand {
    SceneCommand::ListAllScripts
}

/// List the scripts of one event
pub fn list_scripts(event: impl Into<String>) -> SceneCommand {
    SceneCommand::ListScripts {
        event: event.into(),
    }
}

/// Attach a script with display and undo disabled
pub fn add_script(
    event: impl Into<String>,
    name: impl Into<String>,
    body: impl Into<String>,
) -> SceneCommand {
    SceneCommand::AddScript {
        event: event.into(),
        name: name.into(),
        body: body.into(),
        display_enabled: false,
        undo_enabled: false,
    }
}

/// Detach a script
pub fn remove_script(event: impl Into<String>, name: impl Into<String>) -> SceneCommand {
    SceneCommand::RemoveScript {
        event: event.into(),
        name: name.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> SceneHookArgs {
        SceneHookArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_list_events_command() {
        let args = parse(&["--list-events"]);
        assert_eq!(args.command().unwrap(), SceneCommand::ListEvents);
    }

    #[test]
    fn test_add_event_command() {
        let args = parse(&[
            "--add-event",
            "AfterSave",
            "--script-name",
            "notify",
            "--script",
            "print('saved')",
            "--display-enabled",
        ]);

        match args.command().unwrap() {
            SceneCommand::AddScript {
                event,
                name,
                body,
                display_enabled,
                undo_enabled,
            } => {
                assert_eq!(event, "AfterSave");
                assert_eq!(name, "notify");
                assert_eq!(body, "print('saved')");
                assert!(display_enabled);
                assert!(!undo_enabled);
            }
            other => panic!("Expected AddScript command, got {:?}", other),
        }
    }

    #[test]
    fn test_add_event_requires_script_name() {
        let args = parse(&["--add-event", "AfterSave", "--script", "x"]);
        assert!(matches!(
            args.command(),
            Err(SceneHookError::MissingRequiredArgument("--script-name"))
        ));
    }

    #[test]
    fn test_add_event_requires_script() {
        let args = parse(&["--add-event", "AfterSave", "--script-name", "n"]);
        assert!(matches!(
            args.command(),
            Err(SceneHookError::MissingRequiredArgument("--script"))
        ));
    }

    #[test]
    fn test_del_event_reads_its_own_label() {
        let args = parse(&["--del-event", "BeforeOpen", "--script-name", "n"]);
        assert_eq!(args.command().unwrap(), remove_script("BeforeOpen", "n"));
    }

    #[test]
    fn test_compare_files_requires_file2() {
        let args = parse(&["--compare-files", "a.scene"]);
        assert!(matches!(
            args.command(),
            Err(SceneHookError::MissingRequiredArgument("--file2"))
        ));
    }

    #[test]
    fn test_action_precedence() {
        let args = parse(&["--list-scripts", "AfterSave", "--list-all-scripts"]);
        assert_eq!(args.command().unwrap(), SceneCommand::ListAllScripts);
    }

    #[test]
    fn test_no_action() {
        let args = parse(&["--debug"]);
        assert!(matches!(
            args.command(),
            Err(SceneHookError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_script_body_may_start_with_dash() {
        let args = parse(&["--add-event", "AfterSave", "--script-name", "n", "--script", "-1"]);
        assert_eq!(args.script.as_deref(), Some("-1"));
    }

    #[test]
    fn test_script_name_may_start_with_dash() {
        let args = parse(&["--del-event", "AfterSave", "--script-name", "-old"]);
        assert_eq!(args.command().unwrap(), remove_script("AfterSave", "-old"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(SceneHookArgs::try_parse_from(["--bogus"]).is_err());
    }

    #[test]
    fn test_helper_constructors() {
        assert_eq!(list_events(), SceneCommand::ListEvents);
        assert_eq!(list_all_scripts(), SceneCommand::ListAllScripts);
        assert_eq!(
            list_scripts("AfterSave"),
            SceneCommand::ListScripts {
                event: "AfterSave".to_string()
            }
        );
        match add_script("AfterSave", "n", "b") {
            SceneCommand::AddScript {
                display_enabled,
                undo_enabled,
                ..
            } => {
                assert!(!display_enabled);
                assert!(!undo_enabled);
            }
            other => panic!("Expected AddScript command, got {:?}", other),
        }
    }
}
