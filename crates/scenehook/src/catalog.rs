//! Event catalog
//!
//! The fixed table of scene events a host can signal. The table is built at
//! compile time and never changes; lookups return references into it.
//!
//! Checked events can veto the host operation in progress. Their scripts are
//! evaluated for a truth value instead of being run for side effects only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of the event catalog
#[derive(Debug, PartialEq, Eq)]
pub struct EventKind {
    /// Symbolic identifier
    pub id: EventId,

    /// Label used on the command surface (e.g. `AfterSave`)
    pub label: &'static str,

    /// When the host fires this event
    pub description: &'static str,

    /// Whether the scripts of this event can veto the host operation
    pub checked: bool,
}

impl EventKind {
    /// Host-side symbolic name, e.g. `kAfterSave`
    pub fn host_name(&self) -> String {
        format!("k{}", self.label)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

macro_rules! scene_events {
    ($( $checked:literal $id:ident => $desc:literal ),+ $(,)?) => {
        /// Symbolic identifier of a catalog event
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum EventId {
            $(
                #[doc = $desc]
                $id,
            )+
        }

        static CATALOG: &[EventKind] = &[
            $(
                EventKind {
                    id: EventId::$id,
                    label: stringify!($id),
                    description: $desc,
                    checked: $checked,
                },
            )+
        ];
    };
}

scene_events! {
    false SceneUpdate => "called after any operation that changes which files are loaded",
    false BeforeNew => "called before a File > New operation",
    false AfterNew => "called after a File > New operation",
    false BeforeImport => "called before a File > Import operation",
    false AfterImport => "called after a File > Import operation",
    false BeforeOpen => "called before a File > Open operation",
    false AfterOpen => "called after a File > Open operation",
    false BeforeExport => "called before a File > Export operation",
    false AfterExport => "called after a File > Export operation",
    false BeforeSave => "called before a File > Save (or SaveAs) operation",
    false AfterSave => "called after a File > Save (or SaveAs) operation",
    false BeforeReference => "called before a File > Reference operation",
    false AfterReference => "called after a File > Reference operation",
    false BeforeRemoveReference => "called before a File > RemoveReference operation",
    false AfterRemoveReference => "called after a File > RemoveReference operation",
    false BeforeImportReference => "called before a File > ImportReference operation",
    false AfterImportReference => "called after a File > ImportReference operation",
    false BeforeExportReference => "called before a File > ExportReference operation",
    false AfterExportReference => "called after a File > ExportReference operation",
    false BeforeUnloadReference => "called before a File > UnloadReference operation",
    false AfterUnloadReference => "called after a File > UnloadReference operation",
    false BeforeSoftwareRender => "called before a Software Render begins",
    false AfterSoftwareRender => "called after a Software Render ends",
    false BeforeSoftwareFrameRender => "called before each frame of a Software Render",
    false AfterSoftwareFrameRender => "called after each frame of a Software Render",
    false SoftwareRenderInterrupted => "called when an interactive render is interrupted by the user",
    false Initialized => "called on interactive or batch startup after initialization",
    false Exiting => "called just before the host exits",
    true BeforeNewCheck => "called prior to File > New operation, allows user to cancel action",
    true BeforeOpenCheck => "called prior to File > Open operation, allows user to cancel action",
    true BeforeSaveCheck => "called prior to File > Save operation, allows user to cancel action",
}

/// Read-only access to the event catalog
pub struct EventCatalog;

impl EventCatalog {
    /// Find the catalog entry for an identifier
    pub fn lookup_by_identifier(id: EventId) -> Option<&'static EventKind> {
        CATALOG.iter().find(|kind| kind.id == id)
    }

    /// Find the catalog entry whose label matches, ignoring ASCII case
    pub fn lookup_by_label(label: &str) -> Option<&'static EventKind> {
        CATALOG
            .iter()
            .find(|kind| kind.label.eq_ignore_ascii_case(label))
    }

    /// All kinds in declaration order
    pub fn all_kinds() -> &'static [EventKind] {
        CATALOG
    }

    /// Labels of all kinds in declaration order
    pub fn labels() -> Vec<String> {
        CATALOG.iter().map(|kind| kind.label.to_string()).collect()
    }
}
