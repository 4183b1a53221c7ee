//! Records-framework collaborator.
//!
//! The host records framework owns editors and their storage directories;
//! this system only asks it to open an editor or tell it where an editor
//! group keeps its files.

use serde::{Deserialize, Serialize};

/// Editor group within the records framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorGroup {
    /// The user's private editors. Default when an action omits the group.
    Private,
    /// Editors shared with the whole project.
    Public,
    /// A host-defined group.
    Custom(String),
}

impl EditorGroup {
    /// Group name as the records framework knows it.
    pub fn as_str(&self) -> &str {
        match self {
            EditorGroup::Private => "private",
            EditorGroup::Public => "public",
            EditorGroup::Custom(name) => name,
        }
    }

    /// Parse a group name coming from action parameters or page URLs.
    pub fn from_name(name: &str) -> Self {
        match name {
            "private" => EditorGroup::Private,
            "public" => EditorGroup::Public,
            other => EditorGroup::Custom(other.to_string()),
        }
    }
}

impl Default for EditorGroup {
    fn default() -> Self {
        EditorGroup::Private
    }
}

impl std::fmt::Display for EditorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host records-framework collaborator.
pub trait RecordsShell: Send + Sync {
    /// Open the named editor for annotation.
    fn annotate(&self, group: &EditorGroup, editor_name: &str);

    /// Storage directory for an editor group's files.
    fn editors_dir(&self, group: &EditorGroup) -> String;
}
