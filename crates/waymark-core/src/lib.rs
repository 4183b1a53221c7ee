//! Core traits and types for Waymark.
//!
//! This crate defines the foundational abstractions used across the project:
//! the action model and its dispatch registry, the host file-store collaborator
//! and the async file-to-JSON pipeline, the records-framework collaborator, the
//! page-URL query parser, and the plugin configuration.

pub mod actions;
pub mod config;
pub mod error;
pub mod files;
pub mod query;
pub mod records;

pub use actions::{Action, ActionRegistry, OpenTarget};
pub use config::PluginConfig;
pub use error::{Error, Result};
pub use files::{fetch_file_as_json, fetch_handle_as_json, FileHandle, FileStore};
pub use query::parse_query;
pub use records::{EditorGroup, RecordsShell};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-exports commonly used types.
pub mod prelude {
    pub use crate::actions::{Action, ActionRegistry, OpenTarget};
    pub use crate::config::PluginConfig;
    pub use crate::error::{Error, Result};
    pub use crate::files::{fetch_file_as_json, FileHandle, FileStore};
    pub use crate::query::parse_query;
    pub use crate::records::{EditorGroup, RecordsShell};
}
