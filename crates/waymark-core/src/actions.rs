//! Action model and dispatch registry.
//!
//! An action is a named intent with a loosely-typed parameter payload,
//! dispatched to every handler registered under its method name. Markers on
//! the map embed actions in their feature properties; selecting a marker
//! performs the embedded action.
//!
//! The registry is an explicitly constructed instance handed to consumers, so
//! tests can wire an isolated registry instead of sharing process-global
//! state.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// A named intent with handler-specific parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    /// Handler selector.
    pub method: String,
    /// Arbitrary handler-specific arguments.
    #[serde(default)]
    pub params: Value,
}

impl Action {
    /// Create a new action.
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Decode the open target declared by this action's parameters.
    pub fn open_target(&self) -> OpenTarget {
        OpenTarget::from_params(&self.params)
    }
}

/// What an "open" action asks the host to open.
///
/// The parameter payload carries a `type` discriminator; unrecognized or
/// half-formed payloads decode to [`OpenTarget::Unknown`] so the host never
/// sees a partial intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// Open a record editor.
    Editor {
        /// Editor group, defaulting to the private group when absent.
        group: Option<String>,
        /// Editor name.
        name: String,
    },
    /// Open a static card page.
    Card {
        group: Option<String>,
        editor: String,
        card: String,
    },
    /// Forward-compatibility fallback.
    Unknown {
        /// The declared `type`, or an empty string when it was missing.
        kind: String,
    },
}

impl OpenTarget {
    /// Decode an open target from an action's parameter payload.
    pub fn from_params(params: &Value) -> Self {
        let kind = params.get("type").and_then(Value::as_str).unwrap_or("");
        let field = |name: &str| {
            params
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        match kind {
            "editor" => match field("name") {
                Some(name) => OpenTarget::Editor {
                    group: field("group"),
                    name,
                },
                None => OpenTarget::Unknown {
                    kind: kind.to_string(),
                },
            },
            "card" => match (field("editor"), field("card")) {
                (Some(editor), Some(card)) => OpenTarget::Card {
                    group: field("group"),
                    editor,
                    card,
                },
                _ => OpenTarget::Unknown {
                    kind: kind.to_string(),
                },
            },
            other => OpenTarget::Unknown {
                kind: other.to_string(),
            },
        }
    }
}

/// Handler invoked with the full action on dispatch.
pub type ActionHandler = Arc<dyn Fn(&Action) + Send + Sync>;

/// Registry mapping action names to ordered handler lists.
///
/// Handlers run synchronously, in registration order, with no deduplication
/// and no unregister operation. A handler that panics is not isolated; the
/// panic escalates to the dispatching context.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: RwLock<HashMap<String, Vec<ActionHandler>>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an action name.
    ///
    /// Registering the same handler twice invokes it twice.
    pub fn register<F>(&self, action: impl Into<String>, handler: F)
    where
        F: Fn(&Action) + Send + Sync + 'static,
    {
        self.handlers
            .write()
            .entry(action.into())
            .or_default()
            .push(Arc::new(handler));
    }

    /// Invoke every handler registered for the action's method.
    ///
    /// Returns `false` (after logging) when no handler is registered. The
    /// handler list is snapshotted when dispatch begins; there is no
    /// cancellation once it has started.
    pub fn perform(&self, action: &Action) -> bool {
        let handlers = match self.handlers.read().get(&action.method) {
            Some(handlers) => handlers.clone(),
            None => {
                warn!(method = %action.method, "no action registered");
                return false;
            }
        };

        for handler in &handlers {
            handler(action);
        }
        true
    }

    /// Number of handlers registered for an action name.
    pub fn handler_count(&self, action: &str) -> usize {
        self.handlers.read().get(action).map_or(0, Vec::len)
    }
}
