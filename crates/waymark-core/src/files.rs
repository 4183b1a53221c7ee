//! Host file store collaborator and the file-to-JSON pipeline.
//!
//! POI documents live in host storage and are referenced by file URL. The
//! pipeline resolves a URL to a handle, reads the handle's text, and parses it
//! as JSON; a failure at any stage short-circuits the rest. One attempt per
//! call, no retries. Concurrent calls are independent.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::error::Result;

/// Opaque reference to a file in host storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    url: String,
}

impl FileHandle {
    /// Create a handle from its host file URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The host file URL this handle resolves back to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Host file-system collaborator.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Resolve a file URL to a handle.
    async fn resolve_url(&self, file_url: &str) -> Result<FileHandle>;

    /// Read a handle's contents as text.
    async fn read_text(&self, handle: &FileHandle) -> Result<String>;

    /// Absolute path of a host storage directory.
    fn file_path(&self, dir: &str) -> String;
}

/// Fetch the contents of a file URL as JSON.
///
/// A resolution failure is logged and propagated. (The plugin this replaces
/// logged it without ever settling the caller's promise, leaving callers
/// hanging on that path.)
pub async fn fetch_file_as_json(store: &dyn FileStore, file_url: &str) -> Result<Value> {
    let handle = store
        .resolve_url(file_url)
        .await
        .inspect_err(|err| error!(%file_url, %err, "failed to resolve file URL"))?;

    fetch_handle_as_json(store, &handle).await
}

/// Fetch the contents of a file handle as JSON.
pub async fn fetch_handle_as_json(store: &dyn FileStore, handle: &FileHandle) -> Result<Value> {
    let text = store.read_text(handle).await?;
    Ok(serde_json::from_str(&text)?)
}
