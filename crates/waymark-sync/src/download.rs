//! Host download collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use waymark_core::FileHandle;

use crate::error::Result;

/// Fully determines a single remote-to-local file transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOptions {
    /// Remote directory.
    pub remote_dir: String,
    /// Remote file name.
    pub file_name: String,
    /// Local directory.
    pub local_dir: String,
    /// Local file name.
    pub target_name: String,
}

/// Host download-manager collaborator.
///
/// A download settles exactly once: a handle to the local file on success, an
/// error on failure. No retries, no partial-state tracking.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Transfer one remote file into host storage.
    async fn download(&self, options: &DownloadOptions) -> Result<FileHandle>;
}
