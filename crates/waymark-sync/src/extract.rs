//! Editor-markup POI extraction.
//!
//! The records framework invokes the extractor whenever an editor's markup is
//! saved. The markup declares POI data files through a poi-typed widget whose
//! elements carry a `data-poi-file` attribute; each declared file is
//! downloaded from the remote features directory and registered as a
//! selectable layer option, without being displayed.

use futures::future::join_all;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::{debug, error, info};

use waymark_core::{fetch_handle_as_json, EditorGroup, FileHandle, FileStore, PluginConfig, RecordsShell};
use waymark_layers::{document_id, document_name, is_feature_collection, LayerOptions, MapSurface};

use crate::download::{DownloadOptions, Downloader};
use crate::error::{Error, Result};

static POI_CONTAINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-waymark-type\s*=\s*["']poi["']"#).expect("static pattern"));
static POI_FILE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-poi-file\s*=\s*["']([^"']+)["']"#).expect("static pattern"));

/// Scans saved editor markup for POI file references and syncs them.
pub struct PoiExtractor {
    downloads: Arc<dyn Downloader>,
    files: Arc<dyn FileStore>,
    records: Arc<dyn RecordsShell>,
    map: Arc<dyn MapSurface>,
    config: PluginConfig,
}

impl PoiExtractor {
    pub fn new(
        downloads: Arc<dyn Downloader>,
        files: Arc<dyn FileStore>,
        records: Arc<dyn RecordsShell>,
        map: Arc<dyn MapSurface>,
        config: PluginConfig,
    ) -> Self {
        Self {
            downloads,
            files,
            records,
            map,
            config,
        }
    }

    /// Process a saved editor's markup.
    ///
    /// Implements the records framework's process-editor interface. Every
    /// declared reference is synced independently; failures are logged and
    /// skipped. Returns how many references were registered.
    pub async fn process_editor(
        &self,
        editor_name: &str,
        markup: &str,
        group: &EditorGroup,
        _online: bool,
    ) -> usize {
        let references = self.scan_markup(markup);
        if references.is_empty() {
            return 0;
        }

        debug!(%editor_name, count = references.len(), "editor declares POI files");

        let jobs = references
            .iter()
            .map(|poi_file| self.sync_reference(poi_file, group));
        let registered = join_all(jobs).await.into_iter().filter(|ok| *ok).count();

        info!(%editor_name, registered, "POI extraction finished");
        registered
    }

    /// POI file names declared by the markup.
    fn scan_markup(&self, markup: &str) -> Vec<String> {
        if !POI_CONTAINER.is_match(markup) {
            return Vec::new();
        }

        POI_FILE_ATTR
            .captures_iter(markup)
            .map(|capture| capture[1].to_string())
            .collect()
    }

    /// Download one reference and register it as a layer option.
    async fn sync_reference(&self, poi_file: &str, group: &EditorGroup) -> bool {
        let options = DownloadOptions {
            remote_dir: self.config.remote_features_dir.clone(),
            file_name: poi_file.to_string(),
            local_dir: self.records.editors_dir(group),
            target_name: poi_file.to_string(),
        };
        debug!(
            local_path = %format!("{}/{}", self.files.file_path(&options.local_dir), options.target_name),
            "downloading POI file"
        );

        let handle = match self.downloads.download(&options).await {
            Ok(handle) => handle,
            Err(err) => {
                error!(%poi_file, %err, "failed to download POI file");
                return false;
            }
        };

        match self.register_layer(&handle).await {
            Ok(()) => true,
            Err(err) => {
                error!(%poi_file, %err, "failed to register POI layer");
                false
            }
        }
    }

    /// Read a downloaded document and add it to the layers list.
    async fn register_layer(&self, handle: &FileHandle) -> Result<()> {
        let document = fetch_handle_as_json(self.files.as_ref(), handle).await?;

        if !is_feature_collection(&document) {
            return Err(Error::InvalidDocument(
                "document does not contain a FeatureCollection".to_string(),
            ));
        }
        let id = document_id(&document).ok_or_else(|| {
            Error::InvalidDocument("document declares no properties.id".to_string())
        })?;
        let name = document_name(&document).unwrap_or(id);

        self.map.add_layer_option(
            id,
            name,
            "poi",
            LayerOptions {
                file_url: handle.url().to_string(),
            },
        );
        Ok(())
    }
}
