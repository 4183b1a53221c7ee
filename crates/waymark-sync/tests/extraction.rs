//! Editor-extraction flow over stub host collaborators.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use waymark_core::{EditorGroup, FileHandle, FileStore, PluginConfig, RecordsShell};
use waymark_layers::{
    Extent, FeatureHooks, LayerHandle, LayerOptions, MapSurface, MarkerStyle, StyleSlot,
};
use waymark_sync::{DownloadOptions, Downloader, Error, PoiExtractor};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .try_init();
}

/// Serves canned documents; download fails for names not present.
struct StubDownloader {
    remote: HashMap<String, String>,
    requests: Mutex<Vec<DownloadOptions>>,
}

#[async_trait]
impl Downloader for StubDownloader {
    async fn download(&self, options: &DownloadOptions) -> waymark_sync::Result<FileHandle> {
        self.requests.lock().push(options.clone());
        if self.remote.contains_key(&options.file_name) {
            Ok(FileHandle::new(format!(
                "file://{}/{}",
                options.local_dir, options.target_name
            )))
        } else {
            Err(Error::Download(format!("no such file: {}", options.file_name)))
        }
    }
}

/// Reads back what the downloader "wrote", keyed by file name.
struct StubFiles {
    remote: HashMap<String, String>,
}

#[async_trait]
impl FileStore for StubFiles {
    async fn resolve_url(&self, file_url: &str) -> waymark_core::Result<FileHandle> {
        Ok(FileHandle::new(file_url))
    }

    async fn read_text(&self, handle: &FileHandle) -> waymark_core::Result<String> {
        let name = handle.url().rsplit('/').next().unwrap_or_default();
        self.remote
            .get(name)
            .cloned()
            .ok_or_else(|| waymark_core::Error::NotFound(handle.url().to_string()))
    }

    fn file_path(&self, dir: &str) -> String {
        format!("/storage/{dir}")
    }
}

struct StubRecords;

impl RecordsShell for StubRecords {
    fn annotate(&self, _group: &EditorGroup, _editor_name: &str) {}

    fn editors_dir(&self, group: &EditorGroup) -> String {
        format!("editors/{group}")
    }
}

#[derive(Default)]
struct StubMap {
    options: Mutex<Vec<(String, String, String, LayerOptions)>>,
}

impl MapSurface for StubMap {
    fn layer(&self, _id: &str) -> Option<Arc<dyn LayerHandle>> {
        None
    }

    fn add_geojson_layer(
        &self,
        _id: &str,
        _document: &Value,
    ) -> waymark_layers::Result<Arc<dyn LayerHandle>> {
        Err(waymark_layers::Error::Map("not used here".to_string()))
    }

    fn set_layer_style(&self, _layer: &dyn LayerHandle, _style: &MarkerStyle, _slot: StyleSlot) {}

    fn register_feature_events(&self, _layer: &dyn LayerHandle, _hooks: FeatureHooks) {}

    fn add_layer_option(&self, id: &str, name: &str, kind: &str, options: LayerOptions) {
        self.options
            .lock()
            .push((id.to_string(), name.to_string(), kind.to_string(), options));
    }

    fn zoom_to_extent(&self, _extent: &Extent) {}
}

fn trees_json() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [],
        "properties": {"id": "trees", "name": "Trees"},
    })
    .to_string()
}

struct Harness {
    downloads: Arc<StubDownloader>,
    map: Arc<StubMap>,
    extractor: PoiExtractor,
}

fn harness(remote: Vec<(&str, String)>) -> Harness {
    init_tracing();
    let remote: HashMap<String, String> = remote
        .into_iter()
        .map(|(name, contents)| (name.to_string(), contents))
        .collect();

    let downloads = Arc::new(StubDownloader {
        remote: remote.clone(),
        requests: Mutex::new(Vec::new()),
    });
    let map = Arc::new(StubMap::default());

    let extractor = PoiExtractor::new(
        Arc::clone(&downloads) as Arc<dyn Downloader>,
        Arc::new(StubFiles { remote }),
        Arc::new(StubRecords),
        Arc::clone(&map) as Arc<dyn MapSurface>,
        PluginConfig::default(),
    );

    Harness {
        downloads,
        map,
        extractor,
    }
}

const MARKUP: &str = r#"
<form>
  <div data-waymark-type="poi">
    <div data-poi-file="trees.json"></div>
    <div data-poi-file="benches.json"></div>
  </div>
</form>
"#;

#[tokio::test]
async fn registers_each_declared_reference() {
    let benches = json!({
        "type": "FeatureCollection",
        "features": [],
        "properties": {"id": "benches", "name": "Benches"},
    })
    .to_string();
    let h = harness(vec![("trees.json", trees_json()), ("benches.json", benches)]);

    let registered = h
        .extractor
        .process_editor("park-survey", MARKUP, &EditorGroup::Private, true)
        .await;

    assert_eq!(registered, 2);

    let options = h.map.options.lock();
    let ids: Vec<&str> = options.iter().map(|(id, _, _, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["trees", "benches"]);
    assert!(options.iter().all(|(_, _, kind, _)| kind == "poi"));
    assert!(options[0].3.file_url.ends_with("trees.json"));
}

#[tokio::test]
async fn download_options_name_the_remote_features_dir() {
    let h = harness(vec![("trees.json", trees_json())]);

    let markup = r#"<div data-waymark-type="poi"><span data-poi-file="trees.json"></span></div>"#;
    h.extractor
        .process_editor("park-survey", markup, &EditorGroup::Public, true)
        .await;

    let requests = h.downloads.requests.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].remote_dir, "features");
    assert_eq!(requests[0].local_dir, "editors/public");
    assert_eq!(requests[0].file_name, "trees.json");
    assert_eq!(requests[0].target_name, "trees.json");
}

#[tokio::test]
async fn a_failing_download_does_not_affect_the_others() {
    // benches.json is missing remotely
    let h = harness(vec![("trees.json", trees_json())]);

    let registered = h
        .extractor
        .process_editor("park-survey", MARKUP, &EditorGroup::Private, true)
        .await;

    assert_eq!(registered, 1);
    let options = h.map.options.lock();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].0, "trees");
}

#[tokio::test]
async fn a_non_feature_collection_is_not_registered() {
    let h = harness(vec![(
        "trees.json",
        json!({"type": "Feature"}).to_string(),
    )]);

    let markup = r#"<div data-waymark-type="poi"><span data-poi-file="trees.json"></span></div>"#;
    let registered = h
        .extractor
        .process_editor("park-survey", markup, &EditorGroup::Private, true)
        .await;

    assert_eq!(registered, 0);
    assert!(h.map.options.lock().is_empty());
}

#[tokio::test]
async fn markup_without_a_poi_widget_downloads_nothing() {
    let h = harness(vec![("trees.json", trees_json())]);

    let registered = h
        .extractor
        .process_editor(
            "park-survey",
            r#"<form><input data-poi-file="trees.json"></form>"#,
            &EditorGroup::Private,
            true,
        )
        .await;

    assert_eq!(registered, 0);
    assert!(h.downloads.requests.lock().is_empty());
}
