//! POI layer manager.
//!
//! Per layer id the manager moves between two states: absent (no layer in the
//! map's collection) and present (layer built, styled, and wired). Showing an
//! absent layer fetches its backing GeoJSON through the core file pipeline;
//! showing a present layer only flips visibility. Fetch or validation
//! failures leave the layer absent; nothing schedules a retry.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

use waymark_core::{
    fetch_file_as_json, Action, ActionRegistry, EditorGroup, FileStore, OpenTarget, PluginConfig,
    RecordsShell,
};

use crate::error::{Error, Result};
use crate::geojson;
use crate::map::{FeatureEvent, FeatureHooks, LayerHandle, LayerMetadata, LayersControlObserver, MapSurface};
use crate::style::{MarkerStyle, StyleSlot};

/// Host page-navigation collaborator.
pub trait Pager: Send + Sync {
    /// Navigate the shell to a page URL.
    fn change_page(&self, url: &str);
}

/// Manages POI overlays on the host map.
pub struct PoiLayerManager {
    map: Arc<dyn MapSurface>,
    files: Arc<dyn FileStore>,
    registry: Arc<ActionRegistry>,
    config: PluginConfig,
}

impl PoiLayerManager {
    /// Create a manager and wire the marker actions into the registry.
    ///
    /// The `open` handler is registered once here, not on every layer add, so
    /// a marker tap dispatches the open logic exactly once however many
    /// layers are present.
    pub fn new(
        map: Arc<dyn MapSurface>,
        files: Arc<dyn FileStore>,
        records: Arc<dyn RecordsShell>,
        pager: Arc<dyn Pager>,
        registry: Arc<ActionRegistry>,
        config: PluginConfig,
    ) -> Self {
        registry.register("open", move |action| {
            route_open(records.as_ref(), pager.as_ref(), action);
        });

        Self {
            map,
            files,
            registry,
            config,
        }
    }

    /// Show a POI layer, adding it to the map if necessary.
    pub async fn show_layer(&self, metadata: &LayerMetadata) {
        if let Some(layer) = self.map.layer(&metadata.id) {
            layer.set_visible(true);
            return;
        }

        match fetch_file_as_json(self.files.as_ref(), &metadata.options.file_url).await {
            Ok(document) => {
                if let Err(err) = self.add_layer(&document) {
                    error!(layer = %metadata.id, %err, "failed to add POI layer");
                }
            }
            Err(err) => {
                error!(layer = %metadata.id, %err, "failed to fetch POI layer");
            }
        }
    }

    /// Hide a POI layer. The layer stays cached in the map.
    pub fn hide_layer(&self, metadata: &LayerMetadata) {
        match self.map.layer(&metadata.id) {
            Some(layer) => layer.set_visible(false),
            None => warn!(layer = %metadata.id, "no layer found to hide"),
        }
    }

    /// Fit the viewport to the extent of a layer's features.
    pub fn zoom_to_layer(&self, metadata: &LayerMetadata) {
        let Some(layer) = self.map.layer(&metadata.id) else {
            warn!(layer = %metadata.id, "no layer found to zoom to");
            return;
        };

        match layer.data_extent() {
            Some(extent) => self.map.zoom_to_extent(&extent),
            None => warn!(layer = %metadata.id, "layer has no data extent"),
        }
    }

    /// Build a map layer from a POI GeoJSON document.
    ///
    /// The document must be a FeatureCollection declaring its layer id in the
    /// top-level properties; otherwise no layer is added.
    pub fn add_layer(&self, document: &Value) -> Result<Arc<dyn LayerHandle>> {
        if !geojson::is_feature_collection(document) {
            return Err(Error::InvalidDocument(
                "document does not contain a FeatureCollection".to_string(),
            ));
        }

        let id = geojson::document_id(document).ok_or_else(|| {
            Error::InvalidDocument("document declares no properties.id".to_string())
        })?;

        let layer = self.map.add_geojson_layer(id, document)?;

        self.map.set_layer_style(
            layer.as_ref(),
            &MarkerStyle::poi_default(&self.config),
            StyleSlot::Default,
        );
        self.map.set_layer_style(
            layer.as_ref(),
            &MarkerStyle::poi_select(&self.config),
            StyleSlot::Select,
        );
        self.map
            .register_feature_events(layer.as_ref(), self.feature_hooks());

        layer.set_visible(true);
        Ok(layer)
    }

    /// Hooks dispatching a selected feature's embedded action.
    fn feature_hooks(&self) -> FeatureHooks {
        let registry = Arc::clone(&self.registry);

        FeatureHooks {
            on_select: Box::new(move |event: &FeatureEvent| {
                let Some(embedded) = event.properties.get("action") else {
                    warn!(layer = %event.layer_id, "selected feature has no embedded action");
                    return;
                };
                match serde_json::from_value::<Action>(embedded.clone()) {
                    Ok(action) => {
                        registry.perform(&action);
                    }
                    Err(err) => {
                        warn!(layer = %event.layer_id, %err, "feature embeds a malformed action");
                    }
                }
            }),
            on_unselect: Box::new(|_event| {}),
        }
    }
}

#[async_trait]
impl LayersControlObserver for PoiLayerManager {
    async fn layer_enabled(&self, metadata: &LayerMetadata) {
        self.show_layer(metadata).await;
    }

    async fn layer_disabled(&self, metadata: &LayerMetadata) {
        self.hide_layer(metadata);
    }

    async fn layer_clicked(&self, metadata: &LayerMetadata) {
        self.zoom_to_layer(metadata);
    }
}

/// Route an `open` action to the host surface it targets.
fn route_open(records: &dyn RecordsShell, pager: &dyn Pager, action: &Action) {
    match action.open_target() {
        OpenTarget::Editor { group, name } => {
            let group = group.map(|g| EditorGroup::from_name(&g)).unwrap_or_default();
            records.annotate(&group, &name);
        }
        OpenTarget::Card {
            group,
            editor,
            card,
        } => {
            let group = group.map(|g| EditorGroup::from_name(&g)).unwrap_or_default();
            let url = format!("view-card.html?group={group}&editor={editor}&card={card}");
            pager.change_page(&url);
        }
        OpenTarget::Unknown { kind } => {
            warn!(%kind, "don't know how to open");
        }
    }
}
