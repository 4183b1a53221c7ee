//! Host map widget collaborator.
//!
//! The map widget owns the layer collection, feature selection, and the
//! layers control the user toggles overlays with. Everything this system
//! needs from it is expressed here as traits the host shell implements.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::Result;
use crate::style::{MarkerStyle, StyleSlot};

/// Bounding box of a layer's features, in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Identifies a layer and where its backing GeoJSON is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerMetadata {
    /// Layer id, unique within the map's layer collection.
    pub id: String,
    pub options: LayerOptions,
}

/// Options attached to a layer entry in the layers control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerOptions {
    /// Host file URL of the backing GeoJSON document.
    pub file_url: String,
}

/// A feature-selection event delivered by the map widget.
pub struct FeatureEvent {
    /// Layer the feature belongs to.
    pub layer_id: String,
    /// The feature's GeoJSON properties.
    pub properties: Value,
}

/// Callbacks invoked when features are selected or unselected.
pub struct FeatureHooks {
    pub on_select: Box<dyn Fn(&FeatureEvent) + Send + Sync>,
    pub on_unselect: Box<dyn Fn(&FeatureEvent) + Send + Sync>,
}

/// A layer living in the host map's layer collection.
pub trait LayerHandle: Send + Sync {
    /// Layer id within the map's layer collection.
    fn id(&self) -> &str;

    /// Show or hide the layer.
    fn set_visible(&self, visible: bool);

    /// Bounding box of the layer's features, if it has any.
    fn data_extent(&self) -> Option<Extent>;
}

/// Host map widget collaborator.
pub trait MapSurface: Send + Sync {
    /// Look up a layer by id.
    fn layer(&self, id: &str) -> Option<Arc<dyn LayerHandle>>;

    /// Build a vector layer from a GeoJSON document.
    fn add_geojson_layer(&self, id: &str, document: &Value) -> Result<Arc<dyn LayerHandle>>;

    /// Apply a marker style to one of the layer's style slots.
    fn set_layer_style(&self, layer: &dyn LayerHandle, style: &MarkerStyle, slot: StyleSlot);

    /// Subscribe to feature selection on the layer.
    fn register_feature_events(&self, layer: &dyn LayerHandle, hooks: FeatureHooks);

    /// Add a selectable (not yet displayed) entry to the layers control.
    fn add_layer_option(&self, id: &str, name: &str, kind: &str, options: LayerOptions);

    /// Fit the viewport to an extent.
    fn zoom_to_extent(&self, extent: &Extent);
}

/// Observer for the map's layers control.
///
/// The host shell invokes these when the user toggles or taps an overlay
/// entry; this replaces the DOM event subscription of the original plugin.
#[async_trait]
pub trait LayersControlObserver: Send + Sync {
    async fn layer_enabled(&self, metadata: &LayerMetadata);
    async fn layer_disabled(&self, metadata: &LayerMetadata);
    async fn layer_clicked(&self, metadata: &LayerMetadata);
}
