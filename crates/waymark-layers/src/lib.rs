//! POI map layers for Waymark.
//!
//! A POI layer is a map overlay built from a GeoJSON FeatureCollection stored
//! in host files. This crate defines the map collaborator traits, the
//! FeatureCollection validity checks, the marker styles, and the layer
//! manager that moves layers between absent and present.

pub mod error;
pub mod geojson;
pub mod manager;
pub mod map;
pub mod style;

pub use error::{Error, Result};
pub use geojson::{document_id, document_name, is_feature_collection};
pub use manager::{Pager, PoiLayerManager};
pub use map::{
    Extent, FeatureEvent, FeatureHooks, LayerHandle, LayerMetadata, LayerOptions,
    LayersControlObserver, MapSurface,
};
pub use style::{MarkerStyle, StyleSlot};
