//! Marker presentation styles for POI features.

use serde::{Deserialize, Serialize};

use waymark_core::PluginConfig;

/// Which of a layer's style slots a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSlot {
    /// Rendering of unselected features.
    Default,
    /// Rendering of the selected feature.
    Select,
}

/// Visual style of a POI marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub graphic_width: u32,
    pub graphic_height: u32,
    /// Path of the marker graphic within the host shell.
    pub external_graphic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_opacity: Option<f32>,
}

impl MarkerStyle {
    /// Style applied to unselected POI markers.
    pub fn poi_default(config: &PluginConfig) -> Self {
        Self {
            graphic_width: 35,
            graphic_height: 50,
            external_graphic: config.marker_graphic(),
            graphic_opacity: None,
        }
    }

    /// Style applied to the selected POI marker.
    pub fn poi_select(config: &PluginConfig) -> Self {
        Self {
            graphic_opacity: Some(0.9),
            ..Self::poi_default(config)
        }
    }
}
