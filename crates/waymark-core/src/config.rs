//! Plugin configuration and defaults.

use serde::{Deserialize, Serialize};

/// Default values shared across the workspace.
pub mod defaults {
    /// Where the plugin's bundled assets are installed in the host shell.
    pub const ASSET_PATH: &str = "plugins/points-of-interest";
    /// Marker graphic, relative to the asset path.
    pub const MARKER_GRAPHIC: &str = "css/images/plain_marker@2x.png";
    /// Card rendered when the requested card cannot be fetched.
    pub const ERROR_CARD: &str = "not-found-card.html";
    /// Remote directory POI feature files are downloaded from.
    pub const REMOTE_FEATURES_DIR: &str = "features";
}

/// Runtime configuration for the POI overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Where the plugin's bundled assets are installed.
    pub asset_path: String,
    /// Fallback card document name.
    pub error_card: String,
    /// Remote directory POI feature files are downloaded from.
    pub remote_features_dir: String,
}

impl PluginConfig {
    /// Full path of the marker graphic used for POI features.
    pub fn marker_graphic(&self) -> String {
        format!("{}/{}", self.asset_path, defaults::MARKER_GRAPHIC)
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            asset_path: defaults::ASSET_PATH.to_string(),
            error_card: defaults::ERROR_CARD.to_string(),
            remote_features_dir: defaults::REMOTE_FEATURES_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_graphic_path() {
        let config = PluginConfig::default();
        assert_eq!(
            config.marker_graphic(),
            "plugins/points-of-interest/css/images/plain_marker@2x.png"
        );
    }
}
