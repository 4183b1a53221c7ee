//! GeoJSON document checks.

use serde_json::Value;

/// Check whether a document is a GeoJSON FeatureCollection.
///
/// The top-level `type` must equal `"FeatureCollection"` and `features` must
/// be an array. Anything else is rejected before it reaches the map.
pub fn is_feature_collection(document: &Value) -> bool {
    document.get("type").and_then(Value::as_str) == Some("FeatureCollection")
        && document.get("features").is_some_and(Value::is_array)
}

/// Layer id declared in the document's top-level properties.
pub fn document_id(document: &Value) -> Option<&str> {
    document.get("properties")?.get("id")?.as_str()
}

/// Display name declared in the document's top-level properties.
pub fn document_name(document: &Value) -> Option<&str> {
    document.get("properties")?.get("name")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_collection_passes() {
        assert!(is_feature_collection(&json!({
            "type": "FeatureCollection",
            "features": [],
        })));
    }

    #[test]
    fn test_single_feature_fails() {
        assert!(!is_feature_collection(&json!({"type": "Feature"})));
    }

    #[test]
    fn test_features_must_be_an_array() {
        assert!(!is_feature_collection(&json!({
            "type": "FeatureCollection",
            "features": "nope",
        })));
        assert!(!is_feature_collection(&json!({"type": "FeatureCollection"})));
    }

    #[test]
    fn test_document_properties() {
        let document = json!({
            "type": "FeatureCollection",
            "features": [],
            "properties": {"id": "L1", "name": "Trees"},
        });
        assert_eq!(document_id(&document), Some("L1"));
        assert_eq!(document_name(&document), Some("Trees"));
        assert_eq!(document_id(&json!({})), None);
    }
}
