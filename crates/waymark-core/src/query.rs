//! Page-URL query-string parsing.
//!
//! Card pages receive their group/editor/card selection through the page URL.
//! Values are kept literal: no percent-decoding, no type coercion.

use std::collections::HashMap;

/// Extract the key/value pairs from a URL's query component.
///
/// Splits the portion after the first `?` on `&`, then each segment on its
/// first `=`. A URL without a query component yields an empty map; a trailing
/// bare key (no `=value`) is dropped.
pub fn parse_query(url: &str) -> HashMap<String, String> {
    let Some((_, query)) = url.split_once('?') else {
        return HashMap::new();
    };

    query
        .split('&')
        .filter_map(|segment| segment.split_once('='))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
