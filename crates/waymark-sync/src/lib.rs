//! POI data synchronization for Waymark.
//!
//! When the records framework saves an editor's markup, this crate scans it
//! for POI data-file references, downloads each referenced GeoJSON document
//! into host storage, and registers it as a selectable layer option. Each
//! reference is processed independently; one failure never affects the rest.

pub mod download;
pub mod error;
pub mod extract;

pub use download::{DownloadOptions, Downloader};
pub use error::{Error, Result};
pub use extract::PoiExtractor;
