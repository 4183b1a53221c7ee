//! Static card display for Waymark.
//!
//! Cards are read-only HTML fragments shown for a POI instead of an editor.
//! The presenter fetches the fragment named in the page URL and swaps it into
//! the host's content region, falling back to a well-known error card when
//! the fetch fails.

pub mod error;
pub mod presenter;
pub mod source;

pub use error::{Error, Result};
pub use presenter::{CardPresenter, CardView};
pub use source::{CardSource, HttpCardSource};
