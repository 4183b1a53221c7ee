//! Card presenter.
//!
//! Fetches the requested fragment and swaps it into the host's content
//! region. Failure falls back to the configured error card; if even that
//! cannot be fetched, the failure is only logged and the region is left
//! untouched. No raw error ever reaches the end user.

use std::sync::Arc;
use tracing::{error, warn};

use waymark_core::{parse_query, PluginConfig};

use crate::source::CardSource;

/// The host's fixed card content region.
pub trait CardView: Send + Sync {
    /// Replace the region's markup.
    fn render(&self, html: &str);
}

/// Displays cards in the host content region.
pub struct CardPresenter {
    source: Arc<dyn CardSource>,
    view: Arc<dyn CardView>,
    config: PluginConfig,
}

impl CardPresenter {
    pub fn new(source: Arc<dyn CardSource>, view: Arc<dyn CardView>, config: PluginConfig) -> Self {
        Self {
            source,
            view,
            config,
        }
    }

    /// Display the card requested in a page URL when the page is shown.
    ///
    /// The group/editor/card selection rides in the URL's query component.
    pub async fn page_shown(&self, page_url: &str) {
        let params = parse_query(page_url);
        let group = params.get("group").map(String::as_str).unwrap_or("");
        let editor = params.get("editor").map(String::as_str).unwrap_or("");

        match params.get("card") {
            Some(card) => self.display_card(group, editor, card).await,
            None => {
                warn!(%page_url, "page names no card");
                self.display_error_card().await;
            }
        }
    }

    /// Display a card, falling back to the error card on failure.
    pub async fn display_card(&self, group: &str, editor: &str, card: &str) {
        match self.source.fetch(card).await {
            Ok(html) => self.view.render(&html),
            Err(err) => {
                warn!(%group, %editor, %card, %err, "failed to fetch card");
                self.display_error_card().await;
            }
        }
    }

    async fn display_error_card(&self) {
        let error_card = &self.config.error_card;
        match self.source.fetch(error_card).await {
            Ok(html) => self.view.render(&html),
            Err(err) => error!(%error_card, %err, "missing error card"),
        }
    }
}
