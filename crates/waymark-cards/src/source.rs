//! Card fetching.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::{Error, Result};

/// Source of card HTML fragments.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Fetch a card fragment by document name.
    async fn fetch(&self, card: &str) -> Result<String>;
}

/// Fetches card fragments over HTTP, relative to a base URL.
pub struct HttpCardSource {
    client: Client,
    base_url: String,
}

impl HttpCardSource {
    /// Create a source rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CardSource for HttpCardSource {
    async fn fetch(&self, card: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, card);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let source = HttpCardSource::new("https://host.example/cards/");
        assert_eq!(source.base_url, "https://host.example/cards");
    }
}
