use crate::models::Listing;
use crate::sources::loader::decode_payload;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Listings served over HTTP(S), e.g. a raw JSON file on static hosting
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(client, url))
    }

    /// Share one client between several sources.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ListingSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!(url = %self.url, "Fetching listings");

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", self.url))?;

        if !response.status().is_success() {
            debug!(url = %self.url, status = %response.status(), "Listings source returned an error status");
            anyhow::bail!("Failed to fetch {}: {}", self.url, response.status());
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        debug!(url = %self.url, bytes = body.len(), "Downloaded listings payload");

        decode_payload(&body).with_context(|| format!("Invalid listings JSON from {}", self.url))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
