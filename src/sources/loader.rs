use crate::config::Config;
use crate::models::Listing;
use crate::sources::{FileSource, HttpSource, ListingSource};
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

/// Accepted payload shapes: a bare array, or an object with a `listings`
/// array. Any other object is rejected so the loader moves on.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Bare(Vec<Listing>),
    Wrapped { listings: Vec<Listing> },
}

/// Decode a listings payload
pub fn decode_payload(raw: &[u8]) -> Result<Vec<Listing>> {
    let payload: Payload = serde_json::from_slice(raw).context("Failed to parse listings payload")?;

    Ok(match payload {
        Payload::Bare(listings) => listings,
        Payload::Wrapped { listings } => listings,
    })
}

/// Try each source in order and return the first dataset that loads.
///
/// Failures are logged and skipped; when every source fails the result is
/// an empty collection.
pub async fn load_listings(sources: &[Box<dyn ListingSource>]) -> Vec<Listing> {
    for source in sources {
        match source.fetch().await {
            Ok(listings) => {
                info!(source = %source.describe(), count = listings.len(), "Loaded listings");
                return listings;
            }
            Err(err) => {
                warn!(source = %source.describe(), error = %format!("{:#}", err), "Listings source failed, trying next");
            }
        }
    }

    warn!(attempted = sources.len(), "No listings source succeeded, using an empty collection");
    Vec::new()
}

/// Ordered set of candidate sources
pub struct ListingLoader {
    sources: Vec<Box<dyn ListingSource>>,
}

impl ListingLoader {
    pub fn new(sources: Vec<Box<dyn ListingSource>>) -> Self {
        Self { sources }
    }

    /// Remote URL first, then the fallback URLs, then the static file.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        let mut sources: Vec<Box<dyn ListingSource>> = Vec::new();
        for url in config.candidate_urls() {
            sources.push(Box::new(HttpSource::with_client(client.clone(), url)));
        }
        sources.push(Box::new(FileSource::new(config.listings_file.clone())));

        Ok(Self::new(sources))
    }

    pub fn sources(&self) -> &[Box<dyn ListingSource>] {
        &self.sources
    }

    pub async fn load(&self) -> Vec<Listing> {
        load_listings(&self.sources).await
    }
}
