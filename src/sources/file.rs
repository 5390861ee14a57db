use crate::models::Listing;
use crate::sources::loader::decode_payload;
use crate::sources::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The static `listings.json` produced by the scraper run
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListingSource for FileSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!(path = %self.path.display(), "Reading listings file");

        let raw = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        decode_payload(&raw)
            .with_context(|| format!("Invalid listings JSON in {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
