use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// A place the listings dataset can be read from.
/// The loader tries sources in order, so new transports only need this trait.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Read and decode the whole dataset
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Human-readable location, used in logs
    fn describe(&self) -> String;
}
