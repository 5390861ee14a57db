use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Runner configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Primary remote dataset, e.g. a raw JSON file on static hosting
    pub listings_url: Option<String>,
    pub fallback_urls: Vec<String>,
    /// Static file tried after every URL
    pub listings_file: PathBuf,
    /// Filter/sort view as a URL query string
    pub query: String,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listings_url: None,
            fallback_urls: Vec::new(),
            listings_file: PathBuf::from("data/listings.json"),
            query: String::new(),
            page_size: 12,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            listings_url: env::var("LISTINGS_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            fallback_urls: env::var("LISTINGS_FALLBACK_URLS")
                .map(|raw| split_urls(&raw))
                .unwrap_or_default(),
            listings_file: env::var("LISTINGS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.listings_file),
            query: env::var("LISTINGS_QUERY").unwrap_or_default(),
            page_size: match env::var("PAGE_SIZE") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .context("PAGE_SIZE must be a valid number")?,
                Err(_) => defaults.page_size,
            },
        })
    }

    /// Remote candidates in the order they should be tried.
    pub fn candidate_urls(&self) -> impl Iterator<Item = &str> {
        self.listings_url
            .iter()
            .chain(self.fallback_urls.iter())
            .map(String::as_str)
    }
}

fn split_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
