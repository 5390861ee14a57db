//! Query engine for a static real-estate listings dataset.
//!
//! Loads listings from an ordered list of candidate sources, aggregates them
//! for the stats page, and filters/sorts them for the browse view. The
//! filter state round-trips through URL query strings so views can be
//! shared.

pub mod agencies;
pub mod config;
pub mod filters;
pub mod models;
pub mod sources;
pub mod stats;
pub mod view;

pub use agencies::AgencyDirectory;
pub use config::Config;
pub use filters::{apply_filters, filters_to_url_params, sort_listings, url_params_to_filters, FilterParams};
pub use models::{DayWindow, FilterSpec, Listing, ListingType, ListingTypeFilter, PartialFilterSpec, SortBy, Timestamp};
pub use sources::{load_listings, ListingLoader, ListingSource};
pub use stats::{compute_distinct_values, compute_stats, DistinctValues, ListingStats};
