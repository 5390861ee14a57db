use super::ListingType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Listing type constraint; `All` means no constraint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingTypeFilter {
    #[default]
    All,
    Sale,
    Rent,
}

impl ListingTypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingTypeFilter::All => "all",
            ListingTypeFilter::Sale => "sale",
            ListingTypeFilter::Rent => "rent",
        }
    }

    pub fn matches(&self, listing_type: ListingType) -> bool {
        match self {
            ListingTypeFilter::All => true,
            ListingTypeFilter::Sale => listing_type == ListingType::Sale,
            ListingTypeFilter::Rent => listing_type == ListingType::Rent,
        }
    }
}

impl From<ListingType> for ListingTypeFilter {
    fn from(listing_type: ListingType) -> Self {
        match listing_type {
            ListingType::Sale => ListingTypeFilter::Sale,
            ListingType::Rent => ListingTypeFilter::Rent,
        }
    }
}

impl FromStr for ListingTypeFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ListingTypeFilter::All),
            "sale" => Ok(ListingTypeFilter::Sale),
            "rent" => Ok(ListingTypeFilter::Rent),
            _ => Err(()),
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    SizeDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
            SortBy::SizeDesc => "size-desc",
        }
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortBy::Newest),
            "price-asc" => Ok(SortBy::PriceAsc),
            "price-desc" => Ok(SortBy::PriceDesc),
            "size-desc" => Ok(SortBy::SizeDesc),
            _ => Err(()),
        }
    }
}

/// Active filter and sort choices.
///
/// `Default` is fully permissive: no bounds, empty sets, every type, newest
/// first. Bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    pub listing_type: ListingTypeFilter,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub sqm_min: Option<i64>,
    pub sqm_max: Option<i64>,
    pub bedrooms: Vec<u32>,
    pub cities: Vec<String>,
    pub agencies: Vec<String>,
    pub sort_by: SortBy,
    pub new_today_only: bool,
}

impl FilterSpec {
    /// Defaults with `partial` laid on top.
    pub fn merge(mut self, partial: PartialFilterSpec) -> Self {
        if let Some(listing_type) = partial.listing_type {
            self.listing_type = listing_type;
        }
        if let Some(price_min) = partial.price_min {
            self.price_min = Some(price_min);
        }
        if let Some(price_max) = partial.price_max {
            self.price_max = Some(price_max);
        }
        if let Some(sqm_min) = partial.sqm_min {
            self.sqm_min = Some(sqm_min);
        }
        if let Some(sqm_max) = partial.sqm_max {
            self.sqm_max = Some(sqm_max);
        }
        if let Some(bedrooms) = partial.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(cities) = partial.cities {
            self.cities = cities;
        }
        if let Some(agencies) = partial.agencies {
            self.agencies = agencies;
        }
        if let Some(sort_by) = partial.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(new_today_only) = partial.new_today_only {
            self.new_today_only = new_today_only;
        }
        self
    }

    /// Quick filter: only one listing type.
    pub fn for_listing_type(listing_type: ListingType) -> Self {
        Self {
            listing_type: listing_type.into(),
            ..Self::default()
        }
    }

    /// Quick filter: only one city.
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            cities: vec![city.into()],
            ..Self::default()
        }
    }

    /// Quick filter: listings first seen today.
    pub fn new_today() -> Self {
        Self {
            new_today_only: true,
            ..Self::default()
        }
    }

    /// True when nothing narrows the collection (sort order aside).
    pub fn is_unconstrained(&self) -> bool {
        Self {
            sort_by: self.sort_by,
            ..Self::default()
        } == *self
    }
}

/// Overrides parsed from a URL; `None` leaves the default in place
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartialFilterSpec {
    pub listing_type: Option<ListingTypeFilter>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub sqm_min: Option<i64>,
    pub sqm_max: Option<i64>,
    pub bedrooms: Option<Vec<u32>>,
    pub cities: Option<Vec<String>>,
    pub agencies: Option<Vec<String>>,
    pub sort_by: Option<SortBy>,
    pub new_today_only: Option<bool>,
}
