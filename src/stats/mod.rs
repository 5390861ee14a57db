pub mod charts;

use crate::models::{DayWindow, Listing, ListingType};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

pub use charts::{latest_update, price_histogram, timeline, top_entries, PriceBucket, TimelinePoint};

/// Summary counts over a listing collection
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    pub total: usize,
    pub for_sale: usize,
    pub for_rent: usize,
    pub new_today: usize,
    pub by_city: HashMap<String, usize>,
    pub by_agency: HashMap<String, usize>,
}

impl ListingStats {
    /// City with the most listings; ties go to the alphabetically first.
    pub fn top_city(&self) -> Option<(&str, usize)> {
        top_entries(&self.by_city, 1).into_iter().next()
    }
}

/// Values available to the filter controls
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DistinctValues {
    pub cities: Vec<String>,
    pub agencies: Vec<String>,
    pub bedroom_counts: Vec<u32>,
}

pub fn compute_stats(listings: &[Listing]) -> ListingStats {
    compute_stats_in(listings, &DayWindow::today())
}

/// Same as [`compute_stats`] with "today" pinned to `today`.
pub fn compute_stats_in(listings: &[Listing], today: &DayWindow) -> ListingStats {
    let mut stats = ListingStats {
        total: listings.len(),
        ..ListingStats::default()
    };

    for listing in listings {
        match listing.listing_type {
            ListingType::Sale => stats.for_sale += 1,
            ListingType::Rent => stats.for_rent += 1,
        }
        if today.contains(&listing.first_seen) {
            stats.new_today += 1;
        }
        *stats
            .by_city
            .entry(listing.location.city.clone())
            .or_insert(0) += 1;
        *stats
            .by_agency
            .entry(listing.agency_id.clone())
            .or_insert(0) += 1;
    }

    stats
}

/// Sorted distinct cities, agencies and bedroom counts.
///
/// A bedroom count of zero is left out of `bedroom_counts`, so studios never
/// show up as a filter option. This matches the published browser and is
/// kept until product decides otherwise.
pub fn compute_distinct_values(listings: &[Listing]) -> DistinctValues {
    let cities: BTreeSet<&str> = listings.iter().map(|l| l.location.city.as_str()).collect();
    let agencies: BTreeSet<&str> = listings.iter().map(|l| l.agency_id.as_str()).collect();
    let bedroom_counts: BTreeSet<u32> = listings
        .iter()
        .filter_map(|l| l.bedrooms)
        .filter(|&count| count != 0)
        .collect();

    DistinctValues {
        cities: cities.into_iter().map(str::to_string).collect(),
        agencies: agencies.into_iter().map(str::to_string).collect(),
        bedroom_counts: bedroom_counts.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::listing;
    use crate::models::Timestamp;
    use chrono::{Duration, Local};

    fn at(id: &str, ty: ListingType, city: &str, agency: &str, first_seen: Timestamp) -> Listing {
        let mut l = listing(id);
        l.listing_type = ty;
        l.location.city = city.to_string();
        l.agency_id = agency.to_string();
        l.first_seen = first_seen;
        l
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        assert_eq!(compute_stats(&[]), ListingStats::default());
        assert_eq!(compute_distinct_values(&[]), DistinctValues::default());
    }

    #[test]
    fn counts_by_city_agency_and_today() {
        let now = Local::now();
        let today = DayWindow::containing(now);
        let listings = vec![
            at("s1", ListingType::Sale, "Amsterdam", "a1", Timestamp::from(now)),
            at("r1", ListingType::Rent, "Rotterdam", "a2", Timestamp::from(now - Duration::days(1))),
            at("s2", ListingType::Sale, "Amsterdam", "a1", Timestamp::from(now)),
        ];

        let stats = compute_stats_in(&listings, &today);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.for_sale, 2);
        assert_eq!(stats.for_rent, 1);
        assert_eq!(stats.by_city["Amsterdam"], 2);
        assert_eq!(stats.by_city["Rotterdam"], 1);
        assert_eq!(stats.by_agency["a1"], 2);
        assert_eq!(stats.new_today, 2);
        assert_eq!(stats.top_city(), Some(("Amsterdam", 2)));
    }

    #[test]
    fn tomorrow_is_not_new_today() {
        let now = Local::now();
        let listings = vec![at(
            "future",
            ListingType::Sale,
            "Utrecht",
            "a1",
            Timestamp::from(now + Duration::days(1)),
        )];
        let stats = compute_stats_in(&listings, &DayWindow::containing(now));
        assert_eq!(stats.new_today, 0);
    }

    #[test]
    fn distinct_values_are_sorted() {
        let mut a = listing("a");
        a.location.city = "Rotterdam".to_string();
        a.agency_id = "a2".to_string();
        a.bedrooms = Some(2);
        let mut b = listing("b");
        b.bedrooms = Some(3);
        let mut c = listing("c");
        c.bedrooms = Some(2);

        let values = compute_distinct_values(&[a, b, c]);
        assert_eq!(values.cities, vec!["Amsterdam", "Rotterdam"]);
        assert_eq!(values.agencies, vec!["a1", "a2"]);
        assert_eq!(values.bedroom_counts, vec![2, 3]);
    }

    #[test]
    fn studio_bedroom_count_is_not_offered() {
        let mut studio = listing("studio");
        studio.bedrooms = Some(0);
        let mut unknown = listing("unknown");
        unknown.bedrooms = None;
        let mut family = listing("family");
        family.bedrooms = Some(4);
        let mut flat = listing("flat");
        flat.bedrooms = Some(1);

        let values = compute_distinct_values(&[studio, unknown, family, flat]);
        assert_eq!(values.bedroom_counts, vec![1, 4]);
    }
}
