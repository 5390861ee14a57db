pub mod params;

use crate::models::{DayWindow, FilterSpec, Listing, SortBy};
use std::cmp::Ordering;

pub use params::{filters_to_url_params, url_params_to_filters, FilterParams};

/// Listings matching `spec`, in `spec.sort_by` order.
pub fn apply_filters<'a>(listings: &'a [Listing], spec: &FilterSpec) -> Vec<&'a Listing> {
    apply_filters_in(listings, spec, &DayWindow::today())
}

/// Same as [`apply_filters`] with "today" pinned to `today`.
pub fn apply_filters_in<'a>(
    listings: &'a [Listing],
    spec: &FilterSpec,
    today: &DayWindow,
) -> Vec<&'a Listing> {
    let mut result: Vec<&Listing> = listings
        .iter()
        .filter(|listing| matches(listing, spec, today))
        .collect();
    sort_listings(&mut result, spec.sort_by);
    result
}

/// Every active constraint must hold. Missing `sqm` or `bedrooms` fails
/// whichever constraint looks at it.
pub fn matches(listing: &Listing, spec: &FilterSpec, today: &DayWindow) -> bool {
    if spec.new_today_only && !today.contains(&listing.first_seen) {
        return false;
    }

    if !spec.listing_type.matches(listing.listing_type) {
        return false;
    }

    if !within(Some(listing.price), spec.price_min, spec.price_max) {
        return false;
    }

    if (spec.sqm_min.is_some() || spec.sqm_max.is_some())
        && !within(listing.sqm, spec.sqm_min, spec.sqm_max)
    {
        return false;
    }

    if !spec.bedrooms.is_empty()
        && !listing
            .bedrooms
            .map(|count| spec.bedrooms.contains(&count))
            .unwrap_or(false)
    {
        return false;
    }

    if !spec.cities.is_empty() && !spec.cities.contains(&listing.location.city) {
        return false;
    }

    if !spec.agencies.is_empty() && !spec.agencies.contains(&listing.agency_id) {
        return false;
    }

    true
}

fn within(value: Option<f64>, min: Option<i64>, max: Option<i64>) -> bool {
    let Some(value) = value else {
        return min.is_none() && max.is_none();
    };
    min.map(|min| value >= min as f64).unwrap_or(true)
        && max.map(|max| value <= max as f64).unwrap_or(true)
}

/// Stable sort; listings with equal keys keep their relative order.
pub fn sort_listings(listings: &mut [&Listing], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => listings.sort_by(|a, b| {
            // Unreadable timestamps go last.
            match (a.first_seen.parse(), b.first_seen.parse()) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        SortBy::PriceAsc => listings.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceDesc => listings.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::SizeDesc => listings.sort_by(|a, b| {
            b.sqm.unwrap_or(0.0).total_cmp(&a.sqm.unwrap_or(0.0))
        }),
    }
}
