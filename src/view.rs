//! Helpers for presenting a filtered view: paging, the map subset, and the
//! small labels shown on listing cards.

use crate::models::{GeoPoint, Listing, PoiDistance, Timestamp};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// The slice of a view currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Listing>,
    pub total: usize,
    pub has_more: bool,
}

/// Infinite-scroll pagination: a growing prefix of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    display_count: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            display_count: page_size,
        }
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn page<'a>(&self, listings: &[&'a Listing]) -> Page<'a> {
        let shown = self.display_count.min(listings.len());
        Page {
            items: listings[..shown].to_vec(),
            total: listings.len(),
            has_more: shown < listings.len(),
        }
    }

    /// Grow by one page, never past `total`.
    pub fn load_more(&mut self, total: usize) {
        self.display_count = (self.display_count + self.page_size).min(total.max(self.page_size));
    }

    /// Back to the first page; call whenever the filters change.
    pub fn reset(&mut self) {
        self.display_count = self.page_size;
    }
}

/// Listings that can be placed on the map.
pub fn with_coordinates<'a>(listings: &[&'a Listing]) -> Vec<&'a Listing> {
    listings
        .iter()
        .copied()
        .filter(|l| l.location.position().is_some())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl MapBounds {
    /// Fallback view over the Amsterdam region.
    pub const DEFAULT: MapBounds = MapBounds {
        south_west: GeoPoint { lat: 52.3, lon: 4.7 },
        north_east: GeoPoint { lat: 52.5, lon: 5.0 },
    };

    /// Box around every positioned listing, padded by 10% of its span on
    /// each side.
    pub fn around(listings: &[&Listing]) -> MapBounds {
        let mut points = listings.iter().filter_map(|l| l.location.position());
        let Some(first) = points.next() else {
            return Self::DEFAULT;
        };

        let (mut south, mut west, mut north, mut east) = (first.lat, first.lon, first.lat, first.lon);
        for p in points {
            south = south.min(p.lat);
            north = north.max(p.lat);
            west = west.min(p.lon);
            east = east.max(p.lon);
        }

        let pad_lat = (north - south) * 0.1;
        let pad_lon = (east - west) * 0.1;
        MapBounds {
            south_west: GeoPoint { lat: south - pad_lat, lon: west - pad_lon },
            north_east: GeoPoint { lat: north + pad_lat, lon: east + pad_lon },
        }
    }
}

/// First seen within the last 24 hours.
pub fn is_new_listing(listing: &Listing, now: DateTime<Utc>) -> bool {
    listing
        .first_seen
        .parse()
        .map(|seen| seen > now - Duration::days(1))
        .unwrap_or(false)
}

/// Relative age such as "3h ago" or "2 weeks ago". Unreadable timestamps
/// are shown as they are.
pub fn format_time_ago(ts: &Timestamp, now: DateTime<Utc>) -> String {
    let Some(then) = ts.parse() else {
        return ts.to_string();
    };

    let elapsed = now - then;
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else {
        format!("{} months ago", days / 30)
    }
}

/// First point of interest, when it has a walking distance.
pub fn primary_poi(listing: &Listing) -> Option<(&str, &PoiDistance)> {
    let (key, distance) = listing.distance_to_poi.as_ref()?.first()?;
    distance.walking?;
    Some((key.as_str(), distance))
}

/// `"central-station"` becomes `"Central Station"`.
pub fn poi_label(key: &str) -> String {
    key.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::listing;
    use crate::models::{Coordinates, TravelLeg};
    use chrono::TimeZone;
    use indexmap::IndexMap;

    fn many(n: usize) -> Vec<Listing> {
        (0..n).map(|i| listing(&format!("p{}", i))).collect()
    }

    #[test]
    fn pager_grows_and_resets() {
        let listings = many(30);
        let view: Vec<&Listing> = listings.iter().collect();
        let mut pager = Pager::default();

        let first = pager.page(&view);
        assert_eq!(first.items.len(), 12);
        assert!(first.has_more);
        assert_eq!(first.total, 30);

        pager.load_more(view.len());
        assert_eq!(pager.page(&view).items.len(), 24);

        pager.load_more(view.len());
        let last = pager.page(&view);
        assert_eq!(last.items.len(), 30);
        assert!(!last.has_more);
        assert_eq!(pager.display_count(), 30);

        pager.reset();
        assert_eq!(pager.display_count(), 12);
    }

    #[test]
    fn pager_on_short_view() {
        let listings = many(3);
        let view: Vec<&Listing> = listings.iter().collect();
        let mut pager = Pager::new(5);
        pager.load_more(view.len());

        let page = pager.page(&view);
        assert_eq!(page.items.len(), 3);
        assert!(!page.has_more);
        assert!(Pager::default().page(&[]).items.is_empty());
    }

    fn at(id: &str, lat: Option<f64>, lon: Option<f64>) -> Listing {
        let mut l = listing(id);
        l.location.coordinates = Some(Coordinates { lat, lon });
        l
    }

    #[test]
    fn map_subset_and_bounds() {
        let listings = vec![
            at("a", Some(52.0), Some(4.0)),
            at("b", Some(53.0), Some(5.0)),
            at("half", Some(52.5), None),
            listing("none"),
        ];
        let view: Vec<&Listing> = listings.iter().collect();

        let mapped = with_coordinates(&view);
        assert_eq!(mapped.len(), 2);

        let bounds = MapBounds::around(&mapped);
        assert!((bounds.south_west.lat - 51.9).abs() < 1e-9);
        assert!((bounds.south_west.lon - 3.9).abs() < 1e-9);
        assert!((bounds.north_east.lat - 53.1).abs() < 1e-9);
        assert!((bounds.north_east.lon - 5.1).abs() < 1e-9);

        assert_eq!(MapBounds::around(&[]), MapBounds::DEFAULT);
    }

    #[test]
    fn new_listing_is_within_a_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap();
        let mut l = listing("p");

        l.first_seen = Timestamp::from(now - Duration::hours(23));
        assert!(is_new_listing(&l, now));

        l.first_seen = Timestamp::from(now - Duration::hours(24));
        assert!(!is_new_listing(&l, now));

        l.first_seen = Timestamp::new("unknown");
        assert!(!is_new_listing(&l, now));
    }

    #[test]
    fn time_ago_labels() {
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 12, 0, 0).unwrap();
        let ago = |d: Duration| format_time_ago(&Timestamp::from(now - d), now);

        assert_eq!(ago(Duration::minutes(20)), "Just now");
        assert_eq!(ago(Duration::hours(5)), "5h ago");
        assert_eq!(ago(Duration::hours(30)), "Yesterday");
        assert_eq!(ago(Duration::days(4)), "4 days ago");
        assert_eq!(ago(Duration::days(15)), "2 weeks ago");
        assert_eq!(ago(Duration::days(65)), "2 months ago");
        assert_eq!(format_time_ago(&Timestamp::new("soon"), now), "soon");
    }

    #[test]
    fn primary_poi_needs_walking_leg() {
        let mut l = listing("p");
        assert!(primary_poi(&l).is_none());

        let walk = TravelLeg { meters: 850.0, minutes: 11.0 };
        let mut pois = IndexMap::new();
        pois.insert("central-station".to_string(), PoiDistance { walking: Some(walk), cycling: None });
        pois.insert("vondelpark".to_string(), PoiDistance::default());
        l.distance_to_poi = Some(pois);

        let (key, distance) = primary_poi(&l).unwrap();
        assert_eq!(key, "central-station");
        assert_eq!(distance.walking, Some(walk));

        let mut cycling_only = IndexMap::new();
        cycling_only.insert("zuid".to_string(), PoiDistance { walking: None, cycling: Some(walk) });
        l.distance_to_poi = Some(cycling_only);
        assert!(primary_poi(&l).is_none());
    }

    #[test]
    fn poi_labels_are_title_cased() {
        assert_eq!(poi_label("central-station"), "Central Station");
        assert_eq!(poi_label("museum-plein-west"), "Museum Plein West");
        assert_eq!(poi_label("vu"), "Vu");
    }
}
