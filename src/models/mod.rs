pub mod filters;
pub mod timestamp;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use filters::{FilterSpec, ListingTypeFilter, PartialFilterSpec, SortBy};
pub use timestamp::{DayWindow, Timestamp};

/// Whether a listing is offered for sale or for rent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }
}

/// Raw coordinates as published; either half may be missing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A usable map position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Location information for a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// Position on the map, only when both lat and lon are present.
    pub fn position(&self) -> Option<GeoPoint> {
        let coords = self.coordinates?;
        Some(GeoPoint {
            lat: coords.lat?,
            lon: coords.lon?,
        })
    }
}

/// Distance and travel time for one mode of transport
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TravelLeg {
    pub meters: f64,
    pub minutes: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PoiDistance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walking: Option<TravelLeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycling: Option<TravelLeg>,
}

/// One real-estate listing from the dataset.
///
/// Listings are read-only once loaded; every engine operation returns a
/// borrowed view instead of touching the records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub agency_id: String,
    pub listing_type: ListingType,
    pub price: f64,
    #[serde(default)]
    pub sqm: Option<f64>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    pub first_seen: Timestamp,
    pub last_updated: Timestamp,
    #[serde(
        default,
        rename = "distanceToPOI",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance_to_poi: Option<IndexMap<String, PoiDistance>>,

    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price_display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scraped: Option<Timestamp>,
}

impl Listing {
    /// Price as shown to users: the published display string when there is
    /// one, otherwise a euro amount (`/mo` for rentals).
    pub fn price_label(&self) -> String {
        if !self.price_display.trim().is_empty() {
            return self.price_display.clone();
        }

        let amount = format!("€{}", group_thousands(self.price.round() as i64));
        match self.listing_type {
            ListingType::Rent => format!("{}/mo", amount),
            ListingType::Sale => amount,
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}


#[cfg(test)]
mod tests {
    use super::fixtures::listing;
    use super::*;

    #[test]
    fn decodes_minimal_camel_case_record() {
        let json = r#"{
            "id": "p1",
            "agencyId": "bnv",
            "listingType": "rent",
            "price": 1750,
            "location": { "city": "Utrecht" },
            "firstSeen": "2024-03-12T08:00:00Z",
            "lastUpdated": "2024-03-12T09:00:00Z"
        }"#;

        let parsed: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.agency_id, "bnv");
        assert_eq!(parsed.listing_type, ListingType::Rent);
        assert_eq!(parsed.sqm, None);
        assert_eq!(parsed.bedrooms, None);
        assert!(parsed.images.is_empty());
        assert!(parsed.distance_to_poi.is_none());
    }

    #[test]
    fn poi_map_keeps_document_order() {
        let json = r#"{
            "id": "p1", "agencyId": "a", "listingType": "sale", "price": 1,
            "location": { "city": "Delft" },
            "firstSeen": "2024-03-12", "lastUpdated": "2024-03-12",
            "distanceToPOI": {
                "zuid-station": { "walking": { "meters": 900, "minutes": 11 } },
                "central-station": { "cycling": { "meters": 2100, "minutes": 8 } }
            }
        }"#;

        let parsed: Listing = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = parsed.distance_to_poi.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zuid-station", "central-station"]);
    }

    #[test]
    fn position_requires_both_halves() {
        let mut location = Location {
            city: "Leiden".to_string(),
            coordinates: Some(Coordinates { lat: Some(52.16), lon: None }),
            ..Location::default()
        };
        assert!(location.position().is_none());

        location.coordinates = Some(Coordinates { lat: Some(52.16), lon: Some(4.49) });
        assert_eq!(location.position(), Some(GeoPoint { lat: 52.16, lon: 4.49 }));
    }

    #[test]
    fn price_label_prefers_display_string() {
        let mut sale = listing("s");
        sale.price = 1_250_000.0;
        assert_eq!(sale.price_label(), "€1,250,000");

        sale.price_display = "€ 1.250.000 k.k.".to_string();
        assert_eq!(sale.price_label(), "€ 1.250.000 k.k.");

        let mut rent = listing("r");
        rent.listing_type = ListingType::Rent;
        rent.price = 950.0;
        assert_eq!(rent.price_label(), "€950/mo");
    }
}
