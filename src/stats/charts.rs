use crate::models::{DayWindow, FilterSpec, Listing, ListingType, ListingTypeFilter};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// One bar of the price histogram; `max: None` is open-ended
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceBucket {
    pub min: i64,
    pub max: Option<i64>,
    pub label: &'static str,
    pub count: usize,
}

impl PriceBucket {
    fn contains(&self, price: f64) -> bool {
        price >= self.min as f64 && self.max.map(|max| price < max as f64).unwrap_or(true)
    }

    /// Filter that drills into this bucket from the stats page.
    pub fn to_filter(&self, listing_type: ListingTypeFilter) -> FilterSpec {
        FilterSpec {
            listing_type,
            price_min: Some(self.min),
            price_max: self.max,
            ..FilterSpec::default()
        }
    }
}

const RENT_LADDER: [(i64, Option<i64>, &str); 6] = [
    (0, Some(1_000), "< €1k"),
    (1_000, Some(1_500), "€1-1.5k"),
    (1_500, Some(2_000), "€1.5-2k"),
    (2_000, Some(2_500), "€2-2.5k"),
    (2_500, Some(3_000), "€2.5-3k"),
    (3_000, None, "> €3k"),
];

const SALE_LADDER: [(i64, Option<i64>, &str); 6] = [
    (0, Some(200_000), "< €200k"),
    (200_000, Some(300_000), "€200-300k"),
    (300_000, Some(400_000), "€300-400k"),
    (400_000, Some(500_000), "€400-500k"),
    (500_000, Some(750_000), "€500-750k"),
    (750_000, None, "> €750k"),
];

/// Price distribution for listings of the given type.
///
/// Rent ranges are used when rentals are a strict majority of the subset,
/// sale ranges otherwise. An empty subset gives no buckets at all.
pub fn price_histogram(listings: &[Listing], listing_type: ListingTypeFilter) -> Vec<PriceBucket> {
    let subset: Vec<&Listing> = listings
        .iter()
        .filter(|l| listing_type.matches(l.listing_type))
        .collect();

    if subset.is_empty() {
        return Vec::new();
    }

    let rentals = subset
        .iter()
        .filter(|l| l.listing_type == ListingType::Rent)
        .count();
    let ladder = if rentals * 2 > subset.len() {
        &RENT_LADDER
    } else {
        &SALE_LADDER
    };

    ladder
        .iter()
        .map(|&(min, max, label)| {
            let mut bucket = PriceBucket {
                min,
                max,
                label,
                count: 0,
            };
            bucket.count = subset.iter().filter(|l| bucket.contains(l.price)).count();
            bucket
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
}

/// New listings per local day for the `days` days ending on `today`,
/// oldest first.
pub fn timeline(listings: &[Listing], today: NaiveDate, days: u32) -> Vec<TimelinePoint> {
    (0..days as i64)
        .rev()
        .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
        .map(|date| {
            let window = DayWindow::for_date(date);
            TimelinePoint {
                date,
                label: date.format("%b %-d").to_string(),
                count: listings
                    .iter()
                    .filter(|l| window.contains(&l.first_seen))
                    .count(),
            }
        })
        .collect()
}

/// Largest counts first, ties broken by key, at most `n` entries.
pub fn top_entries(counts: &HashMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}

/// Most recent update across the collection. A listing whose `lastUpdated`
/// cannot be read counts with its `firstSeen` instead.
pub fn latest_update(listings: &[Listing]) -> Option<DateTime<Utc>> {
    listings
        .iter()
        .filter_map(|l| l.last_updated.parse().or_else(|| l.first_seen.parse()))
        .max()
}
