use crate::models::{FilterSpec, ListingTypeFilter, PartialFilterSpec, SortBy};
use url::form_urlencoded;

/// Flat, ordered query parameters for a shareable view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterParams {
    pairs: Vec<(String, String)>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any earlier value for `key`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Parse a query string, with or without the leading `?`.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Only fields that differ from the permissive default are written.
pub fn filters_to_url_params(spec: &FilterSpec) -> FilterParams {
    let mut params = FilterParams::new();

    if spec.listing_type != ListingTypeFilter::All {
        params.set("type", spec.listing_type.as_str());
    }
    if spec.new_today_only {
        params.set("new", "1");
    }
    if let Some(price_min) = spec.price_min {
        params.set("priceMin", price_min.to_string());
    }
    if let Some(price_max) = spec.price_max {
        params.set("priceMax", price_max.to_string());
    }
    if let Some(sqm_min) = spec.sqm_min {
        params.set("sqmMin", sqm_min.to_string());
    }
    if let Some(sqm_max) = spec.sqm_max {
        params.set("sqmMax", sqm_max.to_string());
    }
    if !spec.bedrooms.is_empty() {
        let joined: Vec<String> = spec.bedrooms.iter().map(u32::to_string).collect();
        params.set("bedrooms", joined.join(","));
    }
    if !spec.cities.is_empty() {
        params.set("cities", spec.cities.join(","));
    }
    if !spec.agencies.is_empty() {
        params.set("agencies", spec.agencies.join(","));
    }
    if spec.sort_by != SortBy::Newest {
        params.set("sort", spec.sort_by.as_str());
    }

    params
}

/// Overrides recognised in `params`. Unknown keys and unreadable values are
/// skipped so the default stays in force.
pub fn url_params_to_filters(params: &FilterParams) -> PartialFilterSpec {
    let mut partial = PartialFilterSpec::default();

    partial.listing_type = params
        .get("type")
        .and_then(|v| v.parse::<ListingTypeFilter>().ok())
        .filter(|ty| *ty != ListingTypeFilter::All);

    if params.get("new") == Some("1") {
        partial.new_today_only = Some(true);
    }

    partial.price_min = params.get("priceMin").and_then(parse_leading_int);
    partial.price_max = params.get("priceMax").and_then(parse_leading_int);
    partial.sqm_min = params.get("sqmMin").and_then(parse_leading_int);
    partial.sqm_max = params.get("sqmMax").and_then(parse_leading_int);

    partial.bedrooms = params.get("bedrooms").and_then(|v| {
        non_empty(
            split_list(v)
                .filter_map(|item| item.trim().parse::<u32>().ok())
                .collect(),
        )
    });
    partial.cities = params
        .get("cities")
        .and_then(|v| non_empty(split_list(v).map(str::to_string).collect()));
    partial.agencies = params
        .get("agencies")
        .and_then(|v| non_empty(split_list(v).map(str::to_string).collect()));

    partial.sort_by = params
        .get("sort")
        .and_then(|v| v.parse::<SortBy>().ok())
        .filter(|sort| *sort != SortBy::Newest);

    partial
}

impl FilterSpec {
    /// Defaults plus whatever `query` overrides.
    pub fn from_query_string(query: &str) -> Self {
        let params = FilterParams::from_query_string(query);
        FilterSpec::default().merge(url_params_to_filters(&params))
    }

    pub fn to_query_string(&self) -> String {
        filters_to_url_params(self).to_query_string()
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').filter(|item| !item.is_empty())
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Integer prefix of `value`: optional sign then digits, trailing junk
/// ignored. `None` when there are no digits or the number overflows.
fn parse_leading_int(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, rest) = match value.as_bytes().first() {
        Some(b'-') => (-1, &value[1..]),
        Some(b'+') => (1, &value[1..]),
        _ => (1, value),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|n| n * sign)
}
