use chrono::Utc;
use housing_browser::stats::{latest_update, top_entries};
use housing_browser::view::{format_time_ago, is_new_listing, primary_poi, poi_label, Pager};
use housing_browser::{
    apply_filters, compute_distinct_values, compute_stats, AgencyDirectory, Config, FilterSpec,
    ListingLoader,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let agencies = AgencyDirectory::default();

    info!("🏠 Housing Browser");
    info!("==================");

    let loader = ListingLoader::from_config(&config)?;
    let listings = loader.load().await;

    // Aggregate stats
    let stats = compute_stats(&listings);
    info!(
        total = stats.total,
        for_sale = stats.for_sale,
        for_rent = stats.for_rent,
        new_today = stats.new_today,
        "Dataset summary"
    );
    if let Some(updated) = latest_update(&listings) {
        info!("Last updated {}", updated.to_rfc3339());
    }
    for (city, count) in top_entries(&stats.by_city, 8) {
        info!("  {:<20} {}", city, count);
    }
    for (agency, count) in top_entries(&stats.by_agency, 8) {
        info!("  {:<28} {}", agencies.display_name(agency), count);
    }

    let options = compute_distinct_values(&listings);
    info!(
        cities = options.cities.len(),
        agencies = options.agencies.len(),
        bedrooms = ?options.bedroom_counts,
        "Filter options"
    );

    // Filtered view
    let filters = FilterSpec::from_query_string(&config.query);
    let view = apply_filters(&listings, &filters);
    info!(
        query = %filters.to_query_string(),
        matches = view.len(),
        "Applied filters"
    );

    let now = Utc::now();
    let page = Pager::new(config.page_size).page(&view);

    for (i, listing) in page.items.iter().enumerate() {
        let badge = if is_new_listing(listing, now) { " [NEW]" } else { "" };
        println!("{}. {} ({}){}", i + 1, listing.title, listing.price_label(), badge);
        println!(
            "   {} · {}",
            listing.location.city,
            agencies.display_name(&listing.agency_id)
        );
        match (listing.bedrooms, listing.sqm) {
            (Some(bedrooms), Some(sqm)) => println!("   {} bedrooms, {} m²", bedrooms, sqm),
            (Some(bedrooms), None) => println!("   {} bedrooms", bedrooms),
            (None, Some(sqm)) => println!("   {} m²", sqm),
            (None, None) => {}
        }
        if let Some((poi, distance)) = primary_poi(listing) {
            if let Some(walking) = distance.walking {
                println!("   {} min walk to {}", walking.minutes, poi_label(poi));
            }
        }
        println!("   Seen {}", format_time_ago(&listing.first_seen, now));
        println!("   URL: {}", listing.url);
        println!();
    }

    if page.has_more {
        info!("Showing {} of {} listings", page.items.len(), page.total);
    }

    Ok(())
}
