use chrono::Local;

use crate::models::listing::Listing;
use crate::models::summary::{MarketSummary, TopListing};

const TOP_N: usize = 5;

/// Compute the per-run summary over the listing table.
///
/// Prices that are unavailable are ignored by the mean and the argmax.
/// Errors on an empty table and on a table with no numeric prices at
/// all; the run's entry point short-circuits the empty-fetch case before
/// reaching this stage.
pub fn analyze_listings(
    listings: &[Listing],
) -> Result<MarketSummary, Box<dyn std::error::Error + Send + Sync>> {
    if listings.is_empty() {
        return Err("cannot summarize an empty listing table".into());
    }

    let prices: Vec<(usize, f64)> = listings
        .iter()
        .enumerate()
        .filter_map(|(idx, listing)| listing.price_usd.map(|price| (idx, price)))
        .collect();

    if prices.is_empty() {
        return Err("no numeric prices in listing table".into());
    }

    let sum: f64 = prices.iter().map(|(_, price)| price).sum();
    let average_price = round2(sum / prices.len() as f64);

    // First row attaining the maximum, so ties resolve to page order.
    let (max_idx, _) = prices
        .iter()
        .copied()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .unwrap();

    let top_by_market_cap = listings
        .iter()
        .take(TOP_N)
        .map(|listing| TopListing {
            name: listing.name.clone(),
            market_cap: listing.market_cap.clone(),
        })
        .collect();

    Ok(MarketSummary {
        total_count: listings.len(),
        top_by_market_cap,
        average_price,
        highest_priced_name: listings[max_idx].name.clone(),
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
