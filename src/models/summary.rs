use serde::{Deserialize, Serialize};

/// Name and market-cap display text for one of the leading table rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopListing {
    pub name: String,
    pub market_cap: String,
}

/// Aggregate statistics derived once per run from the listing table.
/// Read-only after construction; the serde renames pin the key names of
/// the JSON summary file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSummary {
    #[serde(rename = "Total Cryptocurrencies")]
    pub total_count: usize,

    /// First `min(5, N)` rows in table order, mirroring the source
    /// page's own ranking.
    #[serde(rename = "Top 5 by Market Cap")]
    pub top_by_market_cap: Vec<TopListing>,

    #[serde(rename = "Average Price (USD)")]
    pub average_price: f64,

    #[serde(rename = "Highest Priced Coin")]
    pub highest_priced_name: String,

    /// Local time, `%Y-%m-%d %H:%M:%S`.
    #[serde(rename = "Timestamp")]
    pub generated_at: String,
}
