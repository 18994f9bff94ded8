use serde::{Deserialize, Serialize};

/// One cryptocurrency's market snapshot as extracted from the listing
/// page. Market cap and 24h change are kept as the page's display text;
/// only the price is coerced to a number. `price_usd = None` marks a
/// price that was unavailable when the table was (re-)loaded.
///
/// The serde renames pin the external column names used by the CSV
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Symbol")]
    pub symbol: String,

    #[serde(rename = "Price (USD)")]
    pub price_usd: Option<f64>,

    #[serde(rename = "Market Cap")]
    pub market_cap: String,

    #[serde(rename = "24h Change")]
    pub change_24h: String,
}
