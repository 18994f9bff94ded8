use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::models::summary::MarketSummary;

/// Serialize the summary as pretty-printed JSON. Key names come from
/// the model's serde renames.
pub fn write_json(
    path: &Path,
    summary: &MarketSummary,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::summary::TopListing;

    #[test]
    fn test_written_json_carries_summary_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_summary_test.json");

        let summary = MarketSummary {
            total_count: 2,
            top_by_market_cap: vec![
                TopListing {
                    name: "Bitcoin".to_string(),
                    market_cap: "$845B".to_string(),
                },
                TopListing {
                    name: "Ethereum".to_string(),
                    market_cap: "$274B".to_string(),
                },
            ],
            average_price: 22765.33,
            highest_priced_name: "Bitcoin".to_string(),
            generated_at: "2025-01-12 09:30:00".to_string(),
        };

        write_json(&path, &summary).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(value["Total Cryptocurrencies"], 2);
        assert_eq!(value["Average Price (USD)"], 22765.33);
        assert_eq!(value["Highest Priced Coin"], "Bitcoin");
        assert_eq!(value["Timestamp"], "2025-01-12 09:30:00");

        let top = value["Top 5 by Market Cap"].as_array().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0]["name"], "Bitcoin");
        assert_eq!(top[0]["market_cap"], "$845B");
        assert_eq!(top[1]["name"], "Ethereum");
    }
}
