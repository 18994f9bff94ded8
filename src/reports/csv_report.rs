use std::path::Path;

use crate::models::listing::Listing;

/// Write the full listing table as delimited text, header row first.
/// Column names come from the model's serde renames.
pub fn write_csv(
    path: &Path,
    listings: &[Listing],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut writer = csv::Writer::from_path(path)?;

    for listing in listings {
        writer.serialize(listing)?;
    }

    writer.flush()?;
    Ok(())
}

/// Re-load a previously written listing table. Field values and row
/// order survive the round trip; an empty price field comes back as an
/// unavailable price.
pub fn read_csv(path: &Path) -> Result<Vec<Listing>, Box<dyn std::error::Error + Send + Sync>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut listings = Vec::new();

    for record in reader.deserialize() {
        listings.push(record?);
    }

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Vec<Listing> {
        vec![
            Listing {
                name: "Bitcoin".to_string(),
                symbol: "BTC".to_string(),
                price_usd: Some(43250.10),
                market_cap: "$845,200,000,000".to_string(),
                change_24h: "2.15%".to_string(),
            },
            Listing {
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                price_usd: Some(2280.55),
                market_cap: "$274,100,000,000".to_string(),
                change_24h: "-0.42%".to_string(),
            },
        ]
    }

    #[test]
    fn test_csv_round_trip_preserves_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_data_test.csv");

        let table = sample_table();
        write_csv(&path, &table).unwrap();
        let reloaded = read_csv(&path).unwrap();

        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_csv_header_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_data_test.csv");

        write_csv(&path, &sample_table()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();

        assert_eq!(header, "Name,Symbol,Price (USD),Market Cap,24h Change");
    }

    #[test]
    fn test_missing_price_round_trips_as_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_data_test.csv");

        let table = vec![Listing {
            name: "Mystery".to_string(),
            symbol: "MYS".to_string(),
            price_usd: None,
            market_cap: "--".to_string(),
            change_24h: "--".to_string(),
        }];

        write_csv(&path, &table).unwrap();
        let reloaded = read_csv(&path).unwrap();

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].price_usd, None);
    }

    #[test]
    fn test_fields_with_commas_survive_quoting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crypto_data_test.csv");

        let table = sample_table();
        write_csv(&path, &table).unwrap();
        let reloaded = read_csv(&path).unwrap();

        assert_eq!(reloaded[0].market_cap, "$845,200,000,000");
    }
}
