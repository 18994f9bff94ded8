use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crypto_market_analyzer::config::AnalyzerConfig;
use crypto_market_analyzer::reports;
use crypto_market_analyzer::scrapers::coinmarketcap::CoinMarketCapScraper;
use crypto_market_analyzer::services::analysis::analyze_listings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,crypto_market_analyzer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AnalyzerConfig::from_env();
    let output_dir = config.output_dir.clone();

    println!("Fetching live cryptocurrency market data...");
    let scraper = CoinMarketCapScraper::new(config);
    let listings = scraper.scrape().await?;

    if listings.is_empty() {
        println!("No data was retrieved.");
        return Ok(());
    }

    println!("Analyzing data for {} cryptocurrencies...\n", listings.len());
    let summary = analyze_listings(&listings)?;

    println!("Summary:");
    println!("Total Cryptocurrencies: {}", summary.total_count);
    println!("Top 5 by Market Cap:");
    for (rank, top) in summary.top_by_market_cap.iter().enumerate() {
        println!("  {}. {} ({})", rank + 1, top.name, top.market_cap);
    }
    println!("Average Price (USD): {}", summary.average_price);
    println!("Highest Priced Coin: {}", summary.highest_priced_name);
    println!("Timestamp: {}", summary.generated_at);

    let paths = reports::write_reports(Path::new(&output_dir), &listings, &summary)?;

    println!("\nRaw data saved to {}", paths.csv.display());
    println!("Summary saved to {}", paths.json.display());
    println!("Styled PDF report saved to {}", paths.pdf.display());

    Ok(())
}
