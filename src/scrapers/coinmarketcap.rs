use reqwest::Client;

use crate::config::AnalyzerConfig;
use crate::models::listing::Listing;
use crate::scrapers::parser::extract_listings;

/// Fetches the public listing page and hands the markup to the extractor.
/// One best-effort request per run: no retry, no backoff.
pub struct CoinMarketCapScraper {
    client: Client,
    config: AnalyzerConfig,
}

impl CoinMarketCapScraper {
    pub fn new(config: AnalyzerConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .unwrap();

        Self { client, config }
    }

    /// Fetch the raw listing page. Any transport-level failure (connect
    /// error, timeout, non-2xx status) is logged and yields `None`; the
    /// caller treats a missing body as "no data for this run".
    pub async fn fetch_page(&self) -> Option<String> {
        tracing::info!("Fetching listing page from {}", self.config.listing_url);

        let response = match self.client.get(&self.config.listing_url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Failed to fetch listing page: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::error!("Listing page returned HTTP {}", response.status());
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("Failed to read listing page body: {}", e);
                None
            }
        }
    }

    /// Fetch and extract in one pass. An empty table means the fetch
    /// failed or no rows survived extraction; a hard extraction error
    /// (non-numeric price cell) propagates.
    pub async fn scrape(&self) -> Result<Vec<Listing>, Box<dyn std::error::Error + Send + Sync>> {
        let Some(body) = self.fetch_page().await else {
            return Ok(Vec::new());
        };

        extract_listings(&body, self.config.row_limit)
    }
}
