use std::env;

const DEFAULT_LISTING_URL: &str = "https://coinmarketcap.com/";

// Browser-style UA; the listing page serves a stripped-down body to
// unknown clients.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0 Safari/537.36";

/// Runtime configuration for one analyzer run, sourced from environment
/// variables with compiled defaults. There are no CLI flags.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub listing_url: String,
    pub user_agent: String,
    pub row_limit: usize,
    pub output_dir: String,
    pub request_timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            row_limit: 20,
            output_dir: "output".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listing_url: env::var("LISTING_URL").unwrap_or(defaults.listing_url),
            user_agent: env::var("SCRAPE_USER_AGENT").unwrap_or(defaults.user_agent),
            row_limit: env::var("ROW_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.row_limit),
            output_dir: env::var("OUTPUT_DIR").unwrap_or(defaults.output_dir),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
