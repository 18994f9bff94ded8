use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::models::listing::Listing;

// Fixed cell positions on the listing page. The whole column map is
// page-layout knowledge and deliberately lives in this one module.
const NAME_CELL: usize = 2;
const PRICE_CELL: usize = 3;
const MARKET_CAP_CELL: usize = 6;
const CHANGE_24H_CELL: usize = 7;
const MIN_CELLS: usize = 7;

lazy_static! {
    static ref ROW_SELECTOR: Selector = Selector::parse("table tbody tr").unwrap();
    static ref CELL_SELECTOR: Selector = Selector::parse("td").unwrap();
    static ref NAME_SELECTOR: Selector = Selector::parse("p").unwrap();
    static ref SYMBOL_SELECTOR: Selector = Selector::parse("span.coin-item-symbol").unwrap();
    static ref CURRENCY_FORMATTING: Regex = Regex::new(r"[$,]").unwrap();
}

/// Extract up to `limit` listings from the page markup, in page order.
///
/// Rows with fewer than 7 cells are skipped. Missing name/symbol nodes
/// fall back to placeholders. A price cell that is still non-numeric
/// after currency formatting is stripped aborts the whole extraction:
/// the page layout has changed and partial results would be misleading.
pub fn extract_listings(
    html: &str,
    limit: usize,
) -> Result<Vec<Listing>, Box<dyn std::error::Error + Send + Sync>> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for row in document.select(&ROW_SELECTOR).take(limit) {
        let cells: Vec<ElementRef> = row.select(&CELL_SELECTOR).collect();

        if cells.len() < MIN_CELLS {
            tracing::debug!("Skipping malformed row with {} cells", cells.len());
            continue;
        }

        let name = cells[NAME_CELL]
            .select(&NAME_SELECTOR)
            .next()
            .map(|node| cell_text(&node))
            .unwrap_or_else(|| "Unknown".to_string());

        let symbol = cells[NAME_CELL]
            .select(&SYMBOL_SELECTOR)
            .next()
            .map(|node| cell_text(&node))
            .unwrap_or_else(|| "N/A".to_string());

        let price_usd = parse_price_cell(&cell_text(&cells[PRICE_CELL]))?;
        let market_cap = cell_text(&cells[MARKET_CAP_CELL]);

        // Some row variants stop at the market-cap column.
        let change_24h = cells
            .get(CHANGE_24H_CELL)
            .map(cell_text)
            .unwrap_or_else(|| "N/A".to_string());

        listings.push(Listing {
            name,
            symbol,
            price_usd: Some(price_usd),
            market_cap,
            change_24h,
        });
    }

    tracing::info!("Extracted {} listings from page markup", listings.len());
    Ok(listings)
}

/// Strip currency formatting (`$`, thousands separators) and parse the
/// remainder as a price.
pub fn parse_price_cell(raw: &str) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
    let cleaned = CURRENCY_FORMATTING.replace_all(raw, "");
    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("unparseable price cell: '{}'", raw.trim()).into())
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
