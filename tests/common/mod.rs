//! Fixture helpers shared by the integration tests. The markup mirrors
//! the listing page's row shape so the extractor can be exercised
//! offline.

/// One well-formed listing row (9 cells, name + symbol nested in cell 2).
pub fn listing_row(name: &str, symbol: &str, price: &str, market_cap: &str, change: &str) -> String {
    format!(
        "<tr><td>1</td><td>star</td>\
         <td><a href=\"/currencies/{slug}/\"><p>{name}</p>\
         <span class=\"coin-item-symbol\">{symbol}</span></a></td>\
         <td><span>{price}</span></td><td>{price}</td><td>{price}</td>\
         <td>{market_cap}</td><td>{change}</td><td>chart</td></tr>",
        slug = name.to_lowercase(),
        name = name,
        symbol = symbol,
        price = price,
        market_cap = market_cap,
        change = change,
    )
}

/// A row that fails the minimum column-count check.
pub fn malformed_row() -> String {
    "<tr><td>sponsored</td><td>slot</td></tr>".to_string()
}

/// Wrap rows in the page scaffolding the extractor selects against.
pub fn listing_page(rows: &[String]) -> String {
    format!(
        "<html><body><div id=\"__next\"><table>\
         <thead><tr><th>#</th><th></th><th>Name</th><th>Price</th></tr></thead>\
         <tbody>{}</tbody></table></div></body></html>",
        rows.join("")
    )
}

/// A small realistic page: five majors plus malformed filler rows.
pub fn sample_page() -> String {
    listing_page(&[
        listing_row("Bitcoin", "BTC", "$43,250.10", "$845,200,000,000", "2.15%"),
        malformed_row(),
        listing_row("Ethereum", "ETH", "$2,280.55", "$274,100,000,000", "-0.42%"),
        listing_row("Tether", "USDT", "$0.9998", "$91,300,000,000", "0.01%"),
        listing_row("BNB", "BNB", "$312.40", "$48,100,000,000", "1.10%"),
        malformed_row(),
        listing_row("Solana", "SOL", "$98.75", "$42,600,000,000", "5.32%"),
    ])
}
