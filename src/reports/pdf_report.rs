use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::*;
use printpdf::path::PaintMode;

use crate::models::listing::Listing;
use crate::models::summary::MarketSummary;

// US Letter, in mm.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 20.0;
const ROW_HEIGHT: f32 = 8.0;

const TABLE_HEADERS: [&str; 5] = ["Name", "Symbol", "Price (USD)", "Market Cap", "24h Change"];
const COLUMN_WIDTHS: [f32; 5] = [48.0, 22.0, 30.0, 44.0, 31.9];

/// Render the styled report: title, generation timestamp, summary
/// statistics as prose, the top-5 list, and the full listing table as a
/// bordered grid with a shaded header row. A fresh page is started only
/// when the grid overruns the bottom margin.
pub fn write_pdf(
    path: &Path,
    listings: &[Listing],
    summary: &MarketSummary,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (doc, page, layer) = PdfDocument::new(
        "Cryptocurrency Market Analysis Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "report",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut cursor = PAGE_HEIGHT - MARGIN;

    set_text_color(&layer, 0.0, 0.0, 0.0);
    layer.use_text(
        "Cryptocurrency Market Analysis Report",
        18.0,
        Mm(MARGIN),
        Mm(cursor),
        &bold,
    );
    cursor -= 10.0;

    layer.use_text(
        format!("Generated on: {}", summary.generated_at),
        10.0,
        Mm(MARGIN),
        Mm(cursor),
        &regular,
    );
    cursor -= 14.0;

    layer.use_text("Summary Statistics", 14.0, Mm(MARGIN), Mm(cursor), &bold);
    cursor -= 8.0;

    let prose = [
        format!("Total Cryptocurrencies: {}", summary.total_count),
        format!("Average Price (USD): ${}", summary.average_price),
        format!("Highest Priced Coin: {}", summary.highest_priced_name),
    ];
    for line in prose {
        layer.use_text(line, 10.0, Mm(MARGIN), Mm(cursor), &regular);
        cursor -= 6.0;
    }
    cursor -= 6.0;

    layer.use_text(
        "Top 5 Cryptocurrencies by Market Cap",
        14.0,
        Mm(MARGIN),
        Mm(cursor),
        &bold,
    );
    cursor -= 8.0;

    for (rank, top) in summary.top_by_market_cap.iter().enumerate() {
        layer.use_text(
            format!("{}. {}", rank + 1, top.name),
            10.0,
            Mm(MARGIN),
            Mm(cursor),
            &regular,
        );
        cursor -= 6.0;
    }
    cursor -= 6.0;

    layer.use_text("Cryptocurrency Data Table", 14.0, Mm(MARGIN), Mm(cursor), &bold);
    cursor -= 10.0;

    let headers: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    draw_table_row(&layer, &bold, cursor, &headers, true);
    cursor -= ROW_HEIGHT;

    for listing in listings {
        if cursor < MARGIN + ROW_HEIGHT {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
            layer = doc.get_page(next_page).get_layer(next_layer);
            cursor = PAGE_HEIGHT - MARGIN;
        }

        let cells = [
            listing.name.clone(),
            listing.symbol.clone(),
            price_text(listing.price_usd),
            listing.market_cap.clone(),
            listing.change_24h.clone(),
        ];
        draw_table_row(&layer, &regular, cursor, &cells, false);
        cursor -= ROW_HEIGHT;
    }

    doc.save(&mut BufWriter::new(File::create(path)?))?;
    Ok(())
}

/// One grid row: filled background, stroked cell borders, then the cell
/// text clipped to its column.
fn draw_table_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    top: f32,
    cells: &[String],
    is_header: bool,
) {
    let bottom = top - ROW_HEIGHT;

    // lightblue header band, beige body rows
    let background = if is_header {
        Rgb::new(0.678, 0.847, 0.902, None)
    } else {
        Rgb::new(0.961, 0.961, 0.863, None)
    };
    layer.set_fill_color(Color::Rgb(background));
    layer.add_rect(
        Rect::new(Mm(MARGIN), Mm(bottom), Mm(PAGE_WIDTH - MARGIN), Mm(top))
            .with_mode(PaintMode::Fill),
    );

    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(0.4);
    let mut x = MARGIN;
    for width in COLUMN_WIDTHS {
        layer.add_rect(
            Rect::new(Mm(x), Mm(bottom), Mm(x + width), Mm(top)).with_mode(PaintMode::Stroke),
        );
        x += width;
    }

    if is_header {
        set_text_color(layer, 0.96, 0.96, 0.96);
    } else {
        set_text_color(layer, 0.0, 0.0, 0.0);
    }

    let mut x = MARGIN;
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        // Helvetica at 9pt runs about 2mm per character.
        let max_chars = (width / 2.0) as usize;
        layer.use_text(truncated(cell, max_chars), 9.0, Mm(x + 1.5), Mm(bottom + 2.5), font);
        x += width;
    }
}

fn set_text_color(layer: &PdfLayerReference, r: f32, g: f32, b: f32) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn price_text(price: Option<f64>) -> String {
    match price {
        Some(value) => value.to_string(),
        None => "unavailable".to_string(),
    }
}

fn truncated(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
