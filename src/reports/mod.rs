pub mod csv_report;
pub mod json_report;
pub mod pdf_report;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::models::listing::Listing;
use crate::models::summary::MarketSummary;

/// Paths of the three files produced by one reporting pass.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub pdf: PathBuf,
}

/// Write the CSV, JSON, and PDF outputs under `output_dir`, all sharing
/// one timestamp suffix. The directory is created if absent; any write
/// failure propagates to the caller.
pub fn write_reports(
    output_dir: &Path,
    listings: &[Listing],
    summary: &MarketSummary,
) -> Result<ReportPaths, Box<dyn std::error::Error + Send + Sync>> {
    fs::create_dir_all(output_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();

    let csv = output_dir.join(format!("crypto_data_{}.csv", timestamp));
    csv_report::write_csv(&csv, listings)?;
    tracing::info!("Wrote listing table to {}", csv.display());

    let json = output_dir.join(format!("crypto_summary_{}.json", timestamp));
    json_report::write_json(&json, summary)?;
    tracing::info!("Wrote summary to {}", json.display());

    let pdf = output_dir.join(format!("crypto_summary_{}.pdf", timestamp));
    pdf_report::write_pdf(&pdf, listings, summary)?;
    tracing::info!("Wrote PDF report to {}", pdf.display());

    Ok(ReportPaths { csv, json, pdf })
}
