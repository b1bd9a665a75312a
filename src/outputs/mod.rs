//! Report rendering and writing.
//!
//! # Submodules
//!
//! - [`text`]: Plain text report with fixed-width separators
//! - [`markdown`]: Markdown report with linked article headings
//! - [`json`]: The [`Report`] serialized with `serde_json`
//!
//! The rendered report is written to a single file, by default
//! `news_report.{txt,md,json}` in the working directory.

use crate::cli::ReportFormat;
use crate::models::Report;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

pub mod json;
pub mod markdown;
pub mod text;

/// Render `report` in the requested format.
pub fn render(report: &Report, format: ReportFormat) -> Result<String, Box<dyn Error>> {
    match format {
        ReportFormat::Text => Ok(text::report_to_text(report)),
        ReportFormat::Markdown => Ok(markdown::report_to_markdown(report)),
        ReportFormat::Json => json::report_to_json(report),
    }
}

/// Render and write the report, creating parent directories as needed.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_report(
    report: &Report,
    format: ReportFormat,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let rendered = render(report, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, rendered.as_bytes()).await?;
    info!(bytes = rendered.len(), entries = report.entry_count(), "Wrote report");
    Ok(())
}
