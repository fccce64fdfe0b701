use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use inventory_core::models::SummaryTotals;
use inventory_core::settings::ReportConfig;
use inventory_data::aggregator::InventoryFilter;
use inventory_data::reader::read_report;
use inventory_report::workbook::ReportWriter;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub totals: SummaryTotals,
}

/// Parse `input`, keep records older than `config.max_age_days` relative to
/// `today`, and write the workbook.
pub fn run(input: &Path, config: &ReportConfig, today: NaiveDate) -> Result<RunSummary> {
    let rows = read_report(input)?;
    tracing::info!("Read {} data rows from {}", rows.len(), input.display());

    let outcome = InventoryFilter::new(today, config.max_age_days).apply(rows);
    let totals = outcome.totals();

    let output = ReportWriter::new(config.clone())
        .write(&outcome.records, &totals)
        .context("writing the inventory workbook")?;

    Ok(RunSummary { output, totals })
}
