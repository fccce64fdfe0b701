//! Two-sheet workbook writer.
//!
//! Sheet one lists every aged record, sheet two holds the single row of
//! totals. Both get the shared header style and columns sized to their
//! widest rendered cell.

use std::path::PathBuf;

use chrono::Datelike;
use inventory_core::error::{InventoryError, Result};
use inventory_core::formatting::{format_date, padded_width};
use inventory_core::models::{InventoryRecord, SummaryTotals};
use inventory_core::settings::ReportConfig;
use rust_xlsxwriter::{ExcelDateTime, Workbook, Worksheet};
use tracing::{debug, info};

use crate::styles::ReportStyles;

const DETAIL_COLUMNS: usize = InventoryRecord::HEADERS.len();
const SUMMARY_COLUMNS: usize = SummaryTotals::HEADERS.len();

// ── Column sizing ─────────────────────────────────────────────────────────────

/// Text a detail row shows, column by column.
pub fn render_detail_row(record: &InventoryRecord) -> [String; DETAIL_COLUMNS] {
    [
        record.coil.clone(),
        record.kind.clone(),
        record.part.clone(),
        format_date(record.date),
        record.pieces.to_string(),
        record.weight.to_string(),
        record.warehouse.clone(),
        record.status.clone(),
    ]
}

/// Text the summary row shows, column by column.
pub fn render_summary_row(totals: &SummaryTotals) -> [String; SUMMARY_COLUMNS] {
    totals.values().map(|v| v.to_string())
}

/// Per-column width: longest of the header and every rendered cell, plus 2.
pub fn column_widths<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> [usize; N] {
    std::array::from_fn(|col| {
        padded_width(std::iter::once(headers[col]).chain(rows.iter().map(|r| r[col].as_str())))
    })
}

// ── ReportWriter ──────────────────────────────────────────────────────────────

/// Writes the aged-inventory workbook described by a [`ReportConfig`].
pub struct ReportWriter {
    config: ReportConfig,
    styles: ReportStyles,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            styles: ReportStyles::default(),
        }
    }

    /// Build the workbook and save it, returning the path written.
    ///
    /// The file is only created once the whole workbook has been assembled,
    /// so a failure part-way leaves no partial output behind.
    pub fn write(&self, records: &[InventoryRecord], totals: &SummaryTotals) -> Result<PathBuf> {
        let mut workbook = self.build(records, totals)?;
        let buffer = workbook.save_to_buffer()?;

        let path = &self.config.output_path;
        std::fs::write(path, buffer).map_err(|source| InventoryError::FileWrite {
            path: path.clone(),
            source,
        })?;

        info!("Wrote {} records to {}", records.len(), path.display());
        Ok(path.clone())
    }

    /// Assemble both sheets in memory.
    pub fn build(&self, records: &[InventoryRecord], totals: &SummaryTotals) -> Result<Workbook> {
        let mut workbook = Workbook::new();

        let detail = workbook.add_worksheet();
        detail.set_name(&self.config.detail_sheet)?;
        self.write_detail(detail, records)?;

        let summary = workbook.add_worksheet();
        summary.set_name(&self.config.summary_sheet)?;
        self.write_summary(summary, totals)?;

        Ok(workbook)
    }

    fn write_detail(&self, sheet: &mut Worksheet, records: &[InventoryRecord]) -> Result<()> {
        self.write_headers(sheet, &InventoryRecord::HEADERS)?;

        for (idx, record) in records.iter().enumerate() {
            let row = (idx + 1) as u32;
            let date = ExcelDateTime::from_ymd(
                record.date.year() as u16,
                record.date.month() as u8,
                record.date.day() as u8,
            )?;

            sheet.write_string(row, 0, &record.coil)?;
            sheet.write_string(row, 1, &record.kind)?;
            sheet.write_string(row, 2, &record.part)?;
            sheet.write_datetime_with_format(row, 3, &date, &self.styles.date)?;
            sheet.write_number(row, 4, record.pieces as f64)?;
            sheet.write_number(row, 5, record.weight as f64)?;
            sheet.write_string(row, 6, &record.warehouse)?;
            sheet.write_string(row, 7, &record.status)?;
        }

        let rendered: Vec<_> = records.iter().map(render_detail_row).collect();
        let widths = column_widths(&InventoryRecord::HEADERS, &rendered);
        apply_widths(sheet, &widths)?;

        debug!("Detail sheet: {} rows, widths {:?}", records.len(), widths);
        Ok(())
    }

    fn write_summary(&self, sheet: &mut Worksheet, totals: &SummaryTotals) -> Result<()> {
        self.write_headers(sheet, &SummaryTotals::HEADERS)?;

        for (col, value) in totals.values().into_iter().enumerate() {
            sheet.write_number(1, col as u16, value as f64)?;
        }

        let widths = column_widths(&SummaryTotals::HEADERS, &[render_summary_row(totals)]);
        apply_widths(sheet, &widths)
    }

    fn write_headers(&self, sheet: &mut Worksheet, headers: &[&str]) -> Result<()> {
        for (col, title) in headers.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &self.styles.header)?;
        }
        Ok(())
    }
}

fn apply_widths(sheet: &mut Worksheet, widths: &[usize]) -> Result<()> {
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *width as f64)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
