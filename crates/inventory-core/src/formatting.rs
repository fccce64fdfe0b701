use chrono::NaiveDate;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::models::SummaryTotals;

/// Rendering used for dates in the spreadsheet and when sizing columns.
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// Render a record date the way it appears in the workbook.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inventory_core::formatting::format_date;
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(format_date(d), "2024-01-05");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Number of terminal columns `text` occupies.
///
/// Wide (CJK) characters count as two, combining marks as zero.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Width for a spreadsheet column: the widest cell plus two columns of padding.
///
/// Cells are measured in display columns, not characters, so a part
/// description with wide (CJK) text gets a column as wide as it renders.
///
/// # Examples
///
/// ```
/// use inventory_core::formatting::padded_width;
///
/// assert_eq!(padded_width(["Coil", "C100234"]), 9);
/// assert_eq!(padded_width(Vec::<&str>::new()), 2);
/// ```
pub fn padded_width<I, S>(cells: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .map(|c| display_width(c.as_ref()))
        .max()
        .unwrap_or(0)
        + 2
}

/// Lines printed on stdout once the workbook has been saved.
pub fn summary_lines(output: &Path, totals: &SummaryTotals) -> Vec<String> {
    vec![
        format!("Filtered inventory saved to {}", output.display()),
        format!("Total Coils: {}", totals.total_coils),
        format!("Total Pieces: {}", totals.total_pieces),
        format!("Total Weight: {}", totals.total_weight),
        format!("Total Lines: {}", totals.total_lines),
    ]
}

// ── Tests ──────────────────────────────────────────────────────────────────────
