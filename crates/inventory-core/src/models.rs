use chrono::NaiveDate;
use std::collections::HashSet;

/// One data row as matched in the text report, before its date is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Coil identifier (first column).
    pub coil: String,
    /// Material type code.
    pub kind: String,
    /// Free-text part description; may contain spaces.
    pub part: String,
    /// Six-digit `MMDDYY` date token, exactly as it appeared.
    pub date: String,
    /// Number of pieces on the coil.
    pub pieces: u64,
    /// Coil weight.
    pub weight: u64,
    /// Warehouse code.
    pub warehouse: String,
    /// Trailing status text.
    pub status: String,
}

/// A line item whose date has been parsed into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub coil: String,
    pub kind: String,
    pub part: String,
    pub date: NaiveDate,
    pub pieces: u64,
    pub weight: u64,
    pub warehouse: String,
    pub status: String,
}

impl InventoryRecord {
    /// Column headings for the detail sheet, in field order.
    pub const HEADERS: [&'static str; 8] = [
        "Coil", "Type", "Part", "Date", "Pieces", "Weight", "Whse", "Status",
    ];

    /// Promote a raw row once its date token has been parsed.
    pub fn from_raw(raw: RawRow, date: NaiveDate) -> Self {
        Self {
            coil: raw.coil,
            kind: raw.kind,
            part: raw.part,
            date,
            pieces: raw.pieces,
            weight: raw.weight,
            warehouse: raw.warehouse,
            status: raw.status,
        }
    }
}

/// Totals over the retained (aged) records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryTotals {
    /// Number of distinct coil identifiers.
    pub total_coils: u64,
    /// Sum of pieces.
    pub total_pieces: u64,
    /// Sum of weight.
    pub total_weight: u64,
    /// Number of records.
    pub total_lines: u64,
}

impl SummaryTotals {
    /// Column headings for the summary sheet.
    pub const HEADERS: [&'static str; 4] =
        ["Total Coils", "Total Pieces", "Total Weight", "Total Lines"];

    /// Compute all four totals in a single pass.
    pub fn from_records(records: &[InventoryRecord]) -> Self {
        let mut coils: HashSet<&str> = HashSet::new();
        let mut totals = Self::default();

        for record in records {
            coils.insert(record.coil.as_str());
            totals.total_pieces = totals.total_pieces.saturating_add(record.pieces);
            totals.total_weight = totals.total_weight.saturating_add(record.weight);
            totals.total_lines += 1;
        }

        totals.total_coils = coils.len() as u64;
        totals
    }

    /// Values in the same order as [`Self::HEADERS`].
    pub fn values(&self) -> [u64; 4] {
        [
            self.total_coils,
            self.total_pieces,
            self.total_weight,
            self.total_lines,
        ]
    }
}
