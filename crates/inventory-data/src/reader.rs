//! Line parser for fixed-width inventory reports.
//!
//! Walks the report line by line, drops the page-header blocks the report
//! generator repeats on every page, and matches data rows against the
//! positional row pattern to build [`RawRow`] values.

use std::io::Read;
use std::path::Path;

use inventory_core::error::{InventoryError, Result};
use inventory_core::models::RawRow;
use regex::Regex;
use tracing::{debug, trace};

/// Substring that opens a page-header block.
pub const PAGE_MARKER: &str = "Page";

/// Lines discarded after each page marker.
pub const HEADER_BLOCK_LINES: usize = 4;

/// Coil, type, part, date, unused 4-digit field, pieces, weight, warehouse,
/// status. Numeric fields accept ASCII digits only.
const ROW_PATTERN: &str =
    r"^(\S+)\s+(\S+)\s+(.+?)\s+([0-9]{6})\s+([0-9]{4})\s+([0-9]+)\s+([0-9]+)\s+(\S+)\s+(.+)";

// ── Parse outcome ─────────────────────────────────────────────────────────────

/// Why a line did not produce a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line carries the page marker.
    PageMarker,
    /// The line falls inside a page-header block.
    HeaderBlock,
    /// The line is empty or whitespace only.
    Blank,
    /// The first non-whitespace character is not a digit.
    NotDataRow,
    /// Starts with a digit but does not fit the row pattern.
    NoMatch,
    /// The named quantity column does not fit a `u64`.
    InvalidQuantity { field: &'static str },
}

/// Result of feeding one line to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Row(RawRow),
    Skipped(SkipReason),
}

/// Page-header tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Normal,
    /// This many more lines belong to the current header block.
    Skipping(usize),
}

// ── LineParser ────────────────────────────────────────────────────────────────

/// Stateful parser; feed it the report's lines in order.
#[derive(Debug)]
pub struct LineParser {
    row_re: Regex,
    state: HeaderState,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            row_re: Regex::new(ROW_PATTERN).expect("regex is valid"),
            state: HeaderState::Normal,
        }
    }

    /// Current page-header state.
    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Classify one line and advance the header state.
    pub fn parse_line(&mut self, line: &str) -> ParseOutcome {
        if let HeaderState::Skipping(remaining) = self.state {
            self.state = if remaining > 1 {
                HeaderState::Skipping(remaining - 1)
            } else {
                HeaderState::Normal
            };
            return ParseOutcome::Skipped(SkipReason::HeaderBlock);
        }

        if line.contains(PAGE_MARKER) {
            self.state = HeaderState::Skipping(HEADER_BLOCK_LINES);
            return ParseOutcome::Skipped(SkipReason::PageMarker);
        }

        let trimmed = line.trim_start();
        match trimmed.chars().next() {
            None => ParseOutcome::Skipped(SkipReason::Blank),
            Some(c) if !c.is_ascii_digit() => ParseOutcome::Skipped(SkipReason::NotDataRow),
            Some(_) => self.match_row(trimmed),
        }
    }

    /// Parse every line and keep only the rows, in input order.
    pub fn parse_lines<'a, I>(&mut self, lines: I) -> Vec<RawRow>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in lines.into_iter().enumerate() {
            match self.parse_line(line) {
                ParseOutcome::Row(row) => rows.push(row),
                ParseOutcome::Skipped(reason) => {
                    trace!("line {}: skipped ({:?})", idx + 1, reason);
                    skipped += 1;
                }
            }
        }

        debug!("Parsed {} rows, skipped {} lines", rows.len(), skipped);
        rows
    }

    fn match_row(&self, line: &str) -> ParseOutcome {
        let Some(caps) = self.row_re.captures(line) else {
            return ParseOutcome::Skipped(SkipReason::NoMatch);
        };

        let quantities = parse_quantity("pieces", &caps[6]).and_then(|pieces| {
            parse_quantity("weight", &caps[7]).map(|weight| (pieces, weight))
        });
        let (pieces, weight) = match quantities {
            Ok(pair) => pair,
            Err(InventoryError::InvalidQuantity { field, value }) => {
                trace!("{} column out of range: {}", field, value);
                return ParseOutcome::Skipped(SkipReason::InvalidQuantity { field });
            }
            Err(_) => return ParseOutcome::Skipped(SkipReason::NoMatch),
        };

        ParseOutcome::Row(RawRow {
            coil: caps[1].to_string(),
            kind: caps[2].to_string(),
            part: caps[3].to_string(),
            date: caps[4].to_string(),
            pieces,
            weight,
            warehouse: caps[8].to_string(),
            status: caps[9].trim_end().to_string(),
        })
    }
}

/// Convert a digit run to `u64`; overflow is the only failure the row
/// pattern leaves possible.
fn parse_quantity(field: &'static str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| InventoryError::InvalidQuantity {
            field,
            value: value.to_string(),
        })
}

// ── File loading ──────────────────────────────────────────────────────────────

/// Read `path` and return its data rows.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// report exports are often in a legacy code page.
pub fn read_report(path: &Path) -> Result<Vec<RawRow>> {
    let mut bytes = Vec::new();
    std::fs::File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|source| InventoryError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let text = String::from_utf8_lossy(&bytes);
    let rows = LineParser::new().parse_lines(text.lines());

    debug!("File {}: {} rows", path.display(), rows.len());
    Ok(rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
