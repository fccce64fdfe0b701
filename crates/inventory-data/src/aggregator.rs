//! Date filtering and totals over parsed report rows.

use chrono::NaiveDate;
use inventory_core::models::{InventoryRecord, RawRow, SummaryTotals};
use inventory_core::time_utils::{cutoff_date, is_older_than, parse_report_date};
use tracing::{debug, trace};

// ── FilterOutcome ─────────────────────────────────────────────────────────────

/// Records that survived the age filter, plus bookkeeping about the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Aged records in input order.
    pub records: Vec<InventoryRecord>,
    /// Records dated on or after this day were dropped.
    pub cutoff: NaiveDate,
    /// Rows whose date token is not a real date.
    pub invalid_dates: usize,
    /// Rows that are not old enough.
    pub too_recent: usize,
}

impl FilterOutcome {
    /// Totals over [`Self::records`].
    pub fn totals(&self) -> SummaryTotals {
        SummaryTotals::from_records(&self.records)
    }
}

// ── InventoryFilter ───────────────────────────────────────────────────────────

/// Keeps rows older than `max_age_days` relative to an injected `today`.
#[derive(Debug, Clone, Copy)]
pub struct InventoryFilter {
    cutoff: NaiveDate,
}

impl InventoryFilter {
    pub fn new(today: NaiveDate, max_age_days: u64) -> Self {
        Self {
            cutoff: cutoff_date(today, max_age_days),
        }
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    /// Parse each row's date, drop the unparsable and the recent ones.
    pub fn apply(&self, rows: Vec<RawRow>) -> FilterOutcome {
        let mut outcome = FilterOutcome {
            records: Vec::new(),
            cutoff: self.cutoff,
            invalid_dates: 0,
            too_recent: 0,
        };

        for row in rows {
            let date = match parse_report_date(&row.date) {
                Ok(d) => d,
                Err(e) => {
                    trace!("coil {}: {}", row.coil, e);
                    outcome.invalid_dates += 1;
                    continue;
                }
            };

            if is_older_than(date, self.cutoff) {
                outcome.records.push(InventoryRecord::from_raw(row, date));
            } else {
                outcome.too_recent += 1;
            }
        }

        debug!(
            "Cutoff {}: {} kept, {} too recent, {} invalid dates",
            self.cutoff,
            outcome.records.len(),
            outcome.too_recent,
            outcome.invalid_dates,
        );

        outcome
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Months};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn token(date: NaiveDate) -> String {
        date.format("%m%d%y").to_string()
    }

    fn raw(coil: &str, date: &str, pieces: u64, weight: u64) -> RawRow {
        RawRow {
            coil: coil.to_string(),
            kind: "HR".to_string(),
            part: "COIL".to_string(),
            date: date.to_string(),
            pieces,
            weight,
            warehouse: "W1".to_string(),
            status: "OPEN".to_string(),
        }
    }

    #[test]
    fn test_filter_cutoff_is_180_days() {
        let filter = InventoryFilter::new(ymd(2024, 7, 1), 180);
        assert_eq!(filter.cutoff(), ymd(2024, 1, 3));
    }

    #[test]
    fn test_filter_boundary_is_strict() {
        let today = ymd(2024, 7, 1);
        let cutoff = ymd(2024, 1, 3);
        let rows = vec![
            raw("OLD", &token(cutoff - Days::new(1)), 1, 1),
            raw("EDGE", &token(cutoff), 1, 1),
            raw("NEW", &token(cutoff + Days::new(1)), 1, 1),
        ];

        let outcome = InventoryFilter::new(today, 180).apply(rows);

        let coils: Vec<&str> = outcome.records.iter().map(|r| r.coil.as_str()).collect();
        assert_eq!(coils, vec!["OLD"]);
        assert_eq!(outcome.too_recent, 2);
        assert_eq!(outcome.invalid_dates, 0);
    }

    #[test]
    fn test_filter_drops_today_and_future() {
        let today = ymd(2024, 7, 1);
        let rows = vec![
            raw("TODAY", &token(today), 1, 1),
            raw("FUTURE", &token(ymd(2025, 1, 1)), 1, 1),
        ];
        let outcome = InventoryFilter::new(today, 180).apply(rows);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.too_recent, 2);
    }

    #[test]
    fn test_filter_drops_invalid_dates() {
        let today = ymd(2024, 7, 1);
        let rows = vec![
            raw("BAD-MONTH", "133122", 1, 1),
            raw("BAD-DAY", "023022", 1, 1),
            raw("GOOD", "010122", 5, 50),
        ];
        let outcome = InventoryFilter::new(today, 180).apply(rows);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].coil, "GOOD");
        assert_eq!(outcome.records[0].date, ymd(2022, 1, 1));
        assert_eq!(outcome.invalid_dates, 2);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let today = ymd(2024, 7, 1);
        let rows = vec![
            raw("B", "060122", 1, 1),
            raw("A", "010120", 1, 1),
            raw("C", "030321", 1, 1),
        ];
        let outcome = InventoryFilter::new(today, 180).apply(rows);
        let coils: Vec<&str> = outcome.records.iter().map(|r| r.coil.as_str()).collect();
        assert_eq!(coils, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_every_kept_record_is_before_cutoff() {
        let today = ymd(2024, 7, 1);
        let mut rows = Vec::new();
        let mut day = ymd(2023, 1, 1);
        while day <= today {
            rows.push(raw("X", &token(day), 1, 1));
            day = day + Days::new(7);
        }
        let outcome = InventoryFilter::new(today, 180).apply(rows);
        assert!(!outcome.records.is_empty());
        assert!(outcome.records.iter().all(|r| r.date < outcome.cutoff));
    }

    #[test]
    fn test_totals_over_filtered_set() {
        let today = ymd(2024, 7, 1);
        let old = token(today - Months::new(14));
        let recent = token(today - Months::new(1));
        let rows = vec![
            raw("C1", &old, 10, 500),
            raw("C1", &old, 4, 200),
            raw("C3", &old, 1, 75),
            raw("C2", &recent, 99, 9999),
        ];

        let totals = InventoryFilter::new(today, 180).apply(rows).totals();

        assert_eq!(
            totals,
            SummaryTotals {
                total_coils: 2,
                total_pieces: 15,
                total_weight: 775,
                total_lines: 3,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let outcome = InventoryFilter::new(ymd(2024, 7, 1), 180).apply(Vec::new());
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.totals(), SummaryTotals::default());
    }
}
