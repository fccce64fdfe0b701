//! Date helpers for report tokens and the ageing cutoff.

use chrono::{Days, NaiveDate};

use crate::error::{InventoryError, Result};

/// Maximum age, in days, of inventory that is still considered current.
pub const DEFAULT_MAX_AGE_DAYS: u64 = 180;

/// Two-digit years at or above this value belong to the 1900s.
const CENTURY_PIVOT: u32 = 69;

/// Parse a six-digit `MMDDYY` token into a calendar date.
///
/// Two-digit years `00..=68` resolve to 2000–2068 and `69..=99` to
/// 1969–1999. Anything that is not exactly six ASCII digits naming a real
/// day is rejected.
pub fn parse_report_date(token: &str) -> Result<NaiveDate> {
    if token.len() != 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InventoryError::DateParse(token.to_string()));
    }

    // The token is ASCII digits only, so byte slicing is safe.
    let pair = |i: usize| token[i..i + 2].parse::<u32>().unwrap_or(0);
    let (month, day, yy) = (pair(0), pair(2), pair(4));
    let year = if yy >= CENTURY_PIVOT { 1900 + yy } else { 2000 + yy };

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| InventoryError::DateParse(token.to_string()))
}

/// `today` minus `max_age_days`, clamped at the earliest representable date.
pub fn cutoff_date(today: NaiveDate, max_age_days: u64) -> NaiveDate {
    today
        .checked_sub_days(Days::new(max_age_days))
        .unwrap_or(NaiveDate::MIN)
}

/// `true` when `date` is strictly earlier than `cutoff`.
pub fn is_older_than(date: NaiveDate, cutoff: NaiveDate) -> bool {
    date < cutoff
}
