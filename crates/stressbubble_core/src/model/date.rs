//! Calendar date keys (`YYYY-MM-DD`).
//!
//! The store treats date keys as opaque strings. Helpers here are for
//! boundary code (service, navigation) that needs real calendar semantics.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// chrono accepts unpadded fields, so the shape is checked separately.
static DATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date key regex"));

/// Parses a strict `YYYY-MM-DD` key into a calendar date.
///
/// Returns `None` for malformed shapes and impossible dates (`2024-02-30`).
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    if !DATE_KEY_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_KEY_FORMAT).ok()
}

/// Returns whether `value` is a well-formed, existing calendar date key.
pub fn is_valid_date_key(value: &str) -> bool {
    parse_date_key(value).is_some()
}

/// Formats a calendar date as a store key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Today's key in the local time zone.
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// Moves a key by `days` (negative for the past).
///
/// Returns `None` when `key` is not a valid date or the result overflows the
/// supported calendar range.
pub fn shift_date_key(key: &str, days: i64) -> Option<String> {
    let date = parse_date_key(key)?;
    let delta = TimeDelta::try_days(days)?;
    date.checked_add_signed(delta).map(date_key)
}

/// Returns whether `key` is a valid date inside `year`/`month` (1-based).
pub fn is_in_month(key: &str, year: i32, month: u32) -> bool {
    parse_date_key(key).is_some_and(|date| date.year() == year && date.month() == month)
}
