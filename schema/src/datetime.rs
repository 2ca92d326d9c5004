//! Timestamp decoding and display.
//!
//! The API emits RFC 3339 date-times for most fields, but snapshot capture
//! dates are sometimes plain `YYYY-MM-DD`. Both decode to UTC; a bare date
//! means midnight.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parse an RFC 3339 date-time or a bare `YYYY-MM-DD` date.
#[must_use]
pub fn parse_lenient(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_date_input(raw).map(midnight_utc)
}

/// Parse the value of an `<input type="date">` (`YYYY-MM-DD`).
#[must_use]
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[must_use]
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

/// Long date such as `January 1st, 2024`.
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {day}{}, {}", date.format("%B"), ordinal_suffix(day), date.year())
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Deserialize a required timestamp with [`parse_lenient`].
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_lenient(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Deserialize an optional timestamp with [`parse_lenient`]; `null` is `None`.
pub fn deserialize_lenient_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_lenient(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
    }
}
