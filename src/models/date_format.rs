//! Lenient date parsing for session dates.
//!
//! Forms send a bare calendar day (`2026-03-15`) while stored sessions come
//! back as full timestamps (`2026-03-15T00:00:00Z`). Both decode to midnight
//! UTC on that day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, de::Error};

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` day.
pub fn parse_flexible(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// `deserialize_with` adapter for a required date.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flexible(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
}

/// `deserialize_with` adapter for an optional date; empty strings count as absent.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_flexible(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {value}"))),
    }
}
