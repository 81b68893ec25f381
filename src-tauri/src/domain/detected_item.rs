//! Detected Item
//!
//! Food/expiry pair produced by the scan endpoint.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedItem {
    pub food: String,
    pub expiry: NaiveDate,
}

/// Accepts a plain ISO date (`2024-05-01`) or an RFC 3339 timestamp. A
/// timestamp is converted to the device's local calendar date.
pub fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_expiry("2024-05-01"), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(parse_expiry(" 2024-05-01 "), NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_parse_timestamp() {
        let expected = DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(parse_expiry("2024-05-01T12:00:00Z"), Some(expected));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_expiry("next tuesday"), None);
        assert_eq!(parse_expiry(""), None);
    }
}
