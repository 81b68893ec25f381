//! Scan endpoint response body
//!
//! `{ "data": [{ "Food": "Apple", "Expiry": "2024-05-01" }] }`

use serde::Deserialize;

use super::ScanError;
use crate::domain::{parse_expiry, DetectedItem};

#[derive(Debug, Deserialize)]
struct RawDetectedItem {
    #[serde(rename = "Food")]
    food: String,
    #[serde(rename = "Expiry")]
    expiry: String,
}

#[derive(Debug, Deserialize)]
struct ScanPayload {
    data: Vec<RawDetectedItem>,
}

/// Decode a response body. Item order is preserved.
pub fn decode(body: &[u8]) -> Result<Vec<DetectedItem>, ScanError> {
    let payload: ScanPayload =
        serde_json::from_slice(body).map_err(|e| ScanError::Parse(e.to_string()))?;

    payload
        .data
        .into_iter()
        .map(|raw| {
            let expiry = parse_expiry(&raw.expiry).ok_or_else(|| {
                ScanError::Parse(format!("bad expiry {:?} for {}", raw.expiry, raw.food))
            })?;
            Ok(DetectedItem { food: raw.food, expiry })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_decode_items_in_order() {
        let body = br#"{"data":[{"Food":"Apple","Expiry":"2024-05-01"},{"Food":"Milk","Expiry":"2024-04-28"}]}"#;
        let items = decode(body).unwrap();
        assert_eq!(
            items,
            vec![
                DetectedItem { food: "Apple".into(), expiry: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap() },
                DetectedItem { food: "Milk".into(), expiry: NaiveDate::from_ymd_opt(2024, 4, 28).unwrap() },
            ]
        );
    }

    #[test]
    fn test_decode_empty_list() {
        assert!(decode(br#"{"data":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode(b"<html>"), Err(ScanError::Parse(_))));
        assert!(matches!(decode(br#"{"items":[]}"#), Err(ScanError::Parse(_))));
        assert!(matches!(decode(br#"{"data":[{"Food":"Egg"}]}"#), Err(ScanError::Parse(_))));
        assert!(matches!(
            decode(br#"{"data":[{"Food":"Egg","Expiry":"soon"}]}"#),
            Err(ScanError::Parse(_))
        ));
    }
}
