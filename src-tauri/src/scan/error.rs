//! Scan errors
//!
//! `ScanError` is the client-side failure. `ScanFailure` is the flat,
//! serializable form handed to the frontend.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("server responded with HTTP status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Parse(String),
    #[error("could not read image: {0}")]
    ImageRead(String),
}

/// Mirrors the frontend's error enum: `{ "kind": ..., "message": ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ScanFailure {
    ImageSelectionFailed(String),
    NetworkFailed(String),
    ParseFailed(String),
}

impl From<ScanError> for ScanFailure {
    fn from(err: ScanError) -> Self {
        let message = err.to_string();
        match err {
            ScanError::Timeout(_) | ScanError::Status(_) | ScanError::Transport(_) => {
                ScanFailure::NetworkFailed(message)
            }
            ScanError::Parse(_) => ScanFailure::ParseFailed(message),
            ScanError::ImageRead(_) => ScanFailure::ImageSelectionFailed(message),
        }
    }
}
