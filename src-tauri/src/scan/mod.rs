//! Scan Layer
//!
//! HTTP client for the food-detection endpoint.

mod error;
mod payload;
mod client;

pub use error::{ScanError, ScanFailure};
pub use payload::decode;
pub use client::{ScanClient, ScanSource};
