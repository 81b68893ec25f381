//! Scan Commands
//!
//! Frontend bindings for the image picker and the scan fetch.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::{DetectedItem, PickedImage};
use crate::scan::ScanError;

#[derive(Serialize)]
struct FetchArgs<'a> {
    #[serde(rename = "imagePath")]
    image_path: Option<&'a str>,
}

/// Open the native picker. `Ok(None)` means the user cancelled.
pub async fn pick_image() -> Result<Option<PickedImage>, ScanError> {
    let result = invoke("pick_image", JsValue::NULL)
        .await
        .map_err(|e| ScanError::ImageSelectionFailed(super::rejection_message(e)))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| ScanError::ImageSelectionFailed(e.to_string()))
}

/// Ask the backend to call the scan endpoint
pub async fn fetch_detected_items(image_path: Option<&str>) -> Result<Vec<DetectedItem>, ScanError> {
    let js_args = serde_wasm_bindgen::to_value(&FetchArgs { image_path })
        .map_err(|e| ScanError::NetworkFailed(e.to_string()))?;
    match invoke("fetch_detected_items", js_args).await {
        Ok(result) => serde_wasm_bindgen::from_value(result).map_err(|e| ScanError::ParseFailed(e.to_string())),
        // Backend rejects with a tagged ScanError
        Err(err) => Err(serde_wasm_bindgen::from_value::<ScanError>(err.clone())
            .unwrap_or_else(|_| ScanError::NetworkFailed(super::rejection_message(err)))),
    }
}
