//! Scan Commands
//!
//! Image picker and the scan fetch.

use std::path::Path;

use base64::Engine;
use serde::Serialize;
use tauri::{command, AppHandle, Runtime, State};
use tauri_plugin_dialog::DialogExt;

use crate::domain::DetectedItem;
use crate::scan::{ScanFailure, ScanSource};
use crate::AppState;

/// Larger images are picked without an inline preview
const MAX_PREVIEW_BYTES: u64 = 8 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickedImage {
    pub path: String,
    pub preview: Option<String>,
}

/// `data:` URL for the picked image, if it is small enough to inline
fn preview_data_url(path: &Path) -> Option<String> {
    let size = std::fs::metadata(path).ok()?.len();
    if size > MAX_PREVIEW_BYTES {
        log::info!("Skipping preview for {} ({} bytes)", path.display(), size);
        return None;
    }
    let bytes = std::fs::read(path).ok()?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Some(format!("data:{};base64,{}", mime, encoded))
}

#[command]
pub async fn pick_image<R: Runtime>(app: AppHandle<R>) -> Result<Option<PickedImage>, ScanFailure> {
    let picked = app
        .dialog()
        .file()
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "heic"])
        .blocking_pick_file();

    let Some(file) = picked else {
        log::info!("Image picker cancelled");
        return Ok(None);
    };

    let path = file.to_string();
    let preview = file.into_path().ok().and_then(|p| preview_data_url(&p));
    log::info!("Picked image {}", path);
    Ok(Some(PickedImage { path, preview }))
}

/// Run one scan against `source` and flatten the error for the frontend
pub async fn scan_with(
    source: &dyn ScanSource,
    image_path: Option<&str>,
) -> Result<Vec<DetectedItem>, ScanFailure> {
    source.fetch(image_path.map(Path::new)).await.map_err(|e| {
        log::error!("Scan failed: {}", e);
        ScanFailure::from(e)
    })
}

#[command]
pub async fn fetch_detected_items(
    image_path: Option<String>,
    state: State<'_, AppState>,
) -> Result<Vec<DetectedItem>, ScanFailure> {
    scan_with(state.scan.as_ref(), image_path.as_deref()).await
}
