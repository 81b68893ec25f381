//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod scan;
mod profile;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejections from the backend surface as `Err` with the serialized error
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a rejected invoke into a readable message
fn rejection_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use scan::*;
pub use profile::*;
