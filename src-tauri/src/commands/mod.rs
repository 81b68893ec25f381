//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod scan_cmd;
mod profile_cmd;

pub use scan_cmd::*;
pub use profile_cmd::*;
