//! Pantry Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Profile/preferences storage
//! - scan: HTTP client for the food-detection endpoint
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;

mod config;
mod domain;
mod repository;
mod scan;
mod commands;

use config::AppConfig;
use repository::{init_db, InMemoryProfileStore, ProfileStore, SqliteProfileStore};
use scan::{ScanClient, ScanSource};

/// Application state shared across commands
pub struct AppState {
    pub scan: Arc<dyn ScanSource>,
    pub profiles: Arc<dyn ProfileStore>,
}

/// Open the SQLite store, falling back to memory if the db can't be opened
async fn open_profile_store(db_path: PathBuf) -> Arc<dyn ProfileStore> {
    match init_db(&db_path).await {
        Ok(db_state) => {
            let _ = rolling_logger::info(&format!("Database ready at {}", db_path.display()));
            Arc::new(SqliteProfileStore::new(db_state.conn))
        }
        Err(e) => {
            let _ = rolling_logger::error(&format!("DB init failed ({}), profile changes won't persist", e));
            Arc::new(InMemoryProfileStore::new())
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config_dir = app.path().app_config_dir()?;
            std::fs::create_dir_all(&config_dir)?;
            let config_path = config_dir.join(config::CONFIG_FILE);
            let mut config = AppConfig::load_file(&config_path)?;
            if !config_path.exists() {
                // Leave an editable copy of the defaults
                AppConfig::default().save(&config_path)?;
            }

            rolling_logger::init_logger(
                app.path().app_log_dir()?,
                "Pantry",
                rolling_logger::LoggerOptions {
                    max_file_bytes: config.log.max_file_bytes,
                    max_files: config.log.max_files,
                },
            )?;
            for (key, value) in config.apply_env(|key| std::env::var(key).ok()) {
                let _ = rolling_logger::warn(&format!("Ignoring {}={:?}", key, value));
            }
            log::info!(
                "Scan endpoint configured (timeout {}s, upload {})",
                config.scan.timeout_secs,
                config.scan.upload_image
            );

            let data_dir = app.path().app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;
            let profiles = tauri::async_runtime::block_on(open_profile_store(data_dir.join("pantry.db")));

            let scan = ScanClient::new(config.scan.clone())?;

            app.manage(AppState {
                scan: Arc::new(scan),
                profiles,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::pick_image,
            commands::fetch_detected_items,
            commands::load_profile,
            commands::save_profile,
            commands::load_preferences,
            commands::save_preferences,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
