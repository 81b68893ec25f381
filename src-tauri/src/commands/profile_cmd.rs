//! Profile Commands
//!
//! Tauri commands for the profile and food preferences.

use tauri::State;

use crate::AppState;
use crate::domain::{Preferences, Profile, ProfileUpdate};

#[tauri::command]
pub async fn load_profile(
    state: State<'_, AppState>,
) -> Result<Profile, String> {
    state.profiles.load_profile().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_profile(
    name: String,
    email: String,
    current_password: Option<String>,
    new_password: Option<String>,
    state: State<'_, AppState>,
) -> Result<Profile, String> {
    let update = ProfileUpdate { name, email, current_password, new_password };
    state.profiles.save_profile(&update).await.map_err(|e| {
        log::warn!("Profile save rejected: {}", e);
        e.to_string()
    })
}

#[tauri::command]
pub async fn load_preferences(
    state: State<'_, AppState>,
) -> Result<Preferences, String> {
    state.profiles.load_preferences().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_preferences(
    preferences: Preferences,
    state: State<'_, AppState>,
) -> Result<(), String> {
    state.profiles.save_preferences(&preferences).await.map_err(|e| {
        log::warn!("Preferences save rejected: {}", e);
        e.to_string()
    })
}
