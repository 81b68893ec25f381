//! Profile Commands
//!
//! Frontend bindings for the profile/preferences store.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, rejection_message};
use crate::models::{Preferences, Profile};

#[derive(Serialize)]
pub struct SaveProfileArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(rename = "currentPassword")]
    pub current_password: Option<&'a str>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<&'a str>,
}

#[derive(Serialize)]
struct PreferencesArgs<'a> {
    preferences: &'a Preferences,
}

pub async fn load_profile() -> Result<Profile, String> {
    let result = invoke("load_profile", JsValue::NULL).await.map_err(rejection_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_profile(args: &SaveProfileArgs<'_>) -> Result<Profile, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("save_profile", js_args).await.map_err(rejection_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn load_preferences() -> Result<Preferences, String> {
    let result = invoke("load_preferences", JsValue::NULL).await.map_err(rejection_message)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_preferences(preferences: &Preferences) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&PreferencesArgs { preferences }).map_err(|e| e.to_string())?;
    invoke("save_preferences", js_args).await.map_err(rejection_message)?;
    Ok(())
}
