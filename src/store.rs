//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::inventory::InventoryViewModel;
use crate::models::{Preferences, Profile, SettingOption};
use crate::seed;

/// State that outlives a single screen
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Pantry shelves and the open popover
    pub inventory: InventoryViewModel,
    /// Account settings rows
    pub settings: Vec<SettingOption>,
    /// Last saved profile fields
    pub profile: Profile,
    /// Last saved food preferences
    pub preferences: Preferences,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            inventory: InventoryViewModel::default(),
            settings: seed::settings(),
            profile: seed::profile(),
            preferences: seed::preferences(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_toggle_selection(store: &AppStore, item_id: &str) {
    store.inventory().write().toggle_selection(item_id);
}

pub fn store_delete_item(store: &AppStore, item_id: &str) {
    store.inventory().write().delete_item(item_id);
}

pub fn store_reset_inventory(store: &AppStore) {
    store.inventory().write().reset_to_seed();
}

pub fn store_toggle_setting(store: &AppStore, setting_id: &str) {
    crate::forms::toggle_setting(&mut store.settings().write(), setting_id);
}
