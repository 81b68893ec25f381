//! Pantry Frontend Entry Point

mod models;
mod seed;
mod navigation;
mod inventory;
mod scan;
mod notifications;
mod forms;
mod commands;
mod context;
mod store;
mod components;
mod app;
mod mobile;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
