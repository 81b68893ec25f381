//! Pantry Frontend App
//!
//! Root component: provides the store and navigation, then hands off to the
//! mobile shell.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::context::AppContext;
use crate::mobile::MobileShell;
use crate::navigation::NavStack;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new(signal(NavStack::default())));

    // Pull the saved profile once; seed values stay if the store is empty or unreachable
    spawn_local(async move {
        match commands::load_profile().await {
            Ok(profile) => store.profile().set(profile),
            Err(e) => web_sys::console::warn_1(&format!("[APP] profile load failed: {}", e).into()),
        }
    });

    view! { <MobileShell /> }
}
