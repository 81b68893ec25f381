//! Mobile Shell
//!
//! Stack header, the current screen and the bottom tab bar.

use leptos::prelude::*;

use crate::components::{
    AccountScreen, ChatScreen, NotificationScreen, PantryScreen, PreferencesScreen,
    ProfileEditScreen, ScannerScreen,
};
use crate::context::use_app_context;
use crate::navigation::Route;

/// Screen area plus bottom tab navigation
#[component]
pub fn MobileShell() -> impl IntoView {
    let ctx = use_app_context();

    let can_go_back = move || ctx.nav.with(|nav| nav.depth() > 1);
    let title = move || ctx.nav.with(|nav| nav.current().title());

    view! {
        <div class="mobile-app-container">
            <Show when=can_go_back>
                <header class="stack-header">
                    <button class="back-btn" on:click=move |_| ctx.back()>"‹"</button>
                    <span class="stack-title">{title}</span>
                </header>
            </Show>

            // Main content area
            <div class="mobile-content">
                {move || match ctx.current() {
                    Route::Pantry => view! { <PantryScreen /> }.into_any(),
                    Route::Scanner => view! { <ScannerScreen /> }.into_any(),
                    Route::Notifications => view! { <NotificationScreen /> }.into_any(),
                    Route::Chat { recipe } => view! { <ChatScreen recipe=recipe /> }.into_any(),
                    Route::Account => view! { <AccountScreen /> }.into_any(),
                    Route::Preferences => view! { <PreferencesScreen /> }.into_any(),
                    Route::ProfileEdit => view! { <ProfileEditScreen /> }.into_any(),
                }}
            </div>

            // Bottom navigation
            <nav class="mobile-bottom-nav">
                {Route::TABS.into_iter().map(|tab| {
                    let label = tab_label(&tab);
                    let icon = tab_icon(&tab);
                    let active_tab = tab.clone();
                    view! {
                        <button
                            class=move || {
                                if ctx.nav.with(|nav| nav.current().tab() == active_tab) {
                                    "mobile-nav-item active"
                                } else {
                                    "mobile-nav-item"
                                }
                            }
                            on:click=move |_| ctx.select_tab(tab.clone())
                        >
                            <div class="mobile-nav-icon">{icon}</div>
                            <div class="mobile-nav-label">{label}</div>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

fn tab_label(tab: &Route) -> &'static str {
    match tab {
        Route::Pantry => "Pantry",
        Route::Notifications => "Alerts",
        Route::Chat { .. } => "Chat",
        _ => "Account",
    }
}

fn tab_icon(tab: &Route) -> &'static str {
    match tab {
        Route::Pantry => "🥫",
        Route::Notifications => "🔔",
        Route::Chat { .. } => "💬",
        _ => "👤",
    }
}
