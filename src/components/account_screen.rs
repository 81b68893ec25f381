//! Account Screen
//!
//! Profile card, tracked ingredients and the settings list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{SettingKind, SettingOption};
use crate::navigation::Route;
use crate::seed;
use crate::store::{store_toggle_setting, use_app_store, AppStateStoreFields};

#[component]
pub fn AccountScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let ingredients = seed::account_ingredients();

    view! {
        <div class="account-screen">
            <section class="section">
                <h2 class="section-title">"Profile"</h2>
                <div class="profile-card" on:click=move |_| ctx.push(Route::ProfileEdit)>
                    <span class="avatar">"👤"</span>
                    <div class="profile-info">
                        <span class="profile-name">{move || store.profile().read().name.clone()}</span>
                        <span class="profile-email">{move || store.profile().read().email.clone()}</span>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">"My Ingredients"</h2>
                {ingredients.into_iter().map(|ingredient| view! {
                    <div class="ingredient-card">
                        <div class="ingredient-info">
                            <span class="ingredient-name">{ingredient.name}</span>
                            <span class="ingredient-details">
                                {format!(
                                    "{} · Expires {}",
                                    ingredient.quantity,
                                    ingredient.expiry_date.format("%-m/%-d/%Y"),
                                )}
                            </span>
                        </div>
                    </div>
                }).collect_view()}
            </section>

            <section class="section">
                <h2 class="section-title">"Settings"</h2>
                <For
                    each=move || store.settings().get()
                    key=|setting| (setting.id.clone(), setting.value)
                    children=move |setting| view! { <SettingRow setting=setting /> }
                />
            </section>
        </div>
    }
}

#[component]
fn SettingRow(setting: SettingOption) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = setting.id.clone();

    let on_press = {
        let target = setting.target_route.clone();
        let title = setting.title.clone();
        move |_| {
            if setting.kind != SettingKind::Action {
                return;
            }
            match &target {
                Some(route) => ctx.push(route.clone()),
                None => web_sys::console::log_1(&format!("[ACCOUNT] {}", title).into()),
            }
        }
    };

    let control = match setting.kind {
        SettingKind::Toggle => view! {
            <input
                type="checkbox"
                class="setting-switch"
                prop:checked=setting.value.unwrap_or(false)
                on:change=move |_| store_toggle_setting(&store, &id)
            />
        }.into_any(),
        SettingKind::Action => view! { <span class="chevron">"›"</span> }.into_any(),
    };

    view! {
        <div class="setting-card" on:click=on_press>
            <span class="setting-title">{setting.title.clone()}</span>
            {control}
        </div>
    }
}
