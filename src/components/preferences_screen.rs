//! Preferences Screen
//!
//! Family size, dietary toggles and allergies, saved through the profile store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::forms::{parse_family_size, toggle_allergy};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PreferencesScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let form = RwSignal::new(store.preferences().get_untracked());
    let family_size = RwSignal::new(form.get_untracked().family_size.to_string());
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Refresh from the backend; keep the local copy if the store is unreachable
    spawn_local(async move {
        match commands::load_preferences().await {
            Ok(loaded) => {
                family_size.try_set(loaded.family_size.to_string());
                form.try_set(loaded.clone());
                store.preferences().set(loaded);
            }
            Err(e) => web_sys::console::warn_1(&format!("[PREFS] load failed: {}", e).into()),
        }
    });

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let size = match parse_family_size(&family_size.get_untracked()) {
            Ok(size) => size,
            Err(e) => {
                set_error.set(e.to_string());
                return;
            }
        };
        let mut prefs = form.get_untracked();
        prefs.family_size = size;
        set_error.set(String::new());
        set_saving.set(true);

        spawn_local(async move {
            match commands::save_preferences(&prefs).await {
                Ok(()) => {
                    store.preferences().set(prefs);
                    ctx.back();
                }
                Err(e) => {
                    set_error.try_set(format!("Failed to save preferences: {}", e));
                }
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <div class="preferences-screen">
            <h1 class="title">"Food Preferences"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            <section class="section">
                <h2 class="section-title">"Family Size"</h2>
                <input
                    type="number"
                    min="1"
                    class="input"
                    placeholder="Number of people"
                    prop:value=move || family_size.get()
                    on:input=move |ev| family_size.set(event_target_value(&ev))
                />
            </section>

            <section class="section">
                <h2 class="section-title">"Dietary Restrictions"</h2>
                <label class="toggle-row">
                    <span>"Vegetarian"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|p| p.vegetarian)
                        on:change=move |ev| form.update(|p| p.vegetarian = event_target_checked(&ev))
                    />
                </label>
                <label class="toggle-row">
                    <span>"Vegan"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|p| p.vegan)
                        on:change=move |ev| form.update(|p| p.vegan = event_target_checked(&ev))
                    />
                </label>
            </section>

            <section class="section">
                <h2 class="section-title">"Allergies"</h2>
                <For
                    each=move || form.with(|p| p.allergies.clone())
                    key=|allergy| allergy.id.clone()
                    children=move |allergy| {
                        let id = allergy.id.clone();
                        let checked_id = allergy.id.clone();
                        view! {
                            <label class="toggle-row">
                                <span>{allergy.name}</span>
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|p| {
                                        p.allergies.iter().any(|a| a.id == checked_id && a.selected)
                                    })
                                    on:change=move |_| form.update(|p| toggle_allergy(p, &id))
                                />
                            </label>
                        }
                    }
                />
            </section>

            <button class="save-btn" prop:disabled=move || saving.get() on:click=on_save>
                "Save Preferences"
            </button>
        </div>
    }
}
