//! Profile Edit Screen
//!
//! Name/email fields and password change. Validation runs locally before the
//! profile store is called.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, SaveProfileArgs};
use crate::context::use_app_context;
use crate::forms::{validate_profile, PasswordChange};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProfileEditScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = store.profile().get_untracked();
    let name = RwSignal::new(initial.name);
    let email = RwSignal::new(initial.email);
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error, set_error) = signal(String::new());

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let password = PasswordChange {
            current: current_password.get_untracked(),
            new: new_password.get_untracked(),
            confirm: confirm_password.get_untracked(),
        };
        let name_value = name.get_untracked();
        let email_value = email.get_untracked();

        if let Err(e) = validate_profile(&name_value, &email_value, &password) {
            set_error.set(e.to_string());
            return;
        }
        set_error.set(String::new());

        spawn_local(async move {
            let requested = password.is_requested();
            let args = SaveProfileArgs {
                name: name_value.trim(),
                email: email_value.trim(),
                current_password: requested.then_some(password.current.as_str()),
                new_password: requested.then_some(password.new.as_str()),
            };
            match commands::save_profile(&args).await {
                Ok(saved) => {
                    store.profile().set(saved);
                    ctx.back();
                }
                Err(e) => {
                    set_error.try_set(e);
                }
            }
        });
    };

    let text_input = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="label">{label}</label>
            <input
                type=kind
                class="input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <form class="profile-edit-screen" on:submit=on_save>
            <h1 class="title">"Edit Profile"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>

            <section class="section">
                {text_input("Name", "text", name)}
                {text_input("Email", "email", email)}
            </section>

            <section class="section">
                <h2 class="section-title">"Change Password"</h2>
                {text_input("Current Password", "password", current_password)}
                {text_input("New Password", "password", new_password)}
                {text_input("Confirm New Password", "password", confirm_password)}
            </section>

            <button type="submit" class="save-btn">"Save Changes"</button>
        </form>
    }
}
