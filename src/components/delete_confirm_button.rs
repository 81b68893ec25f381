//! Delete Confirm Button Component
//!
//! Inline two-step delete used inside the food detail popover.

use leptos::prelude::*;

/// Shows a ✕ button; after the first tap it asks "Remove?" with ✓/✗.
///
/// Clicks never propagate, so the surrounding food tile does not toggle its
/// popover while the user confirms.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        {move || if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Remove?"</span>
                    <button
                        class="confirm-btn"
                        aria-label="Confirm remove"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        class="cancel-btn"
                        aria-label="Keep item"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_confirming.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }.into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    aria-label="Remove item"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "✕"
                </button>
            }.into_any()
        }}
    }
}
