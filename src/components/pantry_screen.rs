//! Pantry Screen
//!
//! Five shelves with a reset button and the entry to the scanner.

use leptos::prelude::*;

use crate::components::Shelf;
use crate::context::use_app_context;
use crate::navigation::Route;
use crate::seed::SHELF_COUNT;
use crate::store::{store_reset_inventory, use_app_store, AppStateStoreFields};

#[component]
pub fn PantryScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let item_count = move || store.inventory().read().len();

    view! {
        <div class="pantry-screen">
            <header class="pantry-header">
                <h1>"My Pantry"</h1>
                <div class="header-buttons">
                    <button
                        class="reset-btn"
                        title="Restore shelves"
                        on:click=move |_| store_reset_inventory(&store)
                    >
                        "↺"
                    </button>
                    <button
                        class="scanner-btn"
                        title="Scan groceries"
                        on:click=move |_| ctx.push(Route::Scanner)
                    >
                        "⌗"
                    </button>
                </div>
            </header>

            <div class="shelves-container">
                {(1..=SHELF_COUNT).map(|shelf_slot| view! { <Shelf shelf_slot=shelf_slot /> }).collect_view()}
            </div>

            <p class="item-count">{move || format!("{} items", item_count())}</p>
        </div>
    }
}
