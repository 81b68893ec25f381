//! Shelf Component
//!
//! One pantry shelf with its food tiles and the detail popover.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::FoodItem;
use crate::store::{store_delete_item, store_toggle_selection, use_app_store, AppStateStoreFields};

/// Renders the items currently on `shelf_slot`
#[component]
pub fn Shelf(shelf_slot: u8) -> impl IntoView {
    let store = use_app_store();

    let items = Memo::new(move |_| {
        store
            .inventory()
            .read()
            .shelves()
            .into_iter()
            .find(|(s, _)| *s == shelf_slot)
            .map(|(_, items)| items)
            .unwrap_or_default()
    });

    view! {
        <div class="shelf-container">
            <img class="shelf-image" src="assets/shelf.png" alt="" />
            <div class="items-container">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <FoodTile item=item /> }
                />
            </div>
        </div>
    }
}

#[component]
fn FoodTile(item: FoodItem) -> impl IntoView {
    let store = use_app_store();
    let id = item.id.clone();

    let is_open = {
        let id = id.clone();
        move || store.inventory().read().is_selected(&id)
    };

    let toggle_id = id.clone();
    let on_toggle = move |_| store_toggle_selection(&store, &toggle_id);

    let icon_src = format!("assets/food/{}.png", item.image_index);
    let icon_alt = item.name.clone();

    let popover = move || {
        if !is_open() {
            return None;
        }
        let delete_id = id.clone();
        Some(view! {
            <div class="hover-card" on:click=|ev| ev.stop_propagation()>
                <span class="item-name">{item.name.clone()}</span>
                <span class="expiry-date">
                    {format!("Expires: {}", item.expiry_date.format("%Y-%m-%d"))}
                </span>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| store_delete_item(&store, &delete_id))
                />
            </div>
        })
    };

    view! {
        <div class="food-item" on:click=on_toggle>
            <img class="food-icon" src=icon_src alt=icon_alt />
            {popover}
        </div>
    }
}
