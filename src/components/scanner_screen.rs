//! Scanner Screen
//!
//! Drives [`ScanFlow`] from the picker and fetch commands. The flow lives in
//! a signal owned by this component; completions arriving after unmount hit
//! a disposed or detached flow and are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::DetectedItem;
use crate::scan::{RetryAction, ScanFlow, ScanState};

#[component]
pub fn ScannerScreen() -> impl IntoView {
    let ctx = use_app_context();
    let flow = RwSignal::new(ScanFlow::new());

    on_cleanup(move || {
        flow.try_update(|f| f.detach());
    });

    let run_fetch = move || {
        let Some(ticket) = flow.try_update(|f| f.begin_fetch()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = commands::fetch_detected_items(ticket.request.image_path.as_deref()).await;
            match &outcome {
                Ok(items) => web_sys::console::log_1(&format!("[SCAN] {} items detected", items.len()).into()),
                Err(err) => web_sys::console::warn_1(&format!("[SCAN] fetch failed: {}", err).into()),
            }
            flow.try_update(|f| f.complete(&ticket, outcome));
        });
    };

    let pick_image = move || {
        spawn_local(async move {
            match commands::pick_image().await {
                Ok(picked) => {
                    let accepted = flow.try_update(|f| f.image_picked(picked)).unwrap_or(false);
                    if accepted {
                        run_fetch();
                    }
                }
                Err(err) => {
                    flow.try_update(|f| f.image_pick_failed(err.message().to_string()));
                }
            }
        });
    };

    let retry = move || match flow.with(|f| f.retry_action()) {
        Some(RetryAction::FetchItems) => run_fetch(),
        Some(RetryAction::PickImage) => pick_image(),
        None => {}
    };

    let content = move || {
        let state = flow.with(|f| f.state().clone());
        match state {
            ScanState::Loading => view! {
                <div class="loading-container">
                    <div class="spinner"></div>
                    <p class="loading-text">{move || flow.with(|f| f.loading_message())}</p>
                </div>
            }.into_any(),
            ScanState::Error(err) => view! {
                <div class="error-container">
                    <p class="error-text">{err.to_string()}</p>
                    <button class="retry-btn" on:click=move |_| retry()>"Try Again"</button>
                </div>
            }.into_any(),
            ScanState::Results(items) => view! {
                <DetectedItemList items=items />
                <button class="scan-btn" on:click=move |_| pick_image()>"Scan Another Image"</button>
            }.into_any(),
            ScanState::Idle | ScanState::ImageSelected => view! {
                <button class="upload-btn" on:click=move |_| pick_image()>
                    "Select Image from Gallery"
                </button>
            }.into_any(),
        }
    };

    let preview = move || {
        flow.with(|f| f.image().and_then(|img| img.preview.clone()))
            .map(|src| view! { <img class="scan-preview" src=src alt="Selected groceries" /> })
    };

    view! {
        <div class="scanner-screen">
            <header class="scanner-header">
                <button class="close-btn" aria-label="Close" on:click=move |_| ctx.back()>"✕"</button>
                <Show when=move || flow.with(|f| f.can_reset())>
                    <button
                        class="reset-btn"
                        aria-label="Start over"
                        on:click=move |_| flow.update(|f| f.reset())
                    >
                        "↺"
                    </button>
                </Show>
            </header>
            <div class="content-container">
                {preview}
                {content}
            </div>
        </div>
    }
}

#[component]
fn DetectedItemList(items: Vec<DetectedItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <p class="results-empty">"No items detected"</p> }.into_any();
    }

    view! {
        <div class="results-container">
            <h2 class="results-title">"Items Added:"</h2>
            {items.into_iter().map(|item| view! {
                <div class="item-row">
                    <span class="item-name">{item.food}</span>
                    <span class="expiry-date">{item.expiry.format("%b %-d, %Y").to_string()}</span>
                </div>
            }).collect_view()}
        </div>
    }.into_any()
}
