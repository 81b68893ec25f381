//! Chat Screen
//!
//! Hosts the third-party chat widget page in a frame and opens the widget
//! by clicking its trigger once the page has had time to load.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Iframe;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

const WIDGET_PAGE: &str = "assets/chat/index.html";
const WIDGET_TRIGGER_SELECTOR: &str = ".vf-widget-trigger";
const WIDGET_OPEN_DELAY_MS: u32 = 2_000;

#[component]
pub fn ChatScreen(recipe: Option<String>) -> impl IntoView {
    let frame_ref = NodeRef::<Iframe>::new();
    // Disposed together with the screen
    let mounted = StoredValue::new(true);

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(WIDGET_OPEN_DELAY_MS).await;
            if !mounted.try_get_value().unwrap_or(false) {
                return;
            }
            if let Some(frame) = frame_ref.get_untracked() {
                open_widget(&frame);
            }
        });
    });

    let page = match recipe.as_deref() {
        Some(name) => format!("{}?recipe={}", WIDGET_PAGE, String::from(js_sys::encode_uri_component(name))),
        None => WIDGET_PAGE.to_string(),
    };

    view! {
        <div class="chat-screen">
            {recipe.map(|name| view! {
                <p class="chat-context">{format!("Asking about: {}", name)}</p>
            })}
            <div class="webview-container">
                <iframe node_ref=frame_ref class="webview" src=page title="Chat"></iframe>
            </div>
        </div>
    }
}

fn open_widget(frame: &web_sys::HtmlIFrameElement) {
    let trigger = frame
        .content_document()
        .and_then(|doc| doc.query_selector(WIDGET_TRIGGER_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match trigger {
        Some(button) => button.click(),
        None => web_sys::console::warn_1(&"[CHAT] widget trigger not found".into()),
    }
}
