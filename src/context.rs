//! Application Context
//!
//! Navigation signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::navigation::{NavStack, Route};

/// App-wide navigation handle
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route history - read
    pub nav: ReadSignal<NavStack>,
    /// Route history - write
    set_nav: WriteSignal<NavStack>,
}

impl AppContext {
    pub fn new(nav: (ReadSignal<NavStack>, WriteSignal<NavStack>)) -> Self {
        Self {
            nav: nav.0,
            set_nav: nav.1,
        }
    }

    /// Route currently on screen
    pub fn current(&self) -> Route {
        self.nav.with(|nav| nav.current().clone())
    }

    pub fn push(&self, route: Route) {
        web_sys::console::log_1(&format!("[NAV] push {:?}", route).into());
        self.set_nav.update(|nav| nav.push(route));
    }

    pub fn back(&self) {
        self.set_nav.update(|nav| {
            nav.back();
        });
    }

    pub fn select_tab(&self, tab: Route) {
        self.set_nav.update(|nav| nav.select_tab(tab));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
