//! History-API router.
//!
//! All `window.history` access is concentrated here. Role admission is
//! not this module's job (see `components::guard`); the router only
//! parses paths, drives the outlet signal, and sends every unmatched
//! path to `/login`. It also carries the one piece of navigation state
//! the app has: the employee-dashboard tab requested by a notification
//! click.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, EmployeeTab};

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Tab the employee dashboard should open on, set by navigation
    /// sources that carry state (notification clicks). Consumed once.
    pending_tab: RwSignal<Option<EmployeeTab>>,
}

impl RouterService {
    fn new() -> Self {
        // Unmatched initial paths land on /login without a history entry.
        let initial = match AppRoute::from_path(&current_path()) {
            Some(route) => route,
            None => {
                let fallback = AppRoute::Login;
                replace_history_state(fallback.to_path());
                fallback
            }
        };
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            pending_tab: RwSignal::new(None),
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigates with a new history entry.
    pub fn navigate(&self, route: AppRoute) {
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// Navigates replacing the current entry; used by redirects so the
    /// back button does not bounce.
    pub fn replace(&self, route: AppRoute) {
        replace_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// Navigation carrying a default tab for the employee dashboard.
    pub fn navigate_with_tab(&self, route: AppRoute, tab: EmployeeTab) {
        self.pending_tab.set(Some(tab));
        self.navigate(route);
    }

    /// Takes the pending default tab, if a navigation supplied one.
    pub fn take_pending_tab(&self) -> Option<EmployeeTab> {
        self.pending_tab.try_update(|t| t.take()).flatten()
    }

    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            match AppRoute::from_path(&current_path()) {
                Some(route) => set_route.set(route),
                None => {
                    let fallback = AppRoute::Login;
                    replace_history_state(fallback.to_path());
                    set_route.set(fallback);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure; the listener lives as long as the app.
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// =========================================================
// UI components
// =========================================================

/// Router root; provides the service to context. Use at the top of App.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// Renders the view the matcher picks for the current route.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
