//! Session store: the current principal, the bearer token and the
//! rehydration load flag.
//!
//! The token is the only durable state this client owns (localStorage
//! key `token`). The principal exists iff the token has not been
//! rejected by `/users/me`; only this module and the gateway's 401
//! handler mutate the pair.

use crate::api::{ApiClient, ApiError};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{TOKEN_STORAGE_KEY, TokenResponse, UserResponse};
use wasm_bindgen::prelude::*;

/// Process-wide session handle. Plain `Copy` signal bundle so the
/// gateway, the route guard and the notification center can all hold it.
#[derive(Clone, Copy)]
pub struct Session {
    pub principal: RwSignal<Option<UserResponse>>,
    pub token: RwSignal<Option<String>>,
    /// True while a stored token is being verified against `/users/me`.
    /// No route guard may admit or deny while this is set.
    pub loading: RwSignal<bool>,
}

impl Session {
    /// Reads any persisted token. `loading` starts true exactly when
    /// there is a token to verify.
    pub fn new() -> Self {
        let stored = LocalStorage::raw()
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty());
        let loading = stored.is_some();
        Self {
            principal: RwSignal::new(None),
            token: RwSignal::new(stored),
            loading: RwSignal::new(loading),
        }
    }

    pub fn set_token(&self, token: String) {
        let _ = LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, &token);
        self.token.set(Some(token));
    }

    /// Drops the principal, the token and the persisted copy. Never
    /// fails; also invoked by the gateway when any authenticated request
    /// comes back 401.
    pub fn clear(&self) {
        let _ = LocalStorage::raw().remove_item(TOKEN_STORAGE_KEY);
        self.principal.set(None);
        self.token.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.with(|p| p.is_some())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the session handle from context.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session should be provided")
}

/// Verifies a stored token against `/users/me`. On success the principal
/// is set; on any failure the token is wiped. Clears `loading` when
/// settled.
pub fn rehydrate(session: Session, api: ApiClient) {
    if session.token.get_untracked().is_none() {
        return;
    }
    spawn_local(async move {
        match api.get::<UserResponse>("/users/me").await {
            Ok(user) => session.principal.set(Some(user)),
            Err(_) => session.clear(),
        }
        session.loading.set(false);
    });
}

/// Logs in with form-encoded credentials (the backend's login field is
/// named `username` even though it carries the email), persists the
/// returned token, then loads the principal.
pub async fn login(
    session: Session,
    api: &ApiClient,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let token: TokenResponse = api
        .post_urlencoded(
            "/auth/login",
            &[("username", email.as_str()), ("password", password.as_str())],
        )
        .await?;
    session.set_token(token.access_token);

    match api.get::<UserResponse>("/users/me").await {
        Ok(user) => {
            session.principal.set(Some(user));
            Ok(())
        }
        Err(err) => {
            session.clear();
            Err(err)
        }
    }
}

/// Clears the session. Redirecting to `/login` is the guard's job; it
/// reacts to the principal going away.
pub fn logout(session: Session) {
    session.clear();
}

/// What a `storage` event on the token key means for this tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenChange {
    /// Another tab logged out; drop our session too.
    Cleared,
    /// Another tab logged in (or re-logged in) with this token.
    Replaced(String),
    Unchanged,
}

/// Classifies an incoming token value against the one this tab holds.
/// An empty string counts as removal, matching `Session::new`.
pub(crate) fn classify_token_change(current: Option<&str>, incoming: Option<&str>) -> TokenChange {
    match incoming.filter(|t| !t.is_empty()) {
        None => {
            if current.is_some() {
                TokenChange::Cleared
            } else {
                TokenChange::Unchanged
            }
        }
        Some(token) => {
            if current == Some(token) {
                TokenChange::Unchanged
            } else {
                TokenChange::Replaced(token.to_string())
            }
        }
    }
}

/// Mirrors token changes made by other tabs. The browser only fires
/// `storage` in tabs that did not make the write, so reacting here
/// cannot loop with our own `set_token`/`clear` calls.
pub fn init_storage_listener(session: Session, api: ApiClient) {
    let closure = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        if ev.key().as_deref() != Some(TOKEN_STORAGE_KEY) {
            return;
        }
        let current = session.token.get_untracked();
        match classify_token_change(current.as_deref(), ev.new_value().as_deref()) {
            TokenChange::Cleared => {
                // The other tab already removed the stored copy.
                session.principal.set(None);
                session.token.set(None);
            }
            TokenChange::Replaced(token) => {
                session.token.set(Some(token));
                let api = api.clone();
                spawn_local(async move {
                    match api.get::<UserResponse>("/users/me").await {
                        Ok(user) => session.principal.set(Some(user)),
                        Err(_) => session.clear(),
                    }
                });
            }
            TokenChange::Unchanged => {}
        }
    });

    if let Some(window) = web_sys::window() {
        let _ =
            window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    }

    // Leak the closure; the listener lives as long as the app.
    closure.forget();
}

#[cfg(test)]
mod tests;
