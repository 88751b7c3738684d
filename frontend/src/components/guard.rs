//! Role-gated route guard.

use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use teampulse_shared::Role;

/// Admits the child view only for an authenticated principal holding
/// `role`. While the session store is still verifying a stored token a
/// neutral placeholder is rendered and no decision is taken; once
/// settled, anyone else is redirected to `/login`.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let admitted = move || {
        session
            .principal
            .with(|p| p.as_ref().is_some_and(|user| user.role == role))
    };

    Effect::new(move |_| {
        // The loading flag gates the decision, not just the render.
        if session.loading.get() {
            return;
        }
        if !admitted() {
            router.replace(AppRoute::Login);
        }
    });

    view! {
        <Show
            when=move || !session.loading.get() && admitted()
            fallback=|| {
                view! {
                    <div class="flex items-center justify-center min-h-screen">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
