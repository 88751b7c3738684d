//! TeamPulse frontend application.
//!
//! Layering:
//! - `session`: bearer-token lifecycle and the current principal
//! - `api`: HTTP gateway (token injection, error decoding, blobs)
//! - `web::route` / `web::router`: route domain model and History engine
//! - `components`: guard, navbar/notification center, dashboards, views

mod api;
mod components {
    pub mod announcements;
    pub mod assignments;
    pub mod comments;
    pub mod documents;
    pub mod employee;
    pub mod feedback;
    pub mod guard;
    pub mod login;
    pub mod manager;
    pub mod navbar;
    pub mod peer_feedback;
    pub mod register;
    pub mod submissions;
}
mod session;

// Browser plumbing that has no business knowledge.
pub(crate) mod web {
    pub mod download;
    pub mod route;
    pub mod router;
}

pub use api::{ApiClient, ApiError};
pub use session::Session;

use crate::components::employee::EmployeePage;
use crate::components::guard::RequireRole;
use crate::components::login::LoginPage;
use crate::components::manager::ManagerPage;
use crate::components::navbar::Navbar;
use crate::components::register::RegisterPage;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;
use teampulse_shared::Role;

/// API origin; overridable at build time.
fn api_base_url() -> String {
    option_env!("TEAMPULSE_API_URL")
        .unwrap_or("http://localhost:8000")
        .to_string()
}

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Manager => view! {
            <RequireRole role=Role::Manager>
                <ManagerPage />
            </RequireRole>
        }
        .into_any(),
        AppRoute::Employee => view! {
            <RequireRole role=Role::Employee>
                <EmployeePage />
            </RequireRole>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Session signals first; the gateway takes the handle by injection so
    // it can read the token and clear the session on a rejected request.
    let session = Session::new();
    provide_context(session);

    let api = ApiClient::new(api_base_url(), session);
    provide_context(api.clone());

    // Rehydrate the principal from a stored token; guards stay on the
    // loading placeholder until this settles. Other tabs' logins and
    // logouts arrive through the storage listener.
    session::rehydrate(session, api.clone());
    session::init_storage_listener(session, api);

    view! {
        <Router>
            <Navbar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
