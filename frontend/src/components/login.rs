//! Sign-in page.

use crate::api::use_api;
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // Already signed in (or rehydration just finished): skip the form.
    Effect::new(move |_| {
        if session.loading.get() {
            return;
        }
        if let Some(role) = session.principal.with(|p| p.as_ref().map(|u| u.role)) {
            router.replace(AppRoute::dashboard_for(role));
        }
    });

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if is_submitting.get_untracked() {
                return;
            }
            let email = email.get_untracked();
            let password = password.get_untracked();
            if email.trim().is_empty() || password.is_empty() {
                set_error.set(Some("Please enter your email and password".to_string()));
                return;
            }
            set_error.set(None);
            set_is_submitting.set(true);
            let api = api.clone();
            spawn_local(async move {
                match session::login(session, &api, email, password).await {
                    Ok(()) => {
                        if let Some(role) =
                            session.principal.with_untracked(|p| p.as_ref().map(|u| u.role))
                        {
                            router.navigate(AppRoute::dashboard_for(role));
                        }
                    }
                    Err(err) => {
                        let _ = set_error.try_set(Some(err.user_message("Login failed")));
                    }
                }
                let _ = set_is_submitting.try_set(false);
            });
        }
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-2xl justify-center">"TeamPulse"</h1>
                    <p class="text-center text-base-content/60">"Sign in to your account"</p>

                    <Show when=move || error.with(|e| e.is_some())>
                        <div class="alert alert-error">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form class="space-y-4" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                type="email"
                                class="input input-bordered w-full"
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                type="password"
                                class="input input-bordered w-full"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled=is_submitting
                        >
                            <Show when=move || is_submitting.get() fallback=|| "Sign In">
                                <span class="loading loading-spinner loading-sm"></span>
                                "Signing in..."
                            </Show>
                        </button>
                    </form>

                    <p class="text-center text-sm">
                        "Don't have an account? "
                        <a
                            class="link link-primary"
                            on:click=move |_| router.navigate(AppRoute::Register)
                        >
                            "Register"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
