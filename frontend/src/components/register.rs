//! Account registration page.
//!
//! Role drives the `manager_id` field: managers always send an explicit
//! `null`, employees send the chosen id or omit the field when the
//! input is left blank.

use crate::api::use_api;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{RegisterRequest, Role};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(Role::Employee);
    let (manager_id, set_manager_id) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if is_submitting.get_untracked() {
                return;
            }
            let name = name.get_untracked().trim().to_string();
            let email = email.get_untracked().trim().to_string();
            let password = password.get_untracked();
            if name.is_empty() || email.is_empty() || password.is_empty() {
                set_error.set(Some("Please fill in all required fields".to_string()));
                return;
            }
            let role = role.get_untracked();
            let manager_id = match role {
                Role::Manager => Some(None),
                Role::Employee => {
                    let raw = manager_id.get_untracked();
                    let raw = raw.trim();
                    if raw.is_empty() {
                        None
                    } else {
                        match raw.parse::<i64>() {
                            Ok(id) => Some(Some(id)),
                            Err(_) => {
                                set_error.set(Some("Manager ID must be a number".to_string()));
                                return;
                            }
                        }
                    }
                }
            };
            set_error.set(None);
            set_is_submitting.set(true);
            let body = RegisterRequest {
                name,
                email,
                password,
                role,
                manager_id,
            };
            let api = api.clone();
            spawn_local(async move {
                match api.post_json("/auth/register", &body).await {
                    Ok(()) => router.navigate(AppRoute::Login),
                    Err(err) => {
                        let _ = set_error.try_set(Some(err.user_message("Registration failed")));
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
                    <h1 class="card-title text-2xl justify-center">"Create Account"</h1>

                    <Show when=move || error.with(|e| e.is_some())>
                        <div class="alert alert-error">
                            <span>{move || error.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <form class="space-y-4" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                type="email"
                                class="input input-bordered w-full"
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
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Role"</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_role
                                        .set(
                                            if value == "manager" {
                                                Role::Manager
                                            } else {
                                                Role::Employee
                                            },
                                        );
                                }
                            >
                                <option value="employee" selected=true>
                                    "Employee"
                                </option>
                                <option value="manager">"Manager"</option>
                            </select>
                        </div>
                        <Show when=move || role.get() == Role::Employee>
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Manager ID (optional)"</span>
                                </label>
                                <input
                                    type="number"
                                    class="input input-bordered w-full"
                                    placeholder="Your manager's user ID"
                                    prop:value=manager_id
                                    on:input=move |ev| set_manager_id.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>
                        <button
                            type="submit"
                            class="btn btn-primary w-full"
                            disabled=is_submitting
                        >
                            <Show when=move || is_submitting.get() fallback=|| "Register">
                                <span class="loading loading-spinner loading-sm"></span>
                                "Registering..."
                            </Show>
                        </button>
                    </form>

                    <p class="text-center text-sm">
                        "Already have an account? "
                        <a
                            class="link link-primary"
                            on:click=move |_| router.navigate(AppRoute::Login)
                        >
                            "Sign In"
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
