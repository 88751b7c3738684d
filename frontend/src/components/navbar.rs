//! Top navigation bar and the notification center.
//!
//! The notification poll is owned by this component: it starts as soon
//! as a principal is present, fires immediately and then every 60
//! seconds, and the timer is dropped (cancelling the underlying
//! `setInterval`) on logout, principal change or unmount.

use crate::api::use_api;
use crate::session::{logout, use_session};
use crate::web::route::{AppRoute, EmployeeTab};
use crate::web::router::use_router;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{NotificationResponse, Role, date};

const POLL_INTERVAL_MS: u32 = 60_000;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let router = use_router();

    let (notifications, set_notifications) = signal(Vec::<NotificationResponse>::new());
    let (popover_open, set_popover_open) = signal(false);

    let fetch_notifications = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.get::<Vec<NotificationResponse>>("/notifications").await {
                    // Polls overwrite the list with the server's order.
                    Ok(list) => {
                        let _ = set_notifications.try_set(list);
                    }
                    // Keep the previous list on failure.
                    Err(err) => leptos::logging::warn!("notification poll failed: {err}"),
                }
            });
        }
    };

    let poll = StoredValue::new_local(None::<Interval>);
    Effect::new({
        let fetch_notifications = fetch_notifications.clone();
        move |_| {
            let signed_in = session.principal.with(|p| p.is_some());
            // Any principal change first retires the previous timer.
            poll.update_value(|slot| {
                slot.take();
            });
            set_notifications.set(Vec::new());
            set_popover_open.set(false);
            if signed_in {
                fetch_notifications();
                let tick = fetch_notifications.clone();
                poll.set_value(Some(Interval::new(POLL_INTERVAL_MS, move || tick())));
            }
        }
    });
    on_cleanup(move || {
        poll.update_value(|slot| {
            slot.take();
        })
    });

    let unread_count = move || notifications.with(|ns| ns.iter().filter(|n| !n.is_read).count());
    let has_unread = move || unread_count() > 0;

    let mark_read = {
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.post_empty(&format!("/notifications/{id}/read")).await {
                    Ok(()) => {
                        let _ = set_notifications.try_update(|list| {
                            if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                                n.is_read = true;
                            }
                        });
                    }
                    Err(err) => leptos::logging::warn!("failed to mark notification read: {err}"),
                }
            });
        }
    };

    let on_notification_click = {
        let mark_read = mark_read.clone();
        move |id: i64, is_read: bool| {
            if !is_read {
                mark_read(id);
            }
            set_popover_open.set(false);
            let role = session
                .principal
                .with_untracked(|p| p.as_ref().map(|u| u.role));
            if role == Some(Role::Employee) {
                router.navigate_with_tab(AppRoute::Employee, EmployeeTab::Announcements);
            }
        }
    };

    // Dismissal is client-local: the item is marked read server-side when
    // needed, then removed from the list. The next poll re-includes it if
    // the server still returns it.
    let on_dismiss = {
        let api = api.clone();
        move |id: i64, is_read: bool| {
            let api = api.clone();
            spawn_local(async move {
                if !is_read {
                    if let Err(err) = api.post_empty(&format!("/notifications/{id}/read")).await {
                        leptos::logging::warn!("failed to mark notification read: {err}");
                    }
                }
                let _ = set_notifications.try_update(|list| list.retain(|n| n.id != id));
            });
        }
    };

    let on_logout = move |_| {
        logout(session);
        router.navigate(AppRoute::Login);
    };

    let go_to_dashboard = move |_| {
        if let Some(role) = session
            .principal
            .with_untracked(|p| p.as_ref().map(|u| u.role))
        {
            router.navigate(AppRoute::dashboard_for(role));
        }
    };

    view! {
        <Show when=move || session.principal.with(|p| p.is_some())>
            <div class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1 gap-2">
                    <span class="text-lg font-semibold">
                        {move || {
                            session
                                .principal
                                .with(|p| {
                                    p.as_ref()
                                        .map(|u| format!("Welcome, {} ({})", u.name, u.role))
                                        .unwrap_or_default()
                                })
                        }}
                    </span>
                    <span class="badge badge-neutral hidden md:inline-flex">
                        "ID: "
                        {move || {
                            session
                                .principal
                                .with(|p| p.as_ref().map(|u| u.id.to_string()).unwrap_or_default())
                        }}
                    </span>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-ghost" on:click=go_to_dashboard>
                        "Dashboard"
                    </button>

                    <div class="relative">
                        <button
                            class="btn btn-ghost btn-circle"
                            on:click=move |_| set_popover_open.update(|open| *open = !*open)
                        >
                            <div class="indicator">
                                <span class="text-xl">"\u{1F514}"</span>
                                <Show when=has_unread>
                                    <span class="badge badge-error badge-sm indicator-item">
                                        {unread_count}
                                    </span>
                                </Show>
                            </div>
                        </button>
                        {
                            let on_notification_click = on_notification_click.clone();
                            let on_dismiss = on_dismiss.clone();
                            view! {
                                <Show when=move || popover_open.get()>
                                    <div class="absolute right-0 z-50 mt-2 w-80 max-h-96 overflow-y-auto card bg-base-100 shadow-xl">
                                <div class="flex items-center justify-between p-3 pb-1">
                                    <span class="font-semibold">"Notifications"</span>
                                    <button
                                        class="btn btn-ghost btn-xs"
                                        on:click=move |_| set_popover_open.set(false)
                                    >
                                        "\u{2715}"
                                    </button>
                                </div>
                                {
                                    let on_notification_click = on_notification_click.clone();
                                    let on_dismiss = on_dismiss.clone();
                                    view! {
                                <Show
                                    when=move || notifications.with(|ns| !ns.is_empty())
                                    fallback=|| {
                                        view! {
                                            <p class="p-3 text-base-content/60">"No notifications"</p>
                                        }
                                    }
                                >
                                    <For
                                        each=move || notifications.get()
                                        key=|n| (n.id, n.is_read)
                                        children={
                                            let on_notification_click = on_notification_click.clone();
                                            let on_dismiss = on_dismiss.clone();
                                            move |n: NotificationResponse| {
                                                let click = on_notification_click.clone();
                                                let dismiss = on_dismiss.clone();
                                                let id = n.id;
                                                let is_read = n.is_read;
                                                let item_class = if is_read {
                                                    "flex items-start gap-1 p-3 border-b border-base-200 bg-base-200/50"
                                                } else {
                                                    "flex items-start gap-1 p-3 border-b border-base-200 bg-info/10"
                                                };
                                                view! {
                                                    <div class=item_class>
                                                        <div
                                                            class="flex-1 cursor-pointer"
                                                            on:click=move |_| click(id, is_read)
                                                        >
                                                            <p class="text-sm">{n.message.clone()}</p>
                                                            <p class="text-xs text-base-content/60">
                                                                {date::display_ist_opt(n.created_at.as_deref())}
                                                            </p>
                                                        </div>
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click=move |_| dismiss(id, is_read)
                                                        >
                                                            "\u{2715}"
                                                        </button>
                                                    </div>
                                                }
                                            }
                                        }
                                    />
                                </Show>
                                    }
                                }
                            </div>
                        </Show>
                            }
                        }
                    </div>

                    <button class="btn btn-outline btn-error" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>
        </Show>
    }
}
