//! Employee dashboard: feedback from the manager, peer feedback,
//! announcements, assignments and personal documents.

use crate::api::use_api;
use crate::components::announcements::AnnouncementList;
use crate::components::assignments::AssignmentList;
use crate::components::documents::{DocumentList, DocumentUpload};
use crate::components::feedback::FeedbackHistory;
use crate::components::peer_feedback::{PeerFeedbackForm, PeerFeedbackReceived};
use crate::session::use_session;
use crate::web::route::EmployeeTab;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::EmployeeDashboardResponse;

#[component]
pub fn EmployeePage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();

    // A notification click may have asked for a specific tab.
    let initial_tab = router.take_pending_tab().unwrap_or_default();
    let (active_tab, set_active_tab) = signal(initial_tab);

    let (timeline_count, set_timeline_count) = signal(Option::<usize>::None);
    let (request_status, set_request_status) = signal(Option::<Result<(), String>>::None);
    let (error, set_error) = signal(Option::<String>::None);

    // Acknowledge and comment flows refresh themselves; the feedback
    // list only needs the initial fetch.
    let (feedback_reload, _) = signal(0u64);
    let (peer_reload, set_peer_reload) = signal(0u64);
    let (announcements_reload, _) = signal(0u64);
    let (assignments_reload, _) = signal(0u64);
    let (documents_reload, set_documents_reload) = signal(0u64);

    let employee_id = session
        .principal
        .with_untracked(|p| p.as_ref().map(|u| u.id).unwrap_or(-1));

    {
        let api = api.clone();
        spawn_local(async move {
            match api
                .get::<EmployeeDashboardResponse>("/dashboard/employee")
                .await
            {
                Ok(summary) => {
                    let _ = set_timeline_count.try_set(Some(summary.feedback_timeline.len()));
                }
                Err(err) => {
                    let _ = set_error.try_set(Some(err.user_message("Failed to load dashboard")));
                }
            }
        });
    }

    let on_request_feedback = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.post_empty("/feedback/request").await {
                    Ok(()) => {
                        let _ = set_request_status.try_set(Some(Ok(())));
                    }
                    Err(err) => {
                        let _ = set_request_status
                            .try_set(Some(Err(err.user_message("Failed to request feedback"))));
                    }
                }
            });
        }
    };

    view! {
        <div class="container mx-auto p-4">
            <h1 class="text-2xl font-bold mb-4">"My Dashboard"</h1>

            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error mb-4">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div role="tablist" class="tabs tabs-boxed mb-4">
                {EmployeeTab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <a
                                role="tab"
                                class=move || {
                                    if active_tab.get() == tab { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || active_tab.get() == EmployeeTab::Manager>
                <div class="flex items-center justify-between mb-3">
                    <div class="stats shadow">
                        <div class="stat">
                            <div class="stat-title">"Feedback Received"</div>
                            <div class="stat-value text-2xl">
                                {move || {
                                    timeline_count
                                        .get()
                                        .map(|n| n.to_string())
                                        .unwrap_or_else(|| "-".to_string())
                                }}
                            </div>
                        </div>
                    </div>
                    <button class="btn btn-outline" on:click=on_request_feedback.clone()>
                        "Request Feedback"
                    </button>
                </div>
                <Show when=move || request_status.with(|s| s.is_some())>
                    {move || {
                        request_status
                            .get()
                            .map(|status| match status {
                                Ok(()) => {
                                    view! {
                                        <div class="alert alert-success mb-3">
                                            <span>"Your manager has been notified"</span>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(message) => {
                                    view! {
                                        <div class="alert alert-error mb-3">
                                            <span>{message}</span>
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Show>
                <FeedbackHistory
                    employee_id=employee_id
                    manager_view=false
                    reload=feedback_reload
                />
            </Show>

            <Show when=move || active_tab.get() == EmployeeTab::Peer>
                <PeerFeedbackForm on_change=Callback::new(move |()| {
                    set_peer_reload.update(|n| *n += 1);
                }) />
                <PeerFeedbackReceived reload=peer_reload />
            </Show>

            <Show when=move || active_tab.get() == EmployeeTab::Announcements>
                <AnnouncementList manager_view=false reload=announcements_reload />
            </Show>

            <Show when=move || active_tab.get() == EmployeeTab::Assignments>
                <AssignmentList manager_view=false reload=assignments_reload />
            </Show>

            <Show when=move || active_tab.get() == EmployeeTab::Documents>
                <DocumentUpload on_change=Callback::new(move |()| {
                    set_documents_reload.update(|n| *n += 1);
                }) />
                <DocumentList owner_view=true reload=documents_reload />
            </Show>
        </div>
    }
}
