//! Manager dashboard: team summary, feedback authoring, assignments,
//! announcements and the shared document pool.

use crate::api::use_api;
use crate::components::announcements::{AnnouncementForm, AnnouncementList};
use crate::components::assignments::{AssignmentList, AssignmentUpload};
use crate::components::documents::DocumentList;
use crate::components::feedback::{FeedbackForm, FeedbackHistory};
use crate::components::submissions::SubmissionList;
use crate::web::route::ManagerTab;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{AssignmentResponse, ManagerDashboardResponse, Sentiment, UserResponse};

#[component]
pub fn ManagerPage() -> impl IntoView {
    let api = use_api();

    let (active_tab, set_active_tab) = signal(ManagerTab::Team);
    let (summary, set_summary) = signal(Option::<ManagerDashboardResponse>::None);
    let (team, set_team) = signal(Vec::<UserResponse>::new());
    let (selected_member, set_selected_member) = signal(Option::<UserResponse>::None);
    let (selected_assignment, set_selected_assignment) = signal(Option::<AssignmentResponse>::None);
    let (error, set_error) = signal(Option::<String>::None);

    // Reload counters; children bump them through their callbacks and
    // the lists re-fetch.
    let (feedback_reload, set_feedback_reload) = signal(0u64);
    let (assignments_reload, set_assignments_reload) = signal(0u64);
    let (announcements_reload, set_announcements_reload) = signal(0u64);
    let (documents_reload, _) = signal(0u64);

    let fetch_summary = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api
                    .get::<ManagerDashboardResponse>("/dashboard/manager")
                    .await
                {
                    Ok(s) => {
                        let _ = set_summary.try_set(Some(s));
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to load dashboard")));
                    }
                }
            });
        }
    };
    fetch_summary();

    {
        let api = api.clone();
        spawn_local(async move {
            match api.get::<Vec<UserResponse>>("/users/team").await {
                Ok(members) => {
                    let _ = set_team.try_set(members);
                }
                Err(err) => {
                    let _ = set_error.try_set(Some(err.user_message("Failed to load your team")));
                }
            }
        });
    }

    // New feedback changes the sentiment trends too.
    let on_feedback_change = {
        let fetch_summary = fetch_summary.clone();
        Callback::new(move |()| {
            set_feedback_reload.update(|n| *n += 1);
            fetch_summary();
        })
    };

    // Callback so the member panel's render closure can stay `Fn`.
    let on_export_all = {
        let api = api.clone();
        Callback::new(move |(employee_id, employee_name): (i64, String)| {
            let api = api.clone();
            spawn_local(async move {
                let fallback =
                    format!("feedback_report_{}.pdf", employee_name.replace(' ', "_"));
                let result = async {
                    let download = api
                        .get_blob(&format!("/feedback/employee/{employee_id}/export"))
                        .await?;
                    download.save(&fallback)
                }
                .await;
                if let Err(err) = result {
                    let _ = set_error.try_set(Some(err.user_message("Failed to export feedback")));
                }
            });
        })
    };

    let trend_count = move |sentiment: Sentiment| {
        summary.with(|s| {
            s.as_ref()
                .and_then(|s| s.sentiment_trends.get(sentiment.as_str()).copied())
                .unwrap_or(0)
        })
    };

    view! {
        <div class="container mx-auto p-4">
            <h1 class="text-2xl font-bold mb-4">"Manager Dashboard"</h1>

            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error mb-4">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div role="tablist" class="tabs tabs-boxed mb-4">
                {ManagerTab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        view! {
                            <a
                                role="tab"
                                class=move || {
                                    if active_tab.get() == tab { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| {
                                    set_active_tab.set(tab);
                                    set_selected_assignment.set(None);
                                }
                            >
                                {tab.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || active_tab.get() == ManagerTab::Team>
                <div class="stats shadow mb-4 w-full">
                    <div class="stat">
                        <div class="stat-title">"Team Size"</div>
                        <div class="stat-value">
                            {move || {
                                summary.with(|s| s.as_ref().map(|s| s.team_size).unwrap_or(0))
                            }}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Feedback Given"</div>
                        <div class="stat-value">
                            {move || {
                                summary.with(|s| s.as_ref().map(|s| s.feedback_count).unwrap_or(0))
                            }}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Sentiment"</div>
                        <div class="stat-desc text-base">
                            <span class="text-success mr-2">
                                {move || trend_count(Sentiment::Positive)} " positive"
                            </span>
                            <span class="text-warning mr-2">
                                {move || trend_count(Sentiment::Neutral)} " neutral"
                            </span>
                            <span class="text-error">
                                {move || trend_count(Sentiment::Negative)} " negative"
                            </span>
                        </div>
                    </div>
                </div>

                <div class="grid md:grid-cols-3 gap-4">
                    <div>
                        <h2 class="font-semibold text-lg mb-2">"Your Team"</h2>
                        <Show
                            when=move || team.with(|t| !t.is_empty())
                            fallback=|| {
                                view! {
                                    <p class="text-base-content/60">"No team members yet"</p>
                                }
                            }
                        >
                            <For
                                each=move || team.get()
                                key=|m| m.id
                                children=move |member: UserResponse| {
                                    let for_select = member.clone();
                                    let member_id = member.id;
                                    let is_selected = move || {
                                        selected_member
                                            .with(|m| {
                                                m.as_ref().is_some_and(|m| m.id == member_id)
                                            })
                                    };
                                    view! {
                                        <div
                                            class=move || {
                                                if is_selected() {
                                                    "card bg-primary/10 shadow mb-2 cursor-pointer"
                                                } else {
                                                    "card bg-base-100 shadow mb-2 cursor-pointer"
                                                }
                                            }
                                            on:click=move |_| {
                                                set_selected_member.set(Some(for_select.clone()))
                                            }
                                        >
                                            <div class="card-body p-4">
                                                <p class="font-semibold">{member.name.clone()}</p>
                                                <p class="text-sm text-base-content/60">
                                                    {member.email.clone()}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </Show>
                    </div>

                    <div class="md:col-span-2">
                        <Show
                            when=move || selected_member.with(|m| m.is_some())
                            fallback=|| {
                                view! {
                                    <p class="text-base-content/60">
                                        "Select a team member to view and give feedback"
                                    </p>
                                }
                            }
                        >
                            {move || {
                                selected_member
                                    .get()
                                    .map(|member| {
                                        let export_name = member.name.clone();
                                        let member_id = member.id;
                                        view! {
                                            <div>
                                                <div class="flex items-center justify-between mb-2">
                                                    <h2 class="font-semibold text-lg">
                                                        "Feedback for " {member.name.clone()}
                                                    </h2>
                                                    <button
                                                        class="btn btn-outline btn-sm"
                                                        on:click=move |_| {
                                                            on_export_all.run((member_id, export_name.clone()))
                                                        }
                                                    >
                                                        "Export All (PDF)"
                                                    </button>
                                                </div>
                                                <FeedbackForm
                                                    employee_id=member.id
                                                    employee_name=member.name.clone()
                                                    on_change=on_feedback_change
                                                />
                                                <FeedbackHistory
                                                    employee_id=member.id
                                                    manager_view=true
                                                    reload=feedback_reload
                                                />
                                            </div>
                                        }
                                    })
                            }}
                        </Show>
                    </div>
                </div>
            </Show>

            <Show when=move || active_tab.get() == ManagerTab::Assignments>
                <Show
                    when=move || selected_assignment.with(|a| a.is_none())
                    fallback=move || {
                        selected_assignment
                            .get()
                            .map(|assignment| {
                                view! {
                                    <div>
                                        <div class="flex items-center gap-2 mb-2">
                                            <button
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| set_selected_assignment.set(None)
                                            >
                                                "\u{2190} Back to assignments"
                                            </button>
                                            <h2 class="font-semibold text-lg">
                                                "Submissions for " {assignment.title.clone()}
                                            </h2>
                                        </div>
                                        <SubmissionList assignment_id=assignment.id />
                                    </div>
                                }
                            })
                    }
                >
                    <AssignmentUpload on_change=Callback::new(move |()| {
                        set_assignments_reload.update(|n| *n += 1);
                    }) />
                    <AssignmentList
                        manager_view=true
                        reload=assignments_reload
                        on_view_submissions=Callback::new(move |assignment| {
                            set_selected_assignment.set(Some(assignment));
                        })
                    />
                </Show>
            </Show>

            <Show when=move || active_tab.get() == ManagerTab::Announcements>
                <AnnouncementForm on_change=Callback::new(move |()| {
                    set_announcements_reload.update(|n| *n += 1);
                }) />
                <AnnouncementList manager_view=true reload=announcements_reload />
            </Show>

            <Show when=move || active_tab.get() == ManagerTab::Documents>
                <h2 class="font-semibold text-lg mb-2">"Documents shared by your team"</h2>
                <DocumentList owner_view=false reload=documents_reload />
            </Show>
        </div>
    }
}
