//! Manager feedback: authoring, history, acknowledgement and PDF export.

use crate::api::use_api;
use crate::components::comments::{CommentScope, CommentSection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{FeedbackCreate, FeedbackResponse, FeedbackUpdate, Sentiment, date};

fn sentiment_badge_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "badge badge-success",
        Sentiment::Neutral => "badge badge-warning",
        Sentiment::Negative => "badge badge-error",
    }
}

/// Structured feedback form for one team member.
#[component]
pub fn FeedbackForm(
    employee_id: i64,
    employee_name: String,
    on_change: Callback<()>,
) -> impl IntoView {
    let api = use_api();

    let (strengths, set_strengths) = signal(String::new());
    let (areas, set_areas) = signal(String::new());
    let (sentiment, set_sentiment) = signal(Sentiment::Positive);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let strengths = strengths.get_untracked().trim().to_string();
            let areas = areas.get_untracked().trim().to_string();
            if strengths.is_empty() || areas.is_empty() {
                set_error.set(Some(
                    "Strengths and areas to improve are required".to_string(),
                ));
                return;
            }
            set_error.set(None);
            set_is_submitting.set(true);
            let body = FeedbackCreate {
                employee_id,
                strengths,
                areas_to_improve: areas,
                sentiment: sentiment.get_untracked(),
            };
            let api = api.clone();
            spawn_local(async move {
                match api.post_json("/feedback/", &body).await {
                    Ok(()) => {
                        let _ = set_strengths.try_set(String::new());
                        let _ = set_areas.try_set(String::new());
                        let _ = set_sentiment.try_set(Sentiment::Positive);
                        on_change.run(());
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to submit feedback")));
                    }
                }
                let _ = set_is_submitting.try_set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow mb-4">
            <div class="card-body">
                <h3 class="card-title">"Feedback for " {employee_name}</h3>
                <Show when=move || error.with(|e| e.is_some())>
                    <div class="alert alert-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <form class="space-y-3" on:submit=on_submit>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Strengths"</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full"
                            prop:value=strengths
                            on:input=move |ev| set_strengths.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Areas to Improve"</span>
                        </label>
                        <textarea
                            class="textarea textarea-bordered w-full"
                            prop:value=areas
                            on:input=move |ev| set_areas.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Overall Sentiment"</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                if let Some(s) = Sentiment::from_str(&event_target_value(&ev)) {
                                    set_sentiment.set(s);
                                }
                            }
                        >
                            {Sentiment::ALL
                                .iter()
                                .map(|s| {
                                    let value = s.as_str();
                                    let selected = *s == Sentiment::Positive;
                                    view! {
                                        <option value=value selected=selected>
                                            {s.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=is_submitting>
                        <Show when=move || is_submitting.get() fallback=|| "Submit Feedback">
                            "Submitting..."
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Feedback history for one employee. Managers get inline editing;
/// employees open the details dialog, where acknowledgement and the
/// discussion thread live.
#[component]
pub fn FeedbackHistory(
    employee_id: i64,
    manager_view: bool,
    reload: ReadSignal<u64>,
) -> impl IntoView {
    let api = use_api();

    let (entries, set_entries) = signal(Vec::<FeedbackResponse>::new());
    let (editing, set_editing) = signal(Option::<i64>::None);
    let (edit_strengths, set_edit_strengths) = signal(String::new());
    let (edit_areas, set_edit_areas) = signal(String::new());
    let (edit_sentiment, set_edit_sentiment) = signal(Sentiment::Positive);
    let (details, set_details) = signal(Option::<FeedbackResponse>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api
                    .get::<Vec<FeedbackResponse>>(&format!("/feedback/employee/{employee_id}"))
                    .await
                {
                    Ok(list) => {
                        let _ = set_entries.try_set(list);
                    }
                    Err(err) => {
                        let _ = set_error.try_set(Some(err.user_message("Failed to load feedback")));
                    }
                }
            });
        }
    };

    Effect::new({
        let fetch = fetch.clone();
        move |_| {
            reload.track();
            fetch();
        }
    });

    // Callbacks are Copy, so the nested render closures stay `Fn`.
    let on_export = {
        let api = api.clone();
        Callback::new(move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                let result = async {
                    let download = api.get_blob(&format!("/feedback/{id}/export")).await?;
                    download.save(&format!("feedback_{id}.pdf"))
                }
                .await;
                if let Err(err) = result {
                    let _ = set_error.try_set(Some(err.user_message("Failed to export feedback")));
                }
            });
        })
    };

    let on_save_edit = {
        let api = api.clone();
        let fetch = fetch.clone();
        Callback::new(move |id: i64| {
            let strengths = edit_strengths.get_untracked().trim().to_string();
            let areas = edit_areas.get_untracked().trim().to_string();
            if strengths.is_empty() || areas.is_empty() {
                return;
            }
            let body = FeedbackUpdate {
                strengths: Some(strengths),
                areas_to_improve: Some(areas),
                sentiment: Some(edit_sentiment.get_untracked()),
            };
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api.patch_json(&format!("/feedback/{id}"), &body).await {
                    Ok(()) => {
                        let _ = set_editing.try_set(None);
                        fetch();
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to update feedback")));
                    }
                }
            });
        })
    };

    let on_acknowledge = {
        let api = api.clone();
        let fetch = fetch.clone();
        Callback::new(move |id: i64| {
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api.post_empty(&format!("/feedback/{id}/acknowledge")).await {
                    Ok(()) => {
                        // Keep the open dialog consistent with the list.
                        let _ = set_details.try_update(|d| {
                            if let Some(entry) = d.as_mut() {
                                entry.acknowledged = true;
                            }
                        });
                        fetch();
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to acknowledge feedback")));
                    }
                }
            });
        })
    };

    view! {
        <div>
            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error mb-2">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| view! { <p class="text-base-content/60">"No feedback yet"</p> }
            >
                <For
                    each=move || entries.get()
                    key=|f| (f.id, f.updated_at.clone(), f.acknowledged)
                    children={
                        move |feedback: FeedbackResponse| {
                            let id = feedback.id;
                            let edited = date::was_edited(
                                feedback.created_at.as_deref(),
                                feedback.updated_at.as_deref(),
                            );
                            let strengths_seed = feedback.strengths.clone();
                            let areas_seed = feedback.areas_to_improve.clone();
                            let sentiment_seed = feedback.sentiment;
                            view! {
                                <div class="card bg-base-100 shadow mb-3">
                                    <div class="card-body">
                                        <Show
                                            when=move || editing.get() == Some(id)
                                            fallback={
                                                let feedback = feedback.clone();
                                                let strengths_seed = strengths_seed.clone();
                                                let areas_seed = areas_seed.clone();
                                                move || {
                                                    let feedback = feedback.clone();
                                                    let strengths_seed = strengths_seed.clone();
                                                    let areas_seed = areas_seed.clone();
                                                    let details_entry = feedback.clone();
                                                    view! {
                                                        <div>
                                                            <div class="flex items-center gap-2">
                                                                <span class=sentiment_badge_class(
                                                                    feedback.sentiment,
                                                                )>{feedback.sentiment.label()}</span>
                                                                <Show when=move || feedback.acknowledged>
                                                                    <span class="badge badge-info">"Acknowledged"</span>
                                                                </Show>
                                                                <Show when=move || edited>
                                                                    <span class="badge badge-ghost badge-sm">"edited"</span>
                                                                </Show>
                                                                <span class="text-sm text-base-content/60">
                                                                    {date::display_ist_opt(feedback.created_at.as_deref())}
                                                                </span>
                                                            </div>
                                                            <p class="mt-2">
                                                                <span class="font-semibold">"Strengths: "</span>
                                                                {feedback.strengths.clone()}
                                                            </p>
                                                            <p>
                                                                <span class="font-semibold">"Areas to Improve: "</span>
                                                                {feedback.areas_to_improve.clone()}
                                                            </p>
                                                            <div class="card-actions mt-2">
                                                                <Show when=move || manager_view>
                                                                    <button
                                                                        class="btn btn-warning btn-xs"
                                                                        on:click={
                                                                            let strengths_seed = strengths_seed.clone();
                                                                            let areas_seed = areas_seed.clone();
                                                                            move |_| {
                                                                                set_edit_strengths.set(strengths_seed.clone());
                                                                                set_edit_areas.set(areas_seed.clone());
                                                                                set_edit_sentiment.set(sentiment_seed);
                                                                                set_editing.set(Some(id));
                                                                            }
                                                                        }
                                                                    >
                                                                        "Edit"
                                                                    </button>
                                                                </Show>
                                                                <Show when=move || !manager_view>
                                                                    <button
                                                                        class="btn btn-secondary btn-xs"
                                                                        on:click={
                                                                            let details_entry = details_entry.clone();
                                                                            move |_| set_details.set(Some(details_entry.clone()))
                                                                        }
                                                                    >
                                                                        "View Details"
                                                                    </button>
                                                                </Show>
                                                                <button
                                                                    class="btn btn-ghost btn-xs"
                                                                    on:click=move |_| on_export.run(id)
                                                                >
                                                                    "Export PDF"
                                                                </button>
                                                            </div>
                                                        </div>
                                                    }
                                                }
                                            }
                                        >
                                            <div class="space-y-2">
                                                <div class="form-control">
                                                    <label class="label">
                                                        <span class="label-text">"Strengths"</span>
                                                    </label>
                                                    <textarea
                                                        class="textarea textarea-bordered w-full"
                                                        prop:value=edit_strengths
                                                        on:input=move |ev| {
                                                            set_edit_strengths.set(event_target_value(&ev))
                                                        }
                                                    ></textarea>
                                                </div>
                                                <div class="form-control">
                                                    <label class="label">
                                                        <span class="label-text">"Areas to Improve"</span>
                                                    </label>
                                                    <textarea
                                                        class="textarea textarea-bordered w-full"
                                                        prop:value=edit_areas
                                                        on:input=move |ev| {
                                                            set_edit_areas.set(event_target_value(&ev))
                                                        }
                                                    ></textarea>
                                                </div>
                                                <select
                                                    class="select select-bordered"
                                                    on:change=move |ev| {
                                                        if let Some(s) = Sentiment::from_str(
                                                            &event_target_value(&ev),
                                                        ) {
                                                            set_edit_sentiment.set(s);
                                                        }
                                                    }
                                                >
                                                    {Sentiment::ALL
                                                        .iter()
                                                        .map(|s| {
                                                            let value = s.as_str();
                                                            let selected = *s == sentiment_seed;
                                                            view! {
                                                                <option value=value selected=selected>
                                                                    {s.label()}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                                <div class="flex gap-2">
                                                    <button
                                                        class="btn btn-success btn-xs"
                                                        on:click=move |_| on_save_edit.run(id)
                                                    >
                                                        "Save"
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        on:click=move |_| set_editing.set(None)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </div>
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    }
                />
            </Show>

            <Show when=move || details.with(|d| d.is_some())>
                {move || {
                    details
                        .get()
                        .map(|entry| {
                            view! {
                                <FeedbackDetailsModal
                                    entry=entry
                                    on_acknowledge=on_acknowledge
                                    on_export=on_export
                                    on_close=Callback::new(move |()| set_details.set(None))
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Details dialog: full text, acknowledge (only while unacknowledged),
/// export, and the comment thread.
#[component]
fn FeedbackDetailsModal(
    entry: FeedbackResponse,
    on_acknowledge: Callback<i64>,
    on_export: Callback<i64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = entry.id;
    let acknowledged = entry.acknowledged;
    let edited = date::was_edited(entry.created_at.as_deref(), entry.updated_at.as_deref());

    view! {
        <div class="modal modal-open">
            <div class="modal-box max-w-2xl">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg">"Feedback Details"</h3>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| on_close.run(())>
                        "\u{2715}"
                    </button>
                </div>

                <div class="flex items-center gap-2 mt-2">
                    <span class=sentiment_badge_class(entry.sentiment)>
                        {entry.sentiment.label()}
                    </span>
                    <Show when=move || acknowledged>
                        <span class="badge badge-info">"Acknowledged"</span>
                    </Show>
                    <Show when=move || edited>
                        <span class="badge badge-ghost badge-sm">"edited"</span>
                    </Show>
                    <span class="text-sm text-base-content/60">
                        {date::display_ist_opt(entry.created_at.as_deref())}
                    </span>
                </div>

                <p class="mt-3">
                    <span class="font-semibold">"Strengths: "</span>
                    {entry.strengths.clone()}
                </p>
                <p>
                    <span class="font-semibold">"Areas to Improve: "</span>
                    {entry.areas_to_improve.clone()}
                </p>

                <div class="modal-action justify-start">
                    <Show when=move || !acknowledged>
                        <button
                            class="btn btn-primary btn-sm"
                            on:click=move |_| on_acknowledge.run(id)
                        >
                            "Acknowledge"
                        </button>
                    </Show>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| on_export.run(id)>
                        "Export PDF"
                    </button>
                </div>

                <CommentSection scope=CommentScope::Feedback(id) />
            </div>
        </div>
    }
}
