//! Peer-to-peer feedback: give to a teammate, review what came in.

use crate::api::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{PeerFeedbackCreate, PeerFeedbackResponse, Sentiment, UserResponse, date};

#[component]
pub fn PeerFeedbackForm(on_change: Callback<()>) -> impl IntoView {
    let api = use_api();

    let (team_members, set_team_members) = signal(Vec::<UserResponse>::new());
    let (recipient, set_recipient) = signal(Option::<i64>::None);
    let (strengths, set_strengths) = signal(String::new());
    let (areas, set_areas) = signal(String::new());
    let (sentiment, set_sentiment) = signal(Sentiment::Positive);
    let (is_anonymous, set_is_anonymous) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // Teammates the current user may address; the user themselves is
    // already excluded server-side.
    {
        let api = api.clone();
        spawn_local(async move {
            match api
                .get::<Vec<UserResponse>>("/peer-feedback/team-members")
                .await
            {
                Ok(members) => {
                    let _ = set_team_members.try_set(members);
                }
                Err(err) => {
                    let _ =
                        set_error.try_set(Some(err.user_message("Failed to load team members")));
                }
            }
        });
    }

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(to_employee_id) = recipient.get_untracked() else {
                set_error.set(Some("Please choose a teammate".to_string()));
                return;
            };
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
            let body = PeerFeedbackCreate {
                to_employee_id,
                strengths,
                areas_to_improve: areas,
                sentiment: sentiment.get_untracked(),
                is_anonymous: is_anonymous.get_untracked(),
            };
            let api = api.clone();
            spawn_local(async move {
                match api.post_json("/peer-feedback/", &body).await {
                    Ok(()) => {
                        let _ = set_strengths.try_set(String::new());
                        let _ = set_areas.try_set(String::new());
                        let _ = set_sentiment.try_set(Sentiment::Positive);
                        let _ = set_is_anonymous.try_set(false);
                        on_change.run(());
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to submit peer feedback")));
                    }
                }
                let _ = set_is_submitting.try_set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow mb-4">
            <div class="card-body">
                <h3 class="card-title">"Give Peer Feedback"</h3>
                <Show when=move || error.with(|e| e.is_some())>
                    <div class="alert alert-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <form class="space-y-3" on:submit=on_submit>
                    <select
                        class="select select-bordered w-full"
                        on:change=move |ev| {
                            set_recipient.set(event_target_value(&ev).parse::<i64>().ok());
                        }
                    >
                        <option value="" selected=true>
                            "Select a teammate..."
                        </option>
                        <For
                            each=move || team_members.get()
                            key=|m| m.id
                            children=|member: UserResponse| {
                                view! { <option value=member.id.to_string()>{member.name}</option> }
                            }
                        />
                    </select>
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
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox"
                            prop:checked=is_anonymous
                            on:change=move |ev| set_is_anonymous.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"Send anonymously"</span>
                    </label>
                    <button type="submit" class="btn btn-primary" disabled=is_submitting>
                        <Show when=move || is_submitting.get() fallback=|| "Send Feedback">
                            "Sending..."
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Peer feedback addressed to the current user.
#[component]
pub fn PeerFeedbackReceived(reload: ReadSignal<u64>) -> impl IntoView {
    let api = use_api();

    let (entries, set_entries) = signal(Vec::<PeerFeedbackResponse>::new());
    let (error, set_error) = signal(Option::<String>::None);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api
                    .get::<Vec<PeerFeedbackResponse>>("/peer-feedback/received")
                    .await
                {
                    Ok(list) => {
                        let _ = set_entries.try_set(list);
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to load peer feedback")));
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

    let on_acknowledge = {
        let api = api.clone();
        let fetch = fetch.clone();
        move |id: i64| {
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api
                    .post_empty(&format!("/peer-feedback/{id}/acknowledge"))
                    .await
                {
                    Ok(()) => fetch(),
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to acknowledge feedback")));
                    }
                }
            });
        }
    };

    view! {
        <div>
            <h3 class="font-semibold text-lg mb-2">"Received Feedback"</h3>

            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error mb-2">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || entries.with(|e| !e.is_empty())
                fallback=|| {
                    view! { <p class="text-base-content/60">"No peer feedback received yet"</p> }
                }
            >
                <For
                    each=move || entries.get()
                    key=|f| (f.id, f.acknowledged)
                    children={
                        let on_acknowledge = on_acknowledge.clone();
                        move |feedback: PeerFeedbackResponse| {
                            let acknowledge = on_acknowledge.clone();
                            let id = feedback.id;
                            let acknowledged = feedback.acknowledged;
                            let author = feedback
                                .from_employee_name
                                .clone()
                                .unwrap_or_else(|| "Anonymous".to_string());
                            let badge_class = match feedback.sentiment {
                                Sentiment::Positive => "badge badge-success",
                                Sentiment::Neutral => "badge badge-warning",
                                Sentiment::Negative => "badge badge-error",
                            };
                            view! {
                                <div class="card bg-base-100 shadow mb-3">
                                    <div class="card-body">
                                        <div class="flex items-center gap-2">
                                            <span class="font-semibold">"From: " {author}</span>
                                            <span class=badge_class>{feedback.sentiment.label()}</span>
                                            <Show when=move || acknowledged>
                                                <span class="badge badge-info">"Acknowledged"</span>
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
                                        <Show when=move || !acknowledged>
                                            <div class="card-actions mt-2">
                                                <button
                                                    class="btn btn-primary btn-xs"
                                                    on:click={
                                                        let acknowledge = acknowledge.clone();
                                                        move |_| acknowledge(id)
                                                    }
                                                >
                                                    "Acknowledge"
                                                </button>
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            }
                        }
                    }
                />
            </Show>
        </div>
    }
}
