//! Assignments: manager upload and the shared list.
//!
//! Assignment files take the wider attachment whitelist (PDF, Word,
//! text, images). The optional due date is only appended to the form
//! when one was picked.

use crate::api::use_api;
use crate::components::comments::{CommentScope, CommentSection};
use crate::components::submissions::SubmissionUpload;
use crate::web::download::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::files::{UploadKind, format_file_size, validate_upload};
use teampulse_shared::{AssignmentResponse, date};

#[component]
pub fn AssignmentUpload(on_change: Callback<()>) -> impl IntoView {
    let api = use_api();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (file_label, set_file_label) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_uploading, set_is_uploading) = signal(false);

    let selected_file = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|list| list.get(0));
        let Some(file) = file else {
            selected_file.set_value(None);
            set_file_label.set(None);
            return;
        };
        if let Err(rejection) =
            validate_upload(UploadKind::Attachment, &file.type_(), file.size() as u64)
        {
            set_error.set(Some(rejection.to_string()));
            selected_file.set_value(None);
            set_file_label.set(None);
            input.set_value("");
            return;
        }
        set_error.set(None);
        set_file_label.set(Some(format!(
            "{} ({})",
            file.name(),
            format_file_size(file.size() as u64)
        )));
        selected_file.set_value(Some(file));
    };

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let title = title.get_untracked().trim().to_string();
            if title.is_empty() {
                set_error.set(Some("Title is required".to_string()));
                return;
            }
            let Some(file) = selected_file.get_value() else {
                set_error.set(Some("Please choose a file".to_string()));
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                set_error.set(Some("Failed to build upload".to_string()));
                return;
            };
            let _ = form.append_with_blob("file", &file);
            let _ = form.append_with_str("title", &title);
            let _ = form.append_with_str("description", description.get_untracked().trim());
            let due = due_date.get_untracked();
            if !due.trim().is_empty() {
                let _ = form.append_with_str("due_date", due.trim());
            }
            set_error.set(None);
            set_is_uploading.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.post_multipart("/assignments/upload", form).await {
                    Ok(()) => {
                        let _ = set_title.try_set(String::new());
                        let _ = set_description.try_set(String::new());
                        let _ = set_due_date.try_set(String::new());
                        let _ = set_file_label.try_set(None);
                        selected_file.set_value(None);
                        on_change.run(());
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to upload assignment")));
                    }
                }
                let _ = set_is_uploading.try_set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow mb-4">
            <div class="card-body">
                <h3 class="card-title">"New Assignment"</h3>
                <Show when=move || error.with(|e| e.is_some())>
                    <div class="alert alert-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <form class="space-y-3" on:submit=on_submit>
                    <input
                        type="text"
                        class="input input-bordered w-full"
                        placeholder="Title"
                        prop:value=title
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="textarea textarea-bordered w-full"
                        placeholder="Description (optional)"
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Due date (optional)"</span>
                        </label>
                        <input
                            type="date"
                            class="input input-bordered w-full"
                            prop:value=due_date
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                    <input
                        type="file"
                        class="file-input file-input-bordered w-full"
                        accept=UploadKind::Attachment.accept_attr()
                        on:change=on_file_change
                    />
                    <Show when=move || file_label.with(|l| l.is_some())>
                        <p class="text-sm text-base-content/60">
                            {move || file_label.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button type="submit" class="btn btn-primary" disabled=is_uploading>
                        <Show when=move || is_uploading.get() fallback=|| "Create Assignment">
                            "Uploading..."
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Assignment list. Managers get delete and a submissions link
/// (`on_view_submissions`); employees get an inline submit form. Both
/// roles can download the brief and join the discussion thread.
#[component]
pub fn AssignmentList(
    manager_view: bool,
    reload: ReadSignal<u64>,
    #[prop(optional)] on_view_submissions: Option<Callback<AssignmentResponse>>,
) -> impl IntoView {
    let api = use_api();

    let (assignments, set_assignments) = signal(Vec::<AssignmentResponse>::new());
    let (open_comments, set_open_comments) = signal(Option::<i64>::None);
    let (open_submit, set_open_submit) = signal(Option::<i64>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let list_path = crate::web::route::assignments_list_path(manager_view);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.get::<Vec<AssignmentResponse>>(list_path).await {
                    Ok(list) => {
                        let _ = set_assignments.try_set(list);
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to load assignments")));
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

    let on_download = {
        let api = api.clone();
        move |id: i64, fallback_name: String| {
            let api = api.clone();
            spawn_local(async move {
                let result = async {
                    let download = api.get_blob(&format!("/assignments/{id}/download")).await?;
                    download.save(&fallback_name)
                }
                .await;
                if let Err(err) = result {
                    let _ = set_error.try_set(Some(err.user_message("Failed to download file")));
                }
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        let fetch = fetch.clone();
        move |id: i64| {
            if !confirm("Are you sure you want to delete this assignment?") {
                return;
            }
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api.delete(&format!("/assignments/{id}")).await {
                    Ok(()) => fetch(),
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to delete assignment")));
                    }
                }
            });
        }
    };

    // A successful submission bumps the list so submission counts stay
    // current.
    let on_submitted = {
        let fetch = fetch.clone();
        Callback::new(move |()| {
            set_open_submit.set(None);
            fetch();
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
                when=move || assignments.with(|a| !a.is_empty())
                fallback=|| view! { <p class="text-base-content/60">"No assignments yet"</p> }
            >
                <For
                    each=move || assignments.get()
                    key=|a| a.id
                    children={
                        let on_download = on_download.clone();
                        let on_delete = on_delete.clone();
                        move |assignment: AssignmentResponse| {
                            let download = on_download.clone();
                            let delete = on_delete.clone();
                            let id = assignment.id;
                            let filename = assignment.filename.clone();
                            let for_submissions = assignment.clone();
                            view! {
                                <div class="card bg-base-100 shadow mb-3">
                                    <div class="card-body">
                                        <h3 class="card-title">
                                            {assignment.title.clone()}
                                            <Show when={
                                                let has_due = assignment.due_date.is_some();
                                                move || has_due
                                            }>
                                                <span class="badge badge-warning badge-sm">
                                                    "Due: "
                                                    {date::display_ist_opt(assignment.due_date.as_deref())}
                                                </span>
                                            </Show>
                                        </h3>
                                        <Show when={
                                            let has_description = assignment.description.is_some();
                                            move || has_description
                                        }>
                                            <p>{assignment.description.clone().unwrap_or_default()}</p>
                                        </Show>
                                        <p class="text-sm text-base-content/60">
                                            {assignment.filename.clone()} " \u{00b7} "
                                            {format_file_size(assignment.file_size)} " \u{00b7} "
                                            {assignment.manager_name.clone()} " \u{00b7} "
                                            {date::display_ist_opt(assignment.created_at.as_deref())}
                                            " \u{00b7} " {assignment.submission_count} " submissions"
                                        </p>
                                        <div class="card-actions">
                                            <button
                                                class="btn btn-primary btn-xs"
                                                on:click={
                                                    let download = download.clone();
                                                    let filename = filename.clone();
                                                    move |_| download(id, filename.clone())
                                                }
                                            >
                                                "Download"
                                            </button>
                                            <button
                                                class="btn btn-ghost btn-xs"
                                                on:click=move |_| {
                                                    set_open_comments
                                                        .update(|open| {
                                                            *open = if *open == Some(id) { None } else { Some(id) };
                                                        })
                                                }
                                            >
                                                "Discussion"
                                            </button>
                                            <Show when=move || manager_view>
                                                <button
                                                    class="btn btn-secondary btn-xs"
                                                    on:click={
                                                        let for_submissions = for_submissions.clone();
                                                        move |_| {
                                                            if let Some(cb) = on_view_submissions {
                                                                cb.run(for_submissions.clone());
                                                            }
                                                        }
                                                    }
                                                >
                                                    "View Submissions"
                                                </button>
                                                <button
                                                    class="btn btn-error btn-xs"
                                                    on:click={
                                                        let delete = delete.clone();
                                                        move |_| delete(id)
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </Show>
                                            <Show when=move || !manager_view>
                                                <button
                                                    class="btn btn-secondary btn-xs"
                                                    on:click=move |_| {
                                                        set_open_submit
                                                            .update(|open| {
                                                                *open = if *open == Some(id) { None } else { Some(id) };
                                                            })
                                                    }
                                                >
                                                    "Submit Work"
                                                </button>
                                            </Show>
                                        </div>
                                        <Show when=move || open_submit.get() == Some(id)>
                                            <SubmissionUpload assignment_id=id on_change=on_submitted />
                                        </Show>
                                        <Show when=move || open_comments.get() == Some(id)>
                                            <CommentSection scope=CommentScope::Assignment(id) />
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
