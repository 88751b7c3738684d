//! Assignment submissions: employee upload and the manager's per
//! assignment listing.

use crate::api::use_api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::files::{UploadKind, format_file_size, validate_upload};
use teampulse_shared::{SubmissionResponse, date};

/// Inline submit form under an assignment. Uses the attachment
/// whitelist, same as the assignment brief itself.
#[component]
pub fn SubmissionUpload(assignment_id: i64, on_change: Callback<()>) -> impl IntoView {
    let api = use_api();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
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
            let _ = form.append_with_str("assignment_id", &assignment_id.to_string());
            let _ = form.append_with_str("title", &title);
            let _ = form.append_with_str("description", description.get_untracked().trim());
            set_error.set(None);
            set_is_uploading.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.post_multipart("/submissions/upload", form).await {
                    Ok(()) => {
                        let _ = set_title.try_set(String::new());
                        let _ = set_description.try_set(String::new());
                        let _ = set_file_label.try_set(None);
                        selected_file.set_value(None);
                        on_change.run(());
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to submit your work")));
                    }
                }
                let _ = set_is_uploading.try_set(false);
            });
        }
    };

    view! {
        <div class="bg-base-200 rounded p-4 mt-3">
            <h4 class="font-semibold mb-2">"Submit Your Work"</h4>
            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error mb-2">
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
                    placeholder="Notes for your manager (optional)"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
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
                <button type="submit" class="btn btn-primary btn-sm" disabled=is_uploading>
                    <Show when=move || is_uploading.get() fallback=|| "Submit">
                        "Submitting..."
                    </Show>
                </button>
            </form>
        </div>
    }
}

/// All submissions for one assignment; the manager's review view.
#[component]
pub fn SubmissionList(assignment_id: i64) -> impl IntoView {
    let api = use_api();

    let (submissions, set_submissions) = signal(Vec::<SubmissionResponse>::new());
    let (error, set_error) = signal(Option::<String>::None);

    {
        let api = api.clone();
        spawn_local(async move {
            match api
                .get::<Vec<SubmissionResponse>>(&format!("/submissions/assignment/{assignment_id}"))
                .await
            {
                Ok(list) => {
                    let _ = set_submissions.try_set(list);
                }
                Err(err) => {
                    let _ = set_error.try_set(Some(err.user_message("Failed to load submissions")));
                }
            }
        });
    }

    let on_download = {
        let api = api.clone();
        move |id: i64, fallback_name: String| {
            let api = api.clone();
            spawn_local(async move {
                let result = async {
                    let download = api.get_blob(&format!("/submissions/{id}/download")).await?;
                    download.save(&fallback_name)
                }
                .await;
                if let Err(err) = result {
                    let _ = set_error.try_set(Some(err.user_message("Failed to download file")));
                }
            });
        }
    };

    view! {
        <div>
            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error mb-2">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || submissions.with(|s| !s.is_empty())
                fallback=|| view! { <p class="text-base-content/60">"No submissions yet"</p> }
            >
                <For
                    each=move || submissions.get()
                    key=|s| s.id
                    children={
                        let on_download = on_download.clone();
                        move |submission: SubmissionResponse| {
                            let download = on_download.clone();
                            let id = submission.id;
                            let filename = submission.filename.clone();
                            view! {
                                <div class="card bg-base-100 shadow mb-3">
                                    <div class="card-body">
                                        <h4 class="card-title text-base">
                                            {submission.title.clone()}
                                            <span class="badge badge-neutral badge-sm">
                                                {submission.employee_name.clone()}
                                            </span>
                                        </h4>
                                        <Show when={
                                            let has_description = submission.description.is_some();
                                            move || has_description
                                        }>
                                            <p>{submission.description.clone().unwrap_or_default()}</p>
                                        </Show>
                                        <p class="text-sm text-base-content/60">
                                            {submission.filename.clone()} " \u{00b7} "
                                            {format_file_size(submission.file_size)} " \u{00b7} "
                                            {date::display_ist_opt(submission.submitted_at.as_deref())}
                                        </p>
                                        <div class="card-actions">
                                            <button
                                                class="btn btn-primary btn-xs"
                                                on:click={
                                                    let filename = filename.clone();
                                                    move |_| download(id, filename.clone())
                                                }
                                            >
                                                "Download"
                                            </button>
                                        </div>
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
