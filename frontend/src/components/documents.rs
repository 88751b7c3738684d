//! Work documents: upload, list, metadata edit, download.
//!
//! Document uploads accept PDF only; the file is checked as soon as it
//! is picked so a bad choice never reaches the submit button.

use crate::api::use_api;
use crate::web::download::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::files::{UploadKind, format_file_size, validate_upload};
use teampulse_shared::{DocumentResponse, DocumentUpdate, date};

#[component]
pub fn DocumentUpload(on_change: Callback<()>) -> impl IntoView {
    let api = use_api();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (is_public, set_is_public) = signal(false);
    let (file_label, set_file_label) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_uploading, set_is_uploading) = signal(false);

    // web_sys::File is not Send; keep it off the reactive graph.
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
            validate_upload(UploadKind::Document, &file.type_(), file.size() as u64)
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
            let _ = form.append_with_str(
                "is_public",
                if is_public.get_untracked() { "true" } else { "false" },
            );
            set_error.set(None);
            set_is_uploading.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.post_multipart("/documents/upload", form).await {
                    Ok(()) => {
                        let _ = set_title.try_set(String::new());
                        let _ = set_description.try_set(String::new());
                        let _ = set_is_public.try_set(false);
                        let _ = set_file_label.try_set(None);
                        selected_file.set_value(None);
                        on_change.run(());
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to upload document")));
                    }
                }
                let _ = set_is_uploading.try_set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow mb-4">
            <div class="card-body">
                <h3 class="card-title">"Upload Document"</h3>
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
                    <input
                        type="file"
                        class="file-input file-input-bordered w-full"
                        accept=UploadKind::Document.accept_attr()
                        on:change=on_file_change
                    />
                    <Show when=move || file_label.with(|l| l.is_some())>
                        <p class="text-sm text-base-content/60">
                            {move || file_label.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox"
                            prop:checked=is_public
                            on:change=move |ev| set_is_public.set(event_target_checked(&ev))
                        />
                        <span class="label-text">"Share with team"</span>
                    </label>
                    <button type="submit" class="btn btn-primary" disabled=is_uploading>
                        <Show when=move || is_uploading.get() fallback=|| "Upload">
                            "Uploading..."
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Document list. Owners (`owner_view`) get metadata edit and delete;
/// the team view is download-only.
#[component]
pub fn DocumentList(owner_view: bool, reload: ReadSignal<u64>) -> impl IntoView {
    let api = use_api();

    let (documents, set_documents) = signal(Vec::<DocumentResponse>::new());
    let (editing, set_editing) = signal(Option::<i64>::None);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_description, set_edit_description) = signal(String::new());
    let (edit_public, set_edit_public) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let list_path = if owner_view {
        "/documents/my"
    } else {
        "/documents/team"
    };

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.get::<Vec<DocumentResponse>>(list_path).await {
                    Ok(list) => {
                        let _ = set_documents.try_set(list);
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to load documents")));
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
                    let download = api.get_blob(&format!("/documents/{id}/download")).await?;
                    download.save(&fallback_name)
                }
                .await;
                if let Err(err) = result {
                    let _ = set_error.try_set(Some(err.user_message("Failed to download file")));
                }
            });
        }
    };

    let on_save_edit = {
        let api = api.clone();
        let fetch = fetch.clone();
        move |id: i64| {
            let title = edit_title.get_untracked().trim().to_string();
            if title.is_empty() {
                return;
            }
            let body = DocumentUpdate {
                title,
                description: edit_description.get_untracked().trim().to_string(),
                is_public: edit_public.get_untracked(),
            };
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api.patch_json(&format!("/documents/{id}"), &body).await {
                    Ok(()) => {
                        let _ = set_editing.try_set(None);
                        fetch();
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to update document")));
                    }
                }
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        let fetch = fetch.clone();
        move |id: i64| {
            if !confirm("Are you sure you want to delete this document?") {
                return;
            }
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api.delete(&format!("/documents/{id}")).await {
                    Ok(()) => fetch(),
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to delete document")));
                    }
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
                when=move || documents.with(|d| !d.is_empty())
                fallback=|| view! { <p class="text-base-content/60">"No documents yet"</p> }
            >
                <For
                    each=move || documents.get()
                    key=|d| (d.id, d.updated_at.clone())
                    children={
                        let on_download = on_download.clone();
                        let on_save_edit = on_save_edit.clone();
                        let on_delete = on_delete.clone();
                        move |document: DocumentResponse| {
                            let download = on_download.clone();
                            let save = on_save_edit.clone();
                            let delete = on_delete.clone();
                            let id = document.id;
                            let filename = document.filename.clone();
                            let title_seed = document.title.clone();
                            let description_seed =
                                document.description.clone().unwrap_or_default();
                            let public_seed = document.is_public;
                            view! {
                                <div class="card bg-base-100 shadow mb-3">
                                    <div class="card-body">
                                        <Show
                                            when=move || editing.get() == Some(id)
                                            fallback={
                                                let document = document.clone();
                                                let download = download.clone();
                                                let delete = delete.clone();
                                                let filename = filename.clone();
                                                let title_seed = title_seed.clone();
                                                let description_seed = description_seed.clone();
                                                move || {
                                                    let document = document.clone();
                                                    let download = download.clone();
                                                    let delete = delete.clone();
                                                    let filename = filename.clone();
                                                    let title_seed = title_seed.clone();
                                                    let description_seed = description_seed.clone();
                                                    view! {
                                                        <div>
                                                            <h3 class="card-title">
                                                                {document.title.clone()}
                                                                <Show when=move || document.is_public>
                                                                    <span class="badge badge-info badge-sm">"shared"</span>
                                                                </Show>
                                                            </h3>
                                                            <Show when={
                                                                let has_description = document.description.is_some();
                                                                move || has_description
                                                            }>
                                                                <p>{document.description.clone().unwrap_or_default()}</p>
                                                            </Show>
                                                            <p class="text-sm text-base-content/60">
                                                                {document.filename.clone()} " \u{00b7} "
                                                                {format_file_size(document.file_size)} " \u{00b7} "
                                                                {document.employee_name.clone()} " \u{00b7} "
                                                                {date::display_ist_opt(document.created_at.as_deref())}
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
                                                                <Show when=move || owner_view>
                                                                    <button
                                                                        class="btn btn-warning btn-xs"
                                                                        on:click={
                                                                            let title_seed = title_seed.clone();
                                                                            let description_seed = description_seed.clone();
                                                                            move |_| {
                                                                                set_edit_title.set(title_seed.clone());
                                                                                set_edit_description.set(description_seed.clone());
                                                                                set_edit_public.set(public_seed);
                                                                                set_editing.set(Some(id));
                                                                            }
                                                                        }
                                                                    >
                                                                        "Edit"
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
                                                            </div>
                                                        </div>
                                                    }
                                                }
                                            }
                                        >
                                            <div class="space-y-2">
                                                <input
                                                    type="text"
                                                    class="input input-bordered w-full"
                                                    prop:value=edit_title
                                                    on:input=move |ev| {
                                                        set_edit_title.set(event_target_value(&ev))
                                                    }
                                                />
                                                <textarea
                                                    class="textarea textarea-bordered w-full"
                                                    prop:value=edit_description
                                                    on:input=move |ev| {
                                                        set_edit_description.set(event_target_value(&ev))
                                                    }
                                                ></textarea>
                                                <label class="label cursor-pointer justify-start gap-2">
                                                    <input
                                                        type="checkbox"
                                                        class="checkbox"
                                                        prop:checked=edit_public
                                                        on:change=move |ev| {
                                                            set_edit_public.set(event_target_checked(&ev))
                                                        }
                                                    />
                                                    <span class="label-text">"Share with team"</span>
                                                </label>
                                                <div class="flex gap-2">
                                                    <button
                                                        class="btn btn-success btn-xs"
                                                        on:click={
                                                            let save = save.clone();
                                                            move |_| save(id)
                                                        }
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
        </div>
    }
}
