//! Team announcements: manager authoring plus the shared list view.

use crate::api::use_api;
use crate::web::download::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{AnnouncementCreate, AnnouncementResponse, date};

/// Manager-side form. `on_change` fires after a successful create so the
/// owning page can bump its reload counter.
#[component]
pub fn AnnouncementForm(on_change: Callback<()>) -> impl IntoView {
    let api = use_api();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let title = title.get_untracked().trim().to_string();
            let content = content.get_untracked().trim().to_string();
            if title.is_empty() || content.is_empty() {
                set_error.set(Some("Title and content are required".to_string()));
                return;
            }
            set_error.set(None);
            set_is_submitting.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api
                    .post_json("/announcements/", &AnnouncementCreate { title, content })
                    .await
                {
                    Ok(()) => {
                        let _ = set_title.try_set(String::new());
                        let _ = set_content.try_set(String::new());
                        on_change.run(());
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to post announcement")));
                    }
                }
                let _ = set_is_submitting.try_set(false);
            });
        }
    };

    view! {
        <div class="card bg-base-100 shadow mb-4">
            <div class="card-body">
                <h3 class="card-title">"New Announcement"</h3>
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
                        placeholder="Write your announcement..."
                        prop:value=content
                        on:input=move |ev| set_content.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="btn btn-primary" disabled=is_submitting>
                        <Show when=move || is_submitting.get() fallback=|| "Post Announcement">
                            "Posting..."
                        </Show>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Announcement list. Managers see their own announcements with edit and
/// delete controls; employees see their team's, read-only. Re-fetches
/// whenever `reload` changes.
#[component]
pub fn AnnouncementList(manager_view: bool, reload: ReadSignal<u64>) -> impl IntoView {
    let api = use_api();

    let (announcements, set_announcements) = signal(Vec::<AnnouncementResponse>::new());
    let (editing, set_editing) = signal(Option::<i64>::None);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_content, set_edit_content) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    let list_path = crate::web::route::announcements_list_path(manager_view);

    let fetch = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.get::<Vec<AnnouncementResponse>>(list_path).await {
                    Ok(list) => {
                        let _ = set_announcements.try_set(list);
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to load announcements")));
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

    let on_save_edit = {
        let api = api.clone();
        let fetch = fetch.clone();
        move |id: i64| {
            let title = edit_title.get_untracked().trim().to_string();
            let content = edit_content.get_untracked().trim().to_string();
            if title.is_empty() || content.is_empty() {
                return;
            }
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api
                    .patch_json(
                        &format!("/announcements/{id}"),
                        &AnnouncementCreate { title, content },
                    )
                    .await
                {
                    Ok(()) => {
                        let _ = set_editing.try_set(None);
                        fetch();
                    }
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to update announcement")));
                    }
                }
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        let fetch = fetch.clone();
        move |id: i64| {
            if !confirm("Are you sure you want to delete this announcement?") {
                return;
            }
            let api = api.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api.delete(&format!("/announcements/{id}")).await {
                    Ok(()) => fetch(),
                    Err(err) => {
                        let _ = set_error
                            .try_set(Some(err.user_message("Failed to delete announcement")));
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
                when=move || announcements.with(|a| !a.is_empty())
                fallback=|| {
                    view! { <p class="text-base-content/60">"No announcements yet"</p> }
                }
            >
                <For
                    each=move || announcements.get()
                    key=|a| (a.id, a.updated_at.clone())
                    children={
                        let on_save_edit = on_save_edit.clone();
                        let on_delete = on_delete.clone();
                        move |announcement: AnnouncementResponse| {
                            let save = on_save_edit.clone();
                            let delete = on_delete.clone();
                            let id = announcement.id;
                            let edited = date::was_edited(
                                announcement.created_at.as_deref(),
                                announcement.updated_at.as_deref(),
                            );
                            let title_seed = announcement.title.clone();
                            let content_seed = announcement.content.clone();
                            view! {
                                <div class="card bg-base-100 shadow mb-3">
                                    <div class="card-body">
                                        <Show
                                            when=move || editing.get() == Some(id)
                                            fallback={
                                                let announcement = announcement.clone();
                                                let delete = delete.clone();
                                                let title_seed = title_seed.clone();
                                                let content_seed = content_seed.clone();
                                                move || {
                                                    let announcement = announcement.clone();
                                                    let delete = delete.clone();
                                                    let title_seed = title_seed.clone();
                                                    let content_seed = content_seed.clone();
                                                    view! {
                                                        <div>
                                                            <h3 class="card-title">
                                                                {announcement.title.clone()}
                                                                <Show when=move || edited>
                                                                    <span class="badge badge-ghost badge-sm">"edited"</span>
                                                                </Show>
                                                            </h3>
                                                            <p class="whitespace-pre-wrap">
                                                                {announcement.content.clone()}
                                                            </p>
                                                            <p class="text-sm text-base-content/60">
                                                                "By " {announcement.manager_name.clone()} " on "
                                                                {date::display_ist_opt(
                                                                    announcement.created_at.as_deref(),
                                                                )}
                                                            </p>
                                                            <Show when=move || manager_view>
                                                                <div class="card-actions">
                                                                    <button
                                                                        class="btn btn-warning btn-xs"
                                                                        on:click={
                                                                            let title_seed = title_seed.clone();
                                                                            let content_seed = content_seed.clone();
                                                                            move |_| {
                                                                                set_edit_title.set(title_seed.clone());
                                                                                set_edit_content.set(content_seed.clone());
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
                                                                </div>
                                                            </Show>
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
                                                    prop:value=edit_content
                                                    on:input=move |ev| {
                                                        set_edit_content.set(event_target_value(&ev))
                                                    }
                                                ></textarea>
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
