//! Discussion threads on feedback entries and assignments.
//!
//! Both families share one component; [`CommentScope`] picks the
//! endpoint family and the create body.

use crate::api::{ApiClient, use_api};
use crate::session::use_session;
use crate::web::download::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use teampulse_shared::{
    AssignmentCommentCreate, CommentResponse, CommentUpdate, FeedbackCommentCreate, date,
};

/// Which thread a comment section is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentScope {
    Feedback(i64),
    Assignment(i64),
}

impl CommentScope {
    fn list_path(&self) -> String {
        match self {
            CommentScope::Feedback(id) => format!("/comments/feedback/{id}"),
            CommentScope::Assignment(id) => format!("/assignment-comments/assignment/{id}"),
        }
    }

    fn item_path(&self, comment_id: i64) -> String {
        match self {
            CommentScope::Feedback(_) => format!("/comments/{comment_id}"),
            CommentScope::Assignment(_) => format!("/assignment-comments/{comment_id}"),
        }
    }

    async fn create(&self, api: &ApiClient, content: String) -> Result<(), crate::api::ApiError> {
        match self {
            CommentScope::Feedback(id) => {
                api.post_json(
                    "/comments/",
                    &FeedbackCommentCreate {
                        feedback_id: *id,
                        content,
                    },
                )
                .await
            }
            CommentScope::Assignment(id) => {
                api.post_json(
                    "/assignment-comments/",
                    &AssignmentCommentCreate {
                        assignment_id: *id,
                        content,
                    },
                )
                .await
            }
        }
    }
}

#[component]
pub fn CommentSection(scope: CommentScope) -> impl IntoView {
    let api = use_api();
    let session = use_session();

    let (comments, set_comments) = signal(Vec::<CommentResponse>::new());
    let (new_comment, set_new_comment) = signal(String::new());
    let (editing, set_editing) = signal(Option::<i64>::None);
    let (edit_content, set_edit_content) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_posting, set_is_posting) = signal(false);

    let current_user_id = move || {
        session
            .principal
            .with(|p| p.as_ref().map(|u| u.id).unwrap_or(-1))
    };

    let fetch_comments = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match api.get::<Vec<CommentResponse>>(&scope.list_path()).await {
                    Ok(list) => {
                        let _ = set_comments.try_set(list);
                    }
                    Err(err) => {
                        let _ = set_error.try_set(Some(err.user_message("Failed to load comments")));
                    }
                }
            });
        }
    };
    fetch_comments();

    let on_submit = {
        let api = api.clone();
        let fetch_comments = fetch_comments.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let content = new_comment.get_untracked();
            if content.trim().is_empty() {
                return;
            }
            set_is_posting.set(true);
            set_error.set(None);
            let api = api.clone();
            let fetch_comments = fetch_comments.clone();
            spawn_local(async move {
                match scope.create(&api, content).await {
                    Ok(()) => {
                        let _ = set_new_comment.try_set(String::new());
                        fetch_comments();
                    }
                    Err(err) => {
                        let _ = set_error.try_set(Some(err.user_message("Failed to post comment")));
                    }
                }
                let _ = set_is_posting.try_set(false);
            });
        }
    };

    let on_save_edit = {
        let api = api.clone();
        let fetch_comments = fetch_comments.clone();
        move |comment_id: i64| {
            let content = edit_content.get_untracked();
            if content.trim().is_empty() {
                return;
            }
            let api = api.clone();
            let fetch_comments = fetch_comments.clone();
            spawn_local(async move {
                match api
                    .put_json(&scope.item_path(comment_id), &CommentUpdate { content })
                    .await
                {
                    Ok(()) => {
                        let _ = set_editing.try_set(None);
                        let _ = set_edit_content.try_set(String::new());
                        fetch_comments();
                    }
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to update comment")));
                    }
                }
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        let fetch_comments = fetch_comments.clone();
        move |comment_id: i64| {
            if !confirm("Are you sure you want to delete this comment?") {
                return;
            }
            let api = api.clone();
            let fetch_comments = fetch_comments.clone();
            spawn_local(async move {
                match api.delete(&scope.item_path(comment_id)).await {
                    Ok(()) => fetch_comments(),
                    Err(err) => {
                        let _ =
                            set_error.try_set(Some(err.user_message("Failed to delete comment")));
                    }
                }
            });
        }
    };

    view! {
        <div class="mt-4 border-t border-base-200 pt-4">
            <h4 class="font-semibold mb-2">"Comments"</h4>

            <Show when=move || error.with(|e| e.is_some())>
                <div class="alert alert-error alert-sm mb-2">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <form class="mb-4" on:submit=on_submit>
                <textarea
                    class="textarea textarea-bordered w-full"
                    placeholder="Write your comment here..."
                    prop:value=new_comment
                    on:input=move |ev| set_new_comment.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-primary btn-sm mt-2" disabled=is_posting>
                    <Show when=move || is_posting.get() fallback=|| "Post Comment">
                        "Posting..."
                    </Show>
                </button>
            </form>

            <Show
                when=move || comments.with(|cs| !cs.is_empty())
                fallback=|| {
                    view! {
                        <p class="text-base-content/60 italic">
                            "No comments yet. Be the first to comment!"
                        </p>
                    }
                }
            >
                <For
                    each=move || comments.get()
                    key=|c| (c.id, c.updated_at.clone())
                    children={
                        let on_save_edit = on_save_edit.clone();
                        let on_delete = on_delete.clone();
                        move |comment: CommentResponse| {
                            let save = on_save_edit.clone();
                            let delete = on_delete.clone();
                            let id = comment.id;
                            let owned = comment.employee_id;
                            let edit_seed = comment.content.clone();
                            let edited = date::was_edited(
                                comment.created_at.as_deref(),
                                comment.updated_at.as_deref(),
                            );
                            view! {
                                <div class="bg-base-200 rounded p-3 mb-2">
                                    <Show
                                        when=move || editing.get() == Some(id)
                                        fallback={
                                            let comment = comment.clone();
                                            let delete = delete.clone();
                                            let edit_seed = edit_seed.clone();
                                            move || {
                                                let comment = comment.clone();
                                                let delete = delete.clone();
                                                let edit_seed = edit_seed.clone();
                                                view! {
                                                    <div>
                                                        <div class="mb-1">
                                                            <span class="font-semibold">
                                                                {comment.employee_name.clone()}
                                                            </span>
                                                            <span class="text-xs text-base-content/60 ml-2">
                                                                {date::display_ist_opt(comment.created_at.as_deref())}
                                                            </span>
                                                            <Show when=move || edited>
                                                                <span class="text-xs text-base-content/60 ml-2">
                                                                    "(edited)"
                                                                </span>
                                                            </Show>
                                                        </div>
                                                        <p class="whitespace-pre-wrap bg-base-100 rounded p-2">
                                                            {comment.content.clone()}
                                                        </p>
                                                        <Show when=move || owned == current_user_id()>
                                                            <div class="mt-2 flex gap-2">
                                                                <button
                                                                    class="btn btn-warning btn-xs"
                                                                    on:click={
                                                                        let edit_seed = edit_seed.clone();
                                                                        move |_| {
                                                                            set_edit_content.set(edit_seed.clone());
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
                                        <div>
                                            <textarea
                                                class="textarea textarea-bordered w-full"
                                                prop:value=edit_content
                                                on:input=move |ev| {
                                                    set_edit_content.set(event_target_value(&ev))
                                                }
                                            ></textarea>
                                            <div class="mt-2 flex gap-2">
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
                                                    on:click=move |_| {
                                                        set_editing.set(None);
                                                        set_edit_content.set(String::new());
                                                    }
                                                >
                                                    "Cancel"
                                                </button>
                                            </div>
                                        </div>
                                    </Show>
                                </div>
                            }
                        }
                    }
                />
            </Show>
        </div>
    }
}
