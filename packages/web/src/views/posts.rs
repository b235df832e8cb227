use dioxus::prelude::*;

use api::NewPost;
use ui::components::{
    ConfirmationModal, EmptyState, ErrorState, Loader, Modal, NewPostCard, PostCard, PostForm,
};
use ui::{use_posts, use_query_client, PostsQuery};

use crate::Route;

#[component]
pub fn Posts(query: PostsQuery) -> Element {
    let client = use_query_client();
    let user_id = query.user_id().map(str::to_string);
    let mut posts = use_posts(user_id.clone());

    let mut show_form = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);

    let users_href = Route::Users {}.to_string();

    let Some(user_id) = user_id else {
        return rsx! {
            main {
                class: "page",
                EmptyState {
                    title: "No user selected",
                    message: "Pick a user to see their posts.",
                    Link { class: "text-sm underline", to: Route::Users {}, "View users" }
                }
            }
        };
    };

    let user_name = query.user_name.clone().unwrap_or_else(|| "Unknown user".to_string());
    let user_email = query.user_email.clone().unwrap_or_default();

    let create_client = client.clone();
    let on_submit = move |post: NewPost| {
        let client = create_client.clone();
        let user_id = user_id.clone();
        submitting.set(true);
        spawn(async move {
            match client.create_post(&user_id, &post).await {
                Ok(_) => {
                    show_form.set(false);
                    action_error.set(None);
                }
                Err(e) => {
                    tracing::error!("create post: {e}");
                    action_error.set(Some(e));
                }
            }
            submitting.set(false);
        });
    };

    let on_confirm_delete = move |_: ()| {
        let Some(post_id) = pending_delete() else {
            return;
        };
        let client = client.clone();
        deleting.set(true);
        spawn(async move {
            if let Err(e) = client.delete_post(&post_id).await {
                tracing::error!("delete post {post_id}: {e}");
                action_error.set(Some(e));
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let content = match &*posts.read() {
        None => rsx! {
            div { class: "flex justify-center py-16", Loader {} }
        },
        Some(Err(e)) => rsx! {
            ErrorState {
                title: "Could not load posts",
                message: "{e}",
                back_href: users_href.clone(),
                back_label: "Back to users",
                on_retry: move |_| posts.restart(),
            }
        },
        Some(Ok(list)) => {
            let count = list.len();
            let deleting_id = pending_delete().filter(|_| deleting());
            let cards: Vec<_> = list
                .iter()
                .map(|post| (post.clone(), deleting_id.as_deref() == Some(post.id.as_str())))
                .collect();
            rsx! {
                p {
                    class: "m-0 mb-6 text-sm text-neutral-500",
                    "{user_email} • {count} "
                    if count == 1 { "post" } else { "posts" }
                }
                div {
                    class: "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    NewPostCard { onclick: move |_| show_form.set(true) }
                    for (post, is_deleting) in cards {
                        PostCard {
                            key: "{post.id}",
                            deleting: is_deleting,
                            on_delete: move |id| pending_delete.set(Some(id)),
                            post,
                        }
                    }
                }
            }
        }
    };

    rsx! {
        main {
            class: "page",
            nav {
                class: "mb-2 text-sm text-neutral-500",
                Link { class: "hover:underline", to: Route::Users {}, "Users" }
                " / "
                span { class: "text-neutral-800", "{user_name}" }
            }
            h1 { class: "m-0 mb-1 text-3xl font-semibold", "{user_name}" }
            if let Some(message) = action_error() {
                p { class: "m-0 mb-4 text-sm text-red-600", role: "alert", "{message}" }
            }
            {content}

            Modal {
                open: show_form(),
                title: "New post",
                on_close: move |_| show_form.set(false),
                PostForm {
                    submitting: submitting(),
                    on_submit,
                    on_cancel: move |_| show_form.set(false),
                }
            }
            ConfirmationModal {
                open: pending_delete().is_some(),
                title: "Delete post",
                message: "Are you sure you want to delete this post? This cannot be undone.",
                confirm_label: "Delete",
                loading: deleting(),
                on_confirm: on_confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
