use api::Post;
use dioxus::prelude::*;

use super::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn PostCard(
    post: Post,
    #[props(default)] deleting: bool,
    on_delete: EventHandler<String>,
) -> Element {
    let id = post.id.clone();

    rsx! {
        article {
            class: "relative flex flex-col gap-2 h-72 overflow-hidden rounded-lg border border-neutral-200 bg-white p-6 shadow-sm",
            div {
                class: "absolute top-2 right-2",
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Icon,
                    title: "Delete post",
                    loading: deleting,
                    onclick: move |_| on_delete.call(id.clone()),
                    "✕"
                }
            }
            h3 { class: "m-0 pr-8 text-lg font-semibold text-neutral-900 line-clamp-2", "{post.title}" }
            p { class: "m-0 text-sm text-neutral-600 whitespace-pre-line line-clamp-[8]", "{post.body}" }
        }
    }
}

/// Placeholder card that opens the new-post form.
#[component]
pub fn NewPostCard(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "flex flex-col items-center justify-center gap-2 h-72 rounded-lg border-2 border-dashed border-neutral-300 bg-transparent text-neutral-500 hover:border-neutral-400 hover:text-neutral-700",
            onclick: move |_| onclick.call(()),
            span { class: "text-3xl leading-none", "+" }
            span { class: "text-sm font-medium", "New Post" }
        }
    }
}
