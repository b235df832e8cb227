use api::NewPost;
use dioxus::prelude::*;

use super::{Button, ButtonVariant};
use crate::validation::validate_post_form;

/// Publishing needs a non-blank title and content; length limits are left to
/// validation so their messages can be shown.
pub fn can_publish(title: &str, content: &str) -> bool {
    !title.trim().is_empty() && !content.trim().is_empty()
}

/// Title and content inputs. `on_submit` only fires with a post that passed
/// validation; otherwise the errors are listed above the buttons.
#[component]
pub fn PostForm(
    #[props(default)] submitting: bool,
    on_submit: EventHandler<NewPost>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut errors = use_signal(Vec::<String>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let post = NewPost::new(title(), content());
        let result = validate_post_form(&post);
        if !result.is_valid {
            errors.set(result.errors);
            return;
        }
        errors.set(Vec::new());
        on_submit.call(post);
    };

    let handle_cancel = move |_: MouseEvent| {
        title.set(String::new());
        content.set(String::new());
        errors.set(Vec::new());
        on_cancel.call(());
    };

    rsx! {
        form {
            class: "flex flex-col gap-4",
            onsubmit: handle_submit,
            div {
                label { r#for: "post-title", class: "block mb-1.5 text-sm font-medium text-neutral-700", "Post title" }
                input {
                    id: "post-title",
                    class: "w-full rounded border border-neutral-300 px-3 py-2 text-sm outline-none focus:border-neutral-500",
                    r#type: "text",
                    placeholder: "Give your post a title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }
            div {
                label { r#for: "post-content", class: "block mb-1.5 text-sm font-medium text-neutral-700", "Post content" }
                textarea {
                    id: "post-content",
                    class: "w-full h-40 rounded border border-neutral-300 px-3 py-2 text-sm outline-none resize-none focus:border-neutral-500",
                    placeholder: "Write something...",
                    value: content(),
                    oninput: move |evt: FormEvent| content.set(evt.value()),
                }
            }
            if !errors().is_empty() {
                ul {
                    class: "m-0 pl-5 text-sm text-red-600",
                    for error in errors() {
                        li { key: "{error}", "{error}" }
                    }
                }
            }
            div {
                class: "flex justify-end gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: submitting,
                    onclick: handle_cancel,
                    "Cancel"
                }
                Button {
                    r#type: "submit",
                    loading: submitting,
                    disabled: !can_publish(&title(), &content()),
                    "Publish"
                }
            }
        }
    }
}
