use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Shown in place of content that failed to load.
#[component]
pub fn ErrorState(
    #[props(default = "Something went wrong".to_string())] title: String,
    message: String,
    back_href: Option<String>,
    #[props(default = "Go back".to_string())] back_label: String,
    on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-3 py-16 text-center",
            h2 { class: "m-0 text-lg font-semibold text-red-600", "{title}" }
            p { class: "m-0 text-sm text-neutral-600", "{message}" }
            div {
                class: "flex gap-2",
                if let Some(href) = back_href {
                    Link { class: "text-sm text-neutral-700 underline", to: href, "{back_label}" }
                }
                if let Some(retry) = on_retry {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| retry.call(()),
                        "Try again"
                    }
                }
            }
        }
    }
}

#[component]
pub fn EmptyState(title: String, #[props(default)] message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center gap-2 py-16 text-center",
            h2 { class: "m-0 text-lg font-semibold text-neutral-800", "{title}" }
            if !message.is_empty() {
                p { class: "m-0 text-sm text-neutral-500", "{message}" }
            }
            {children}
        }
    }
}
