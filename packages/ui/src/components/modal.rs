use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// A full-screen overlay that centers its children in a card.
/// Clicking outside the card triggers `on_close`. Nothing renders while closed.
#[component]
pub fn Modal(
    open: bool,
    #[props(default)] title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-lg max-w-lg w-full mx-4 p-6",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                if !title.is_empty() {
                    h2 { class: "m-0 mb-4 text-lg font-semibold text-neutral-800", "{title}" }
                }
                {children}
            }
        }
    }
}

/// Asks before running a destructive action.
#[component]
pub fn ConfirmationModal(
    open: bool,
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default)] loading: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            open,
            title,
            on_close: move |_| on_cancel.call(()),
            p { class: "m-0 mb-6 text-sm text-neutral-600", "{message}" }
            div {
                class: "flex justify-end gap-2",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: loading,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    loading,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
