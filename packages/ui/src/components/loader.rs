use dioxus::prelude::*;

/// Spinning indicator with an optional label next to it.
#[component]
pub fn Loader(
    #[props(default = 24)] size: u32,
    #[props(default = "Loading...".to_string())] label: String,
) -> Element {
    rsx! {
        div {
            class: "inline-flex items-center gap-2 text-neutral-500",
            role: "status",
            span {
                class: "inline-block animate-spin rounded-full border-2 border-neutral-300 border-t-neutral-800",
                style: "width: {size}px; height: {size}px",
            }
            if !label.is_empty() {
                span { class: "text-sm", "{label}" }
            }
        }
    }
}
