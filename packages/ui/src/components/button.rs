use dioxus::prelude::*;

use super::Loader;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-neutral-900 text-white hover:bg-neutral-700",
            ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-500",
            ButtonVariant::Outline => {
                "border border-neutral-300 bg-white text-neutral-800 hover:bg-neutral-100"
            }
            ButtonVariant::Secondary => "bg-neutral-100 text-neutral-800 hover:bg-neutral-200",
            ButtonVariant::Ghost => "text-neutral-700 hover:bg-neutral-100",
            ButtonVariant::Link => "text-primary-600 underline-offset-4 hover:underline",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2 text-sm",
            ButtonSize::Sm => "h-8 px-3 text-xs",
            ButtonSize::Lg => "h-11 px-8 text-base",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

const BASE_CLASS: &str = "inline-flex items-center justify-center gap-2 rounded-md font-medium \
     transition-colors disabled:pointer-events-none disabled:opacity-50";

/// Full class list of a button; `extra` is appended as is.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("{BASE_CLASS} {} {}", variant.class(), size.class());
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// A button that shows a spinner and ignores clicks while `loading`.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] loading: bool,
    #[props(default)] disabled: bool,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = button_class(variant, size, &class);

    rsx! {
        button {
            r#type: "{r#type}",
            class: "{class}",
            title: "{title}",
            disabled: disabled || loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                Loader { size: 16, label: "" }
            }
            {children}
        }
    }
}
