use api::User;
use dioxus::prelude::*;

use crate::links::{format_address, posts_href};

/// One row of the users table. The name links to the user's posts.
#[component]
pub fn UserRow(user: User) -> Element {
    let href = posts_href(&user);
    let email = user.email.to_lowercase();
    let address = format_address(user.primary_address());

    rsx! {
        tr {
            class: "border-b border-neutral-200 hover:bg-neutral-50",
            td {
                class: "px-4 py-3 text-sm font-medium",
                Link { class: "text-neutral-900 hover:underline", to: href, "{user.name}" }
            }
            td { class: "px-4 py-3 text-sm text-neutral-600", "{email}" }
            td {
                class: "px-4 py-3 text-sm text-neutral-600 max-w-xs truncate",
                title: "{address}",
                "{address}"
            }
        }
    }
}
