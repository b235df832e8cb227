use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        main {
            class: "page flex flex-col items-center gap-6 text-center",
            h1 { class: "m-0 mt-16 text-4xl font-bold tracking-tight", "Users & Posts" }
            p {
                class: "m-0 max-w-md text-neutral-600",
                "Browse the users, open anyone's posts, write new ones and clean up old ones."
            }
            Link {
                class: "rounded-md bg-neutral-900 px-5 py-2.5 text-sm font-medium text-white hover:bg-neutral-700",
                to: Route::Users {},
                "View users"
            }
        }
    }
}
