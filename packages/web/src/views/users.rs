use dioxus::prelude::*;

use ui::components::{ErrorState, Loader, Pagination, UserRow};
use ui::pagination::{calculate_pagination, page_slice};
use ui::{use_users, use_users_count};

use crate::Route;

const USERS_PER_PAGE: usize = 4;

#[component]
pub fn Users() -> Element {
    let mut users = use_users();
    let mut count = use_users_count();
    let mut current_page = use_signal(|| 1usize);
    let home_href = Route::Home {}.to_string();

    let content = match (&*users.read(), &*count.read()) {
        (Some(Err(e)), _) | (_, Some(Err(e))) => rsx! {
            ErrorState {
                title: "Could not load users",
                message: "{e}",
                back_href: home_href,
                back_label: "Back home",
                on_retry: move |_| {
                    users.restart();
                    count.restart();
                },
            }
        },
        (Some(Ok(all)), Some(Ok(total))) => {
            let total_items = usize::try_from(total.count).unwrap_or_default();
            let info = calculate_pagination(current_page(), total_items, USERS_PER_PAGE);
            let rows = page_slice(all, info.current_page, USERS_PER_PAGE).to_vec();

            rsx! {
                div {
                    class: "overflow-hidden rounded-lg border border-neutral-200 bg-white",
                    table {
                        class: "w-full border-collapse text-left",
                        thead {
                            tr {
                                class: "border-b border-neutral-200 bg-neutral-50",
                                th { class: "px-4 py-3 text-xs font-semibold uppercase text-neutral-500", "Full name" }
                                th { class: "px-4 py-3 text-xs font-semibold uppercase text-neutral-500", "Email address" }
                                th { class: "px-4 py-3 text-xs font-semibold uppercase text-neutral-500", "Address" }
                            }
                        }
                        tbody {
                            for user in rows {
                                UserRow { key: "{user.id}", user }
                            }
                        }
                    }
                }
                Pagination {
                    current_page: info.current_page,
                    total_pages: info.total_pages,
                    on_page_change: move |page| current_page.set(page),
                }
            }
        }
        _ => rsx! {
            div { class: "flex justify-center py-16", Loader {} }
        },
    };

    rsx! {
        main {
            class: "page",
            h1 { class: "m-0 mb-6 text-3xl font-semibold", "Users" }
            {content}
        }
    }
}
