use dioxus::prelude::*;

use super::{Button, ButtonSize, ButtonVariant};
use crate::pagination::{get_pagination_items, PageItem};

/// Keep `page` within `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

fn page_variant(page: usize, current_page: usize) -> ButtonVariant {
    if page == current_page {
        ButtonVariant::Outline
    } else {
        ButtonVariant::Ghost
    }
}

/// Previous/Next plus numbered page buttons. Renders nothing without pages.
#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
) -> Element {
    if total_pages == 0 {
        return rsx! {};
    }

    let items = get_pagination_items(current_page, total_pages);
    let previous = clamp_page(current_page.saturating_sub(1), total_pages);
    let next = clamp_page(current_page + 1, total_pages);

    rsx! {
        nav {
            class: "flex items-center justify-center gap-1 py-4",
            aria_label: "pagination",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Sm,
                disabled: current_page <= 1,
                onclick: move |_| on_page_change.call(previous),
                "Previous"
            }
            for (index, item) in items.into_iter().enumerate() {
                {match item {
                    PageItem::Page(page) => rsx! {
                        Button {
                            key: "{index}",
                            variant: page_variant(page, current_page),
                            size: ButtonSize::Sm,
                            onclick: move |_| on_page_change.call(page),
                            "{page}"
                        }
                    },
                    PageItem::Ellipsis => rsx! {
                        span { key: "{index}", class: "px-2 text-neutral-400", "..." }
                    },
                }}
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Sm,
                disabled: current_page >= total_pages,
                onclick: move |_| on_page_change.call(next),
                "Next"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(6, 5), 5);
        assert_eq!(clamp_page(2, 0), 1);
    }
}
