//! # Pagination math for list views
//!
//! Pages are 1-based throughout this module.
//!
//! - [`calculate_pagination`] derives the page count from a total and a page size.
//! - [`get_pagination_indices`] gives the half-open row range `[start, end)` of a page,
//!   suitable for slicing an already loaded list.
//! - [`get_pagination_items`] lists what the pagination control shows: every page when
//!   there are at most [`MAX_VISIBLE_PAGES`], otherwise a window around the current page
//!   with the first and last page pinned and gaps shown as [`PageItem::Ellipsis`].

use std::fmt;

pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

/// One slot of the pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("..."),
        }
    }
}

pub fn calculate_pagination(
    current_page: usize,
    total_items: usize,
    items_per_page: usize,
) -> PaginationInfo {
    let total_pages = if items_per_page == 0 {
        0
    } else {
        total_items.div_ceil(items_per_page)
    };
    PaginationInfo {
        current_page,
        total_pages,
        total_items,
        items_per_page,
    }
}

/// `(start, end)` row indices of `current_page`.
pub fn get_pagination_indices(current_page: usize, items_per_page: usize) -> (usize, usize) {
    let start = current_page.saturating_sub(1) * items_per_page;
    (start, start + items_per_page)
}

pub fn get_pagination_items(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        // 1 2 3 4 … last
        let mut items: Vec<_> = (1..=4).map(Page).collect();
        items.extend([Ellipsis, Page(total_pages)]);
        items
    } else if current_page >= total_pages - 2 {
        // 1 … last-3 last-2 last-1 last
        let mut items = vec![Page(1), Ellipsis];
        items.extend((total_pages - 3..=total_pages).map(Page));
        items
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    }
}

/// Slice `items` to the rows of `current_page`, clamped to what is there.
pub fn page_slice<T>(items: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    let (start, end) = get_pagination_indices(current_page, items_per_page);
    let end = end.min(items.len());
    let start = start.min(end);
    &items[start..end]
}
