//! In-memory paging of list views.

use serde::Serialize;

/// Where the current page sits in the full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Parse a `?page=` value leniently: anything unusable means page 1.
pub fn page_number(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

/// Cut `items` down to one page. Pages past the end clamp to the last page.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> (Vec<T>, Pager) {
    let total_items = items.len();
    let per_page = per_page.max(1);
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let slice: Vec<T> = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    let pager = Pager {
        page,
        total_pages,
        total_items,
        prev: (page > 1).then(|| page - 1),
        next: (page < total_pages).then(|| page + 1),
    };
    (slice, pager)
}
