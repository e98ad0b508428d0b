//! Page slicing for the vault list.
//!
//! Pages are 1-based because that's what the page picker shows. Asking
//! for page 0, or past the end, gets an empty page rather than a panic.

/// Items on `page` (1-based) with `page_size` items per page.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total_items`. Zero page size means zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}
