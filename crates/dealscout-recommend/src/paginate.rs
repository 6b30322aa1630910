//! Pure page-window selection.
//!
//! Pagination runs BEFORE fit scoring: the expensive per-product LLM calls
//! are only made for the page actually requested.

/// Returns the window `[(page-1)*page_size, (page-1)*page_size + page_size)`
/// of `items`. Out-of-range pages yield an empty slice rather than failing.
///
/// `page` is 1-based; a `page_size` of zero always yields an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() || page_size == 0 {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` items: `ceil(total / page_size)`.
#[must_use]
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
