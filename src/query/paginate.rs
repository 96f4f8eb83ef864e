/// Listings shown per page
pub const PAGE_SIZE: usize = 8;

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// The items of a 1-based page. Pages past the end come back empty;
/// keeping `page` within `1..=total_pages` is up to the caller.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = page.saturating_mul(PAGE_SIZE).min(items.len());
    &items[start..end.max(start)]
}
