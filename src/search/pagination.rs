use crate::model::Page;

/// Slices `items` into the requested 1-based page, clamping out-of-range requests.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let current = page.clamp(1, total_pages);
    let start = (current - 1) * page_size;
    let end = (start + page_size).min(items.len());

    Page {
        items: items[start.min(end)..end].to_vec(),
        current,
        total_pages,
    }
}
