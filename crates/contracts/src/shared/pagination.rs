//! Page arithmetic for 1-indexed list views.

/// Number of pages needed to show `count` items, `page_size` per page.
///
/// Zero items give zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Window `[(page-1)*page_size, page*page_size)` of `items`.
///
/// Pages past the end (or page 0) yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
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

/// Navigation state of a paginator.
///
/// `current_page` is kept in `1..=max(1, total_pages)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub total_pages: usize,
}

impl Pager {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
        }
    }

    /// Controls are hidden for a single page of results.
    pub fn shows_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page reached by "Previous".
    pub fn previous(&self) -> usize {
        self.current_page.saturating_sub(1).max(1)
    }

    /// Page reached by "Next".
    pub fn next(&self) -> usize {
        clamp_page(self.current_page + 1, self.total_pages)
    }

    /// Every selectable page number.
    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// Clamp `page` into `1..=max(1, total_pages)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 4), 0);
        assert_eq!(total_pages(1, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(6, 4), 2);
        assert_eq!(total_pages(9, 4), 3);
        assert_eq!(total_pages(3, 0), 0);
    }

    #[test]
    fn test_page_slice() {
        let items = [1, 2, 3, 4, 5, 6];
        assert_eq!(page_slice(&items, 1, 4), &[1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 2, 4), &[5, 6]);
        assert!(page_slice(&items, 3, 4).is_empty());
        assert!(page_slice(&items, 0, 4).is_empty());
        assert!(page_slice::<i32>(&[], 1, 4).is_empty());
    }

    #[test]
    fn test_pager_navigation() {
        let pager = Pager::new(1, 2);
        assert!(pager.shows_controls());
        assert!(!pager.has_previous());
        assert!(pager.has_next());
        assert_eq!(pager.previous(), 1);
        assert_eq!(pager.next(), 2);

        let last = Pager::new(2, 2);
        assert!(!last.has_next());
        assert_eq!(last.next(), 2);
        assert_eq!(last.previous(), 1);
        assert_eq!(last.pages().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_pager_without_results() {
        let pager = Pager::new(5, 0);
        assert_eq!(pager.current_page, 1);
        assert!(!pager.shows_controls());
        assert_eq!(pager.next(), 1);
        assert_eq!(pager.pages().count(), 0);
    }
}
