//! Page arithmetic and the visible page window.

use serde::Serialize;

/// Pages shown on each side of the current page.
pub const WINDOW_RADIUS: usize = 2;

/// Pagination info for one page of a list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `per_page` of zero is treated as one.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.per_page
    }

    /// Whether `page` is a valid target.
    pub fn contains(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// Get start item number (1-indexed), 0 for an empty list.
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }

    /// The page buttons to show: first and last always, up to
    /// [`WINDOW_RADIUS`] pages around the current one, and an ellipsis
    /// wherever the window does not reach a boundary.
    ///
    /// Empty when there is only one page.
    pub fn page_window(&self) -> Vec<PageItem> {
        let last = self.total_pages;
        if last <= 1 {
            return Vec::new();
        }

        let current = self.page.clamp(1, last);
        let mut items = vec![PageItem::Page(1)];

        let start = current.saturating_sub(WINDOW_RADIUS).max(2);
        let end = (current + WINDOW_RADIUS).min(last - 1);

        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < last - 1 {
            items.push(PageItem::Ellipsis);
        }

        items.push(PageItem::Page(last));
        items
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 6, 0)
    }
}

/// One entry of the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 6, 14);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 6);
        assert_eq!(p.start_item(), 7);
        assert_eq!(p.end_item(), 12);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let p = Pagination::new(1, 6, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_contains() {
        let p = Pagination::new(1, 6, 7);
        assert!(p.contains(1));
        assert!(p.contains(2));
        assert!(!p.contains(0));
        assert!(!p.contains(3));
    }

    #[test]
    fn test_window_single_page_is_empty() {
        assert!(Pagination::new(1, 6, 5).page_window().is_empty());
    }

    #[test]
    fn test_window_small_total_has_no_ellipsis() {
        let p = Pagination::new(1, 1, 4);
        assert_eq!(p.page_window(), vec![Page(1), Page(2), Page(3), Page(4)]);
    }

    #[test]
    fn test_window_in_the_middle() {
        let p = Pagination::new(6, 1, 12);
        assert_eq!(
            p.page_window(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Page(7), Page(8), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn test_window_near_edges() {
        let first = Pagination::new(1, 1, 10);
        assert_eq!(first.page_window(), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);

        let last = Pagination::new(10, 1, 10);
        assert_eq!(last.page_window(), vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]);

        // Window touches page 2, so no leading ellipsis.
        let near = Pagination::new(4, 1, 10);
        assert_eq!(
            near.page_window(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }
}
