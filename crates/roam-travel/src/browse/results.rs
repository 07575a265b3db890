//! Pagination over an ordered package list.

use serde::{Deserialize, Serialize};

/// Catalog page size.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed, clamped into range).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages; 0 for an empty list.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info, clamping `page` into `[1, total_pages]`
    /// (or to 1 when the list is empty). Never fails.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total = total.max(0);
        let total_pages = (total + per_page - 1) / per_page;
        let page = page.clamp(1, total_pages.max(1));

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Offset of the first item of the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<i64> {
        if self.total_pages as usize <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page - half as i64).max(1);
        let end = (start + max_visible as i64 - 1).min(self.total_pages);
        let start = (end - max_visible as i64 + 1).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// First item number on this page (1-indexed), 0 when empty.
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// Last item number on this page.
    pub fn end_item(&self) -> i64 {
        (self.page * self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0)
    }
}

/// One page of an ordered list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowsePage<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
}

/// Slice an ordered list into the requested page.
///
/// Out-of-range page numbers clamp to the nearest bound, so
/// `paginate(list, 999, n)` returns the last page.
pub fn paginate<T: Clone>(items: &[T], page: i64, per_page: i64) -> BrowsePage<T> {
    let pagination = Pagination::new(page, per_page, items.len() as i64);
    let start = pagination.offset() as usize;
    let end = (start + pagination.per_page as usize).min(items.len());
    let items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };
    BrowsePage { items, pagination }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 12, 25);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 12);
    }

    #[test]
    fn test_empty_list_has_zero_pages() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
    }

    #[test]
    fn test_page_clamps_to_bounds() {
        let high = Pagination::new(99, 12, 25);
        assert_eq!(high.page, 3);
        let low = Pagination::new(-4, 12, 25);
        assert_eq!(low.page, 1);
    }

    #[test]
    fn test_25_items_page_size_12() {
        let items: Vec<i64> = (0..25).collect();
        let first = paginate(&items, 1, 12);
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.pagination.total_pages, 3);

        let last = paginate(&items, 3, 12);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.items[0], 24);
    }

    #[test]
    fn test_out_of_range_equals_last_page() {
        let items: Vec<i64> = (0..25).collect();
        let clamped = paginate(&items, 99, 12);
        let last = paginate(&items, 3, 12);
        assert_eq!(clamped, last);
    }

    #[test]
    fn test_page_numbers_window() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);
        let p = Pagination::new(1, 10, 30);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_item_range() {
        let p = Pagination::new(2, 12, 25);
        assert_eq!(p.start_item(), 13);
        assert_eq!(p.end_item(), 24);
    }
}
