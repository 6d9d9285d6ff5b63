use serde::{Deserialize, Serialize};

/// Page sizes offered by the list screens
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Maximum number of page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// Current page (1-based) and page size of a list.
///
/// The page is never allowed to point past the last page of the collection it slices:
/// every operation that can change the total takes it as a parameter, and [`clamp`](Self::clamp)
/// pulls the page back after the collection shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.items_per_page).max(1)
    }

    /// Moves to `page` when it lies in `[1, total_pages]`; otherwise nothing changes.
    /// Returns whether the page changed.
    pub fn go_to(&mut self, page: usize, total_items: usize) -> bool {
        if page < 1 || page > self.total_pages(total_items) || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self, total_items: usize) -> bool {
        self.go_to(self.current_page + 1, total_items)
    }

    pub fn prev(&mut self, total_items: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page, total_items),
            None => false,
        }
    }

    /// Changes the page size and goes back to page 1. Zero is ignored.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page == 0 {
            return;
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pulls the current page back inside `[1, total_pages]`
    pub fn clamp(&mut self, total_items: usize) {
        let last = self.total_pages(total_items);
        self.current_page = self.current_page.clamp(1, last);
    }

    /// Records of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(self.items_per_page);
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(items.len());
        &items[start..end]
    }

    /// Sliding window of at most [`PAGE_WINDOW`] page numbers around the current page
    pub fn page_numbers(&self, total_items: usize) -> Vec<usize> {
        let total = self.total_pages(total_items);
        let shown = PAGE_WINDOW.min(total);
        let half = PAGE_WINDOW / 2;
        let mut start = self.current_page.saturating_sub(half).max(1);
        if start + shown - 1 > total {
            start = total + 1 - shown;
        }
        (start..start + shown).collect()
    }

    /// "start-end de total" for the pagination footer
    pub fn range_label(&self, total_items: usize) -> String {
        if total_items == 0 {
            return "0 de 0".to_string();
        }
        let start = (self.current_page - 1) * self.items_per_page + 1;
        let end = (self.current_page * self.items_per_page).min(total_items);
        format!("{}-{} de {}", start, end, total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(10);
        assert_eq!(p.total_pages(0), 1);
        assert_eq!(p.total_pages(10), 1);
        assert_eq!(p.total_pages(11), 2);
        assert_eq!(p.total_pages(23), 3);
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut p = Pagination::new(10);
        assert!(!p.go_to(4, 23));
        assert!(!p.go_to(0, 23));
        assert_eq!(p.current_page, 1);

        assert!(p.go_to(3, 23));
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(p.slice(&items), &[20, 21, 22]);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut p = Pagination::new(10);
        p.go_to(3, 23);
        p.set_items_per_page(20);
        assert_eq!(p.current_page, 1);
        assert_eq!(p.total_pages(23), 2);

        p.set_items_per_page(0);
        assert_eq!(p.items_per_page, 20);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut p = Pagination::new(10);
        p.go_to(3, 23);
        p.clamp(12);
        assert_eq!(p.current_page, 2);
        p.clamp(0);
        assert_eq!(p.current_page, 1);
    }

    #[test]
    fn test_page_window_shifts_at_edges() {
        let mut p = Pagination::new(10);
        assert_eq!(p.page_numbers(100), vec![1, 2, 3, 4, 5]);

        p.go_to(6, 100);
        assert_eq!(p.page_numbers(100), vec![4, 5, 6, 7, 8]);

        p.go_to(10, 100);
        assert_eq!(p.page_numbers(100), vec![6, 7, 8, 9, 10]);

        p.go_to(2, 100);
        assert_eq!(p.page_numbers(100), vec![1, 2, 3, 4, 5]);

        assert_eq!(Pagination::new(10).page_numbers(23), vec![1, 2, 3]);
    }

    #[test]
    fn test_range_label() {
        let mut p = Pagination::new(10);
        assert_eq!(p.range_label(0), "0 de 0");
        p.go_to(3, 23);
        assert_eq!(p.range_label(23), "21-23 de 23");
    }
}
