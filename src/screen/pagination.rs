pub const PAGE_SIZE: usize = 10;

/// 1-based page position over a filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_pages: 0,
        }
    }

    /// Recompute page count for `len` rows and go back to page 1.
    pub fn reset(&mut self, len: usize) {
        self.current_page = 1;
        self.total_pages = len.div_ceil(self.page_size);
    }

    /// Move to `page` if it exists. Returns whether it moved.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    /// Row range for the current page, clamped to `len`.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let mut p = Pagination::default();
        p.reset(0);
        assert_eq!(p.total_pages, 0);
        p.reset(10);
        assert_eq!(p.total_pages, 1);
        p.reset(11);
        assert_eq!(p.total_pages, 2);
    }

    #[test]
    fn empty_set_has_empty_first_page() {
        let mut p = Pagination::default();
        p.reset(0);
        assert_eq!(p.current_page, 1);
        assert!(p.range(0).is_empty());
        assert!(!p.go_to(1));
    }

    #[test]
    fn last_page_is_partial() {
        let mut p = Pagination::default();
        p.reset(23);
        assert!(p.go_to(3));
        assert_eq!(p.range(23), 20..23);
        assert!(!p.go_to(4));
        assert_eq!(p.current_page, 3);
    }
}
