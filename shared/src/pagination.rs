use crate::api::ListQuery;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page-number pagination. Pages are 1-based and an empty listing still has
/// one (empty) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Moves to `page` clamped into `[1, total_pages]`. Returns whether the
    /// page actually changed.
    pub fn go_to(&mut self, page: u32) -> bool {
        let target = page.clamp(1, self.total_pages());
        let changed = target != self.page;
        self.page = target;
        changed
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// 1-based index of the first row on the current page, for "showing x-y".
    pub fn first_row(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        u64::from(self.page - 1) * u64::from(self.page_size) + 1
    }

    pub fn last_row(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.page_size)).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(page: u32, page_size: u32, total: u64) -> Pagination {
        Pagination {
            page,
            page_size,
            total,
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(at(1, 20, 0).total_pages(), 1);
        assert_eq!(at(1, 20, 20).total_pages(), 1);
        assert_eq!(at(1, 20, 21).total_pages(), 2);
        assert_eq!(at(1, 10, 95).total_pages(), 10);
    }

    #[test]
    fn bounds_disable_navigation() {
        let first = at(1, 10, 35);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = at(4, 10, 35);
        assert!(last.has_previous());
        assert!(!last.has_next());

        let only = at(1, 10, 3);
        assert!(!only.has_previous());
        assert!(!only.has_next());
    }

    #[test]
    fn go_to_clamps() {
        let mut pagination = at(1, 10, 35);
        assert!(pagination.go_to(9));
        assert_eq!(pagination.page, 4);
        assert!(!pagination.go_to(4));
        assert!(pagination.go_to(0));
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn row_range() {
        let pagination = at(2, 10, 15);
        assert_eq!(pagination.first_row(), 11);
        assert_eq!(pagination.last_row(), 15);
        assert_eq!(at(1, 10, 0).first_row(), 0);
    }
}
