//! Pagination

use crate::shared::errors::DomainError;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// A validated page request (1-based page number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    num: i64,
    size: i64,
}

impl Page {
    /// Build a page request
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` when the number is below 1, the
    /// size is outside `1..=MAX_PAGE_SIZE` or the row offset does not fit an `i64`.
    pub fn new(num: i64, size: i64) -> Result<Self, DomainError> {
        if num < 1 {
            return Err(DomainError::InvalidValue {
                field: "page_num",
                reason: format!("must be at least 1, got {num}"),
            });
        }
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(DomainError::InvalidValue {
                field: "page_size",
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}, got {size}"),
            });
        }
        if (num - 1).checked_mul(size).is_none() {
            return Err(DomainError::InvalidValue {
                field: "page_num",
                reason: format!("page {num} is out of range"),
            });
        }
        Ok(Self { num, size })
    }

    #[must_use]
    pub fn num(&self) -> i64 {
        self.num
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        self.size
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.num - 1) * self.size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            num: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results together with the total row count
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> Paged<T> {
    /// Map every item, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_for_first_page() {
        let page = Page::new(1, 20).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_offset_skips_previous_pages() {
        let page = Page::new(3, 15).unwrap();
        assert_eq!(page.offset(), 30);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(Page::new(0, 10).is_err());
        assert!(Page::new(1, 0).is_err());
        assert!(Page::new(1, MAX_PAGE_SIZE + 1).is_err());
    }

    #[test]
    fn test_rejects_page_whose_offset_overflows() {
        assert!(Page::new(i64::MAX, MAX_PAGE_SIZE).is_err());
        assert!(Page::new(i64::MAX, 1).is_ok());
        assert_eq!(Page::new(i64::MAX, 1).unwrap().offset(), i64::MAX - 1);
    }

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.num(), 1);
        assert_eq!(page.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_paged_map_keeps_total() {
        let paged = Paged { total: 9, items: vec![1, 2] }.map(|n| n * 10);
        assert_eq!(paged.total, 9);
        assert_eq!(paged.items, vec![10, 20]);
    }
}
