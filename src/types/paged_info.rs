#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pagination metadata attached to a [`PagedOutcome`](crate::PagedOutcome).
///
/// A plain record with fluent setters; it is independent of the outcome's
/// status and value.
///
/// # Examples
///
/// ```
/// use outcome_rail::PagedInfo;
///
/// let info = PagedInfo::new(1, 10, 0, 0)
///     .with_total_pages(12)
///     .with_total_records(117);
/// assert_eq!(info.total_records(), 117);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PagedInfo {
    page_number: u64,
    page_size: u64,
    total_pages: u64,
    total_records: u64,
}

impl PagedInfo {
    #[must_use]
    #[inline]
    pub fn new(page_number: u64, page_size: u64, total_pages: u64, total_records: u64) -> Self {
        Self {
            page_number,
            page_size,
            total_pages,
            total_records,
        }
    }

    #[must_use]
    #[inline]
    pub fn with_page_number(mut self, page_number: u64) -> Self {
        self.page_number = page_number;
        self
    }

    #[must_use]
    #[inline]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    #[inline]
    pub fn with_total_pages(mut self, total_pages: u64) -> Self {
        self.total_pages = total_pages;
        self
    }

    #[must_use]
    #[inline]
    pub fn with_total_records(mut self, total_records: u64) -> Self {
        self.total_records = total_records;
        self
    }

    #[must_use]
    #[inline]
    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    #[must_use]
    #[inline]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    #[must_use]
    #[inline]
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    #[must_use]
    #[inline]
    pub fn total_records(&self) -> u64 {
        self.total_records
    }
}
