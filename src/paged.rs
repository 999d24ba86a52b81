//! Pagination decorator over [`Outcome`].

use core::ops::{Deref, DerefMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;
use crate::types::PagedInfo;

/// An [`Outcome<T>`] carrying pagination metadata.
///
/// All status and value semantics are inherited unchanged from the inner
/// outcome (exposed through `Deref`/`DerefMut`); `paged_info` is set at wrap
/// time and independent of the status.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, PagedInfo, Status};
///
/// let page = PagedInfo::new(2, 10, 5, 47);
/// let outcome = Outcome::success(vec![1, 2, 3]).into_paged(page);
/// assert_eq!(outcome.status(), Status::Ok);
/// assert_eq!(outcome.paged_info().page_number(), 2);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PagedOutcome<T> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    outcome: Outcome<T>,
    paged_info: PagedInfo,
}

impl<T> PagedOutcome<T> {
    /// Returns the pagination metadata.
    #[must_use]
    #[inline]
    pub fn paged_info(&self) -> &PagedInfo {
        &self.paged_info
    }

    /// Borrows the inner outcome.
    ///
    /// Usually unnecessary thanks to `Deref`, but handy where an explicit
    /// `&Outcome<T>` is required.
    #[must_use]
    #[inline]
    pub fn as_outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    /// Discards the pagination metadata, returning the inner outcome.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T> {
        self.outcome
    }

    /// Splits into the inner outcome and the pagination metadata.
    #[inline]
    pub fn into_parts(self) -> (Outcome<T>, PagedInfo) {
        (self.outcome, self.paged_info)
    }
}

impl<T> Deref for PagedOutcome<T> {
    type Target = Outcome<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.outcome
    }
}

impl<T> DerefMut for PagedOutcome<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.outcome
    }
}

impl<T> Outcome<T> {
    /// Wraps this outcome, of any status, with pagination metadata.
    ///
    /// Status and value-presence rules are untouched; the metadata simply
    /// rides along.
    #[inline]
    pub fn into_paged(self, paged_info: PagedInfo) -> PagedOutcome<T> {
        PagedOutcome {
            outcome: self,
            paged_info,
        }
    }
}
