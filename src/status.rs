//! The closed set of outcome kinds an [`Outcome`](crate::Outcome) can report.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Discriminates which kind of outcome an [`Outcome`](crate::Outcome) represents.
///
/// The success family is `Ok`, `Created` and `NoContent`. The `Ok`, `Error`
/// and `Invalid` subset is continuously re-derived from the outcome's error
/// collections; every other failure status is fixed at construction time and
/// survives later error mutation.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Status};
///
/// let outcome = Outcome::success(42);
/// assert_eq!(outcome.status(), Status::Ok);
/// assert!(outcome.status().is_success());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Status {
    Ok,
    Created,
    NoContent,
    Error,
    Forbidden,
    Unauthorized,
    Invalid,
    NotFound,
    Conflict,
    CriticalError,
    Unavailable,
}

impl Status {
    /// Returns `true` for the success family (`Ok`, `Created`, `NoContent`).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Status;
    ///
    /// assert!(Status::Created.is_success());
    /// assert!(!Status::NotFound.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Created | Self::NoContent)
    }

    /// Returns `true` for the subset whose value is re-derived from the
    /// outcome's error collections (`Ok`, `Error`, `Invalid`).
    ///
    /// Statuses outside this subset keep their value for the lifetime of the
    /// outcome, no matter how the error collections are mutated afterwards.
    #[must_use]
    #[inline]
    pub fn is_derived(self) -> bool {
        matches!(self, Self::Ok | Self::Error | Self::Invalid)
    }

    /// Returns the status name as a static string.
    #[must_use]
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::Created => "Created",
            Self::NoContent => "NoContent",
            Self::Error => "Error",
            Self::Forbidden => "Forbidden",
            Self::Unauthorized => "Unauthorized",
            Self::Invalid => "Invalid",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::CriticalError => "CriticalError",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
