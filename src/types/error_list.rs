use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ErrorVec;

/// Plain failure messages plus an optional correlation id.
///
/// A carrier, not a container: it is built to be handed to
/// [`Outcome::error_list`](crate::Outcome::error_list) or extracted from a
/// failed outcome by [`outcome_to_result`](crate::convert::outcome_to_result).
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorList, Outcome};
///
/// let list = ErrorList::new(["db timeout"]).with_correlation_id("req-17");
/// let outcome = Outcome::<i32>::error_list(list);
/// assert_eq!(outcome.correlation_id(), "req-17");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ErrorList {
    error_messages: ErrorVec<String>,
    correlation_id: Option<String>,
}

impl ErrorList {
    /// Creates a list from failure messages, with no correlation id.
    #[must_use]
    #[inline]
    pub fn new<I, S>(error_messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            error_messages: error_messages.into_iter().map(Into::into).collect(),
            correlation_id: None,
        }
    }

    /// Attaches a correlation id for tracing the failure across services.
    #[must_use]
    #[inline]
    pub fn with_correlation_id<S: Into<String>>(mut self, correlation_id: S) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    #[must_use]
    #[inline]
    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    #[must_use]
    #[inline]
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.error_messages.is_empty()
    }

    pub(crate) fn into_parts(self) -> (ErrorVec<String>, Option<String>) {
        (self.error_messages, self.correlation_id)
    }
}

impl Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for message in &self.error_messages {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        if let Some(id) = &self.correlation_id {
            write!(f, " (correlation id: {})", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}
