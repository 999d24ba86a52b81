use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How severe a validation failure is.
///
/// `Error` blocks the operation; `Warning` and `Info` are advisory records
/// that callers may surface without failing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ValidationSeverity {
    #[default]
    Error,
    Warning,
    Info,
}

/// A structured validation failure tied to a specific input field.
///
/// Immutable once constructed; equality and hashing are structural, so two
/// records with the same fields compare equal even after passing through
/// combinator chains or serialization.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ValidationError, ValidationSeverity};
///
/// let minimal = ValidationError::new("Name is required");
/// assert_eq!(minimal.error_message(), "Name is required");
/// assert_eq!(minimal.severity(), ValidationSeverity::Error);
///
/// let full = ValidationError::full(
///     "name",
///     "Name is required",
///     "NAME_REQUIRED",
///     ValidationSeverity::Error,
/// );
/// assert_eq!(full.identifier(), "name");
/// assert_eq!(full.error_code(), "NAME_REQUIRED");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct ValidationError {
    identifier: String,
    error_message: String,
    error_code: String,
    severity: ValidationSeverity,
}

impl ValidationError {
    /// Creates a validation error carrying only a message.
    ///
    /// Identifier and code default to empty, severity to
    /// [`ValidationSeverity::Error`].
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(error_message: S) -> Self {
        Self {
            error_message: error_message.into(),
            ..Self::default()
        }
    }

    /// Creates a fully-specified validation error.
    #[must_use]
    #[inline]
    pub fn full<I, M, C>(identifier: I, error_message: M, error_code: C, severity: ValidationSeverity) -> Self
    where
        I: Into<String>,
        M: Into<String>,
        C: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            error_message: error_message.into(),
            error_code: error_code.into(),
            severity,
        }
    }

    /// Sets the field identifier this failure is tied to.
    #[must_use]
    #[inline]
    pub fn with_identifier<S: Into<String>>(mut self, identifier: S) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Sets the machine-readable error code.
    #[must_use]
    #[inline]
    pub fn with_error_code<S: Into<String>>(mut self, error_code: S) -> Self {
        self.error_code = error_code.into();
        self
    }

    /// Sets the severity.
    #[must_use]
    #[inline]
    pub fn with_severity(mut self, severity: ValidationSeverity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    #[inline]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    #[must_use]
    #[inline]
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    #[must_use]
    #[inline]
    pub fn severity(&self) -> ValidationSeverity {
        self.severity
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.identifier.is_empty() {
            write!(f, "{}", self.error_message)
        } else {
            write!(f, "{}: {}", self.identifier, self.error_message)
        }
    }
}
