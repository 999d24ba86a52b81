//! The core status-carrying container.
//!
//! An [`Outcome<T>`] wraps either a success value or one of several failure
//! kinds, discriminated by [`Status`]. Producers build one through the named
//! factories (or mutate its error collections afterwards); consumers inspect
//! the status directly or pipe the outcome through the `map`/`bind`
//! combinators in [`combinators`](self).

use crate::status::Status;
use crate::types::{ErrorList, ErrorVec, ValidationError};

use smallvec::smallvec;

mod combinators;
#[cfg(feature = "serde")]
mod serde_impl;

/// A value-or-failure wrapper that propagates operation outcomes as data.
///
/// The status is not a free field: while it is in the `Ok`/`Error`/`Invalid`
/// subset, it is a pure function of the current contents of the error
/// collections (plain errors win over validation errors). Statuses outside
/// that subset are fixed at construction and survive later error mutation.
///
/// The non-generic result of the value-less operations is simply
/// `Outcome<()>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Status};
///
/// let outcome = Outcome::success(42).map(|n| n * 2);
/// assert_eq!(outcome.value(), Some(&84));
///
/// let missing = Outcome::<i32>::not_found();
/// assert_eq!(missing.status(), Status::NotFound);
/// assert_eq!(missing.value(), None);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Outcome<T> {
    pub(crate) value: Option<T>,
    pub(crate) status: Status,
    pub(crate) errors: ErrorVec<String>,
    pub(crate) validation_errors: ErrorVec<ValidationError>,
    pub(crate) success_message: String,
    pub(crate) correlation_id: String,
    pub(crate) location: String,
}

impl<T> Outcome<T> {
    fn with_status(status: Status) -> Self {
        Self {
            value: None,
            status,
            errors: ErrorVec::new(),
            validation_errors: ErrorVec::new(),
            success_message: String::new(),
            correlation_id: String::new(),
            location: String::new(),
        }
    }

    fn failure_with_messages<I, S>(status: Status, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut outcome = Self::with_status(status);
        outcome.errors = messages.into_iter().map(Into::into).collect();
        outcome
    }

    /// Creates a successful outcome carrying `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success("hello");
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.into_value(), Some("hello"));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        let mut outcome = Self::with_status(Status::Ok);
        outcome.value = Some(value);
        outcome
    }

    /// Creates a successful outcome with a human-readable message.
    #[inline]
    pub fn success_with_message<S: Into<String>>(value: T, success_message: S) -> Self {
        let mut outcome = Self::success(value);
        outcome.success_message = success_message.into();
        outcome
    }

    /// Creates a `Created` outcome carrying `value` and no location.
    #[inline]
    pub fn created(value: T) -> Self {
        let mut outcome = Self::with_status(Status::Created);
        outcome.value = Some(value);
        outcome
    }

    /// Creates a `Created` outcome with the location of the new resource.
    ///
    /// The location is stored verbatim and preserved by `map`/`map_async`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let outcome = Outcome::created_at(7, "/widgets/7");
    /// assert_eq!(outcome.status(), Status::Created);
    /// assert_eq!(outcome.location(), "/widgets/7");
    /// ```
    #[inline]
    pub fn created_at<S: Into<String>>(value: T, location: S) -> Self {
        let mut outcome = Self::created(value);
        outcome.location = location.into();
        outcome
    }

    /// Creates a `NoContent` outcome: success-family, but carrying no value.
    #[inline]
    pub fn no_content() -> Self {
        Self::with_status(Status::NoContent)
    }

    /// Creates an `Error` outcome with a single failure message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let outcome = Outcome::<i32>::error("db timeout");
    /// assert_eq!(outcome.status(), Status::Error);
    /// assert_eq!(outcome.errors(), ["db timeout"]);
    /// ```
    #[inline]
    pub fn error<S: Into<String>>(message: S) -> Self {
        let mut outcome = Self::with_status(Status::Error);
        outcome.errors = smallvec![message.into()];
        outcome
    }

    /// Creates an `Error` outcome from several failure messages.
    #[inline]
    pub fn error_many<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failure_with_messages(Status::Error, messages)
    }

    /// Creates an `Error` outcome from an [`ErrorList`], copying the list's
    /// correlation id onto the outcome.
    #[inline]
    pub fn error_list(list: ErrorList) -> Self {
        let (messages, correlation_id) = list.into_parts();
        let mut outcome = Self::with_status(Status::Error);
        outcome.errors = messages;
        outcome.correlation_id = correlation_id.unwrap_or_default();
        outcome
    }

    /// Creates an `Error` outcome with a correlation id set directly.
    #[inline]
    pub fn error_with_correlation_id<C, I, S>(correlation_id: C, messages: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut outcome = Self::failure_with_messages(Status::Error, messages);
        outcome.correlation_id = correlation_id.into();
        outcome
    }

    /// Creates an `Invalid` outcome from a single validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status, ValidationError};
    ///
    /// let outcome = Outcome::<i32>::invalid(ValidationError::new("Name is required"));
    /// assert_eq!(outcome.status(), Status::Invalid);
    /// assert_eq!(outcome.validation_errors().len(), 1);
    /// ```
    #[inline]
    pub fn invalid(validation_error: ValidationError) -> Self {
        let mut outcome = Self::with_status(Status::Invalid);
        outcome.validation_errors = smallvec![validation_error];
        outcome
    }

    /// Creates an `Invalid` outcome from several validation errors.
    #[inline]
    pub fn invalid_many<I>(validation_errors: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        let mut outcome = Self::with_status(Status::Invalid);
        outcome.validation_errors = validation_errors.into_iter().collect();
        outcome
    }

    /// Creates a `NotFound` outcome.
    #[inline]
    pub fn not_found() -> Self {
        Self::with_status(Status::NotFound)
    }

    /// Creates a `NotFound` outcome carrying failure messages.
    ///
    /// The messages are available for inspection but do not feed status
    /// derivation: the status stays `NotFound` even if they are cleared.
    #[inline]
    pub fn not_found_with<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failure_with_messages(Status::NotFound, messages)
    }

    /// Creates a `Forbidden` outcome.
    #[inline]
    pub fn forbidden() -> Self {
        Self::with_status(Status::Forbidden)
    }

    /// Creates a `Forbidden` outcome carrying failure messages.
    #[inline]
    pub fn forbidden_with<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failure_with_messages(Status::Forbidden, messages)
    }

    /// Creates an `Unauthorized` outcome.
    #[inline]
    pub fn unauthorized() -> Self {
        Self::with_status(Status::Unauthorized)
    }

    /// Creates an `Unauthorized` outcome carrying failure messages.
    #[inline]
    pub fn unauthorized_with<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failure_with_messages(Status::Unauthorized, messages)
    }

    /// Creates a `Conflict` outcome.
    #[inline]
    pub fn conflict() -> Self {
        Self::with_status(Status::Conflict)
    }

    /// Creates a `Conflict` outcome carrying failure messages.
    #[inline]
    pub fn conflict_with<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failure_with_messages(Status::Conflict, messages)
    }

    /// Creates an `Unavailable` outcome.
    #[inline]
    pub fn unavailable() -> Self {
        Self::with_status(Status::Unavailable)
    }

    /// Creates an `Unavailable` outcome carrying failure messages.
    #[inline]
    pub fn unavailable_with<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failure_with_messages(Status::Unavailable, messages)
    }

    /// Creates a `CriticalError` outcome.
    #[inline]
    pub fn critical_error() -> Self {
        Self::with_status(Status::CriticalError)
    }

    /// Creates a `CriticalError` outcome carrying failure messages.
    #[inline]
    pub fn critical_error_with<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::failure_with_messages(Status::CriticalError, messages)
    }

    /// Returns the current status.
    #[must_use]
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` for the success family (`Ok`, `Created`, `NoContent`).
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns `true` if the status is `Ok`.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Returns `true` if the status is `Created`.
    #[must_use]
    #[inline]
    pub fn is_created(&self) -> bool {
        self.status == Status::Created
    }

    /// Returns `true` if the status is `NoContent`.
    #[must_use]
    #[inline]
    pub fn is_no_content(&self) -> bool {
        self.status == Status::NoContent
    }

    /// Returns `true` if the status is `Error`.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// Returns `true` if the status is `Invalid`.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.status == Status::Invalid
    }

    /// Returns `true` if the status is `NotFound`.
    #[must_use]
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.status == Status::NotFound
    }

    /// Returns `true` if the status is `Forbidden`.
    #[must_use]
    #[inline]
    pub fn is_forbidden(&self) -> bool {
        self.status == Status::Forbidden
    }

    /// Returns `true` if the status is `Unauthorized`.
    #[must_use]
    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        self.status == Status::Unauthorized
    }

    /// Returns `true` if the status is `Conflict`.
    #[must_use]
    #[inline]
    pub fn is_conflict(&self) -> bool {
        self.status == Status::Conflict
    }

    /// Returns `true` if the status is `Unavailable`.
    #[must_use]
    #[inline]
    pub fn is_unavailable(&self) -> bool {
        self.status == Status::Unavailable
    }

    /// Returns `true` if the status is `CriticalError`.
    #[must_use]
    #[inline]
    pub fn is_critical_error(&self) -> bool {
        self.status == Status::CriticalError
    }

    /// Returns the success value, if any.
    ///
    /// Present only for `Ok` and `Created` outcomes built through a value
    /// factory; `NoContent` and every failure status carry no value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Returns a mutable reference to the success value, if any.
    #[must_use]
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Consumes the outcome and returns the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns the plain failure messages.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the validation failure records.
    #[must_use]
    #[inline]
    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }

    /// Returns the success message (empty unless set at construction).
    #[must_use]
    #[inline]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Returns the correlation id (empty unless set at construction).
    #[must_use]
    #[inline]
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Returns the `Created` location (empty for every other status).
    #[must_use]
    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the success value, panicking on a failure outcome.
    ///
    /// This is the unchecked `Outcome<T> -> T` conversion; callers that have
    /// not already checked the status should use [`into_value`](Self::into_value).
    ///
    /// # Panics
    ///
    /// Panics if the outcome carries no value, with the status and failure
    /// messages in the panic message.
    #[must_use]
    #[inline]
    pub fn unwrap(self) -> T {
        match self.value {
            Some(value) => value,
            None => panic!(
                "called `Outcome::unwrap` on a {} outcome with no value (errors: {:?})",
                self.status, self.errors
            ),
        }
    }

    /// Returns the success value or the provided default.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the success value or computes one from the outcome's status.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Status) -> T,
    {
        let status = self.status;
        self.value.unwrap_or_else(|| f(status))
    }

    /// Appends a plain failure message and re-derives the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let mut outcome = Outcome::success(());
    /// outcome.add_error("late failure");
    /// assert_eq!(outcome.status(), Status::Error);
    /// ```
    pub fn add_error<S: Into<String>>(&mut self, message: S) {
        self.errors.push(message.into());
        self.recompute_status();
    }

    /// Appends several failure messages and re-derives the status.
    pub fn extend_errors<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors.extend(messages.into_iter().map(Into::into));
        self.recompute_status();
    }

    /// Removes the first failure message equal to `message`.
    ///
    /// Returns whether a message was removed; the status is re-derived
    /// either way.
    pub fn remove_error(&mut self, message: &str) -> bool {
        let removed = match self.errors.iter().position(|m| m == message) {
            Some(index) => {
                self.errors.remove(index);
                true
            }
            None => false,
        };
        self.recompute_status();
        removed
    }

    /// Removes all failure messages and re-derives the status.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.recompute_status();
    }

    /// Replaces the failure messages wholesale and re-derives the status.
    pub fn set_errors<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = messages.into_iter().map(Into::into).collect();
        self.recompute_status();
    }

    /// Appends a validation error and re-derives the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status, ValidationError};
    ///
    /// let mut outcome = Outcome::success(());
    /// outcome.add_validation_error(ValidationError::new("bad input"));
    /// assert_eq!(outcome.status(), Status::Invalid);
    /// ```
    pub fn add_validation_error(&mut self, validation_error: ValidationError) {
        self.validation_errors.push(validation_error);
        self.recompute_status();
    }

    /// Appends several validation errors and re-derives the status.
    pub fn extend_validation_errors<I>(&mut self, validation_errors: I)
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.validation_errors.extend(validation_errors);
        self.recompute_status();
    }

    /// Removes the first validation error equal to `validation_error`.
    ///
    /// Returns whether a record was removed; the status is re-derived
    /// either way.
    pub fn remove_validation_error(&mut self, validation_error: &ValidationError) -> bool {
        let removed = match self.validation_errors.iter().position(|v| v == validation_error) {
            Some(index) => {
                self.validation_errors.remove(index);
                true
            }
            None => false,
        };
        self.recompute_status();
        removed
    }

    /// Removes all validation errors and re-derives the status.
    pub fn clear_validation_errors(&mut self) {
        self.validation_errors.clear();
        self.recompute_status();
    }

    /// Replaces the validation errors wholesale and re-derives the status.
    pub fn set_validation_errors<I>(&mut self, validation_errors: I)
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.validation_errors = validation_errors.into_iter().collect();
        self.recompute_status();
    }

    // Statuses outside the Ok/Error/Invalid subset are fixed at construction
    // and must not be perturbed by error mutation. Within the subset, plain
    // errors win over validation errors.
    fn recompute_status(&mut self) {
        if !self.status.is_derived() {
            return;
        }
        self.status = if !self.errors.is_empty() {
            Status::Error
        } else if !self.validation_errors.is_empty() {
            Status::Invalid
        } else {
            Status::Ok
        };
    }
}

impl<T> From<T> for Outcome<T> {
    /// Wraps a bare value as a successful outcome.
    #[inline]
    fn from(value: T) -> Self {
        Self::success(value)
    }
}
