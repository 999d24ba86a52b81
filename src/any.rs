//! Generic-erased inspection of outcomes.
//!
//! A caller holding heterogeneous outcomes (an HTTP adapter switching on
//! status, a logging sink) cannot name every `T`. [`AnyOutcome`] is the
//! object-safe view they hold instead of relying on runtime reflection: the
//! full failure payload plus an opaque handle to the value.

use core::any::{Any, TypeId};

use crate::outcome::Outcome;
use crate::paged::PagedOutcome;
use crate::status::Status;
use crate::types::ValidationError;

/// Object-safe, type-erased view of an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{AnyOutcome, Outcome, Status};
///
/// let outcomes: Vec<Box<dyn AnyOutcome>> = vec![
///     Box::new(Outcome::success(42)),
///     Box::new(Outcome::<String>::not_found()),
/// ];
///
/// assert_eq!(outcomes[0].status(), Status::Ok);
/// let value = outcomes[0].value_as_any().unwrap();
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert!(outcomes[1].value_as_any().is_none());
/// ```
pub trait AnyOutcome {
    /// The outcome's status.
    fn status(&self) -> Status;

    /// Whether the status is in the success family.
    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// The plain failure messages.
    fn errors(&self) -> &[String];

    /// The validation failure records.
    fn validation_errors(&self) -> &[ValidationError];

    /// The success message.
    fn success_message(&self) -> &str;

    /// The correlation id.
    fn correlation_id(&self) -> &str;

    /// The `Created` location.
    fn location(&self) -> &str;

    /// The success value as an opaque handle, if present.
    fn value_as_any(&self) -> Option<&dyn Any>;

    /// The runtime type of the success value, if present.
    fn value_type_id(&self) -> Option<TypeId> {
        self.value_as_any().map(Any::type_id)
    }
}

impl<T: Any> AnyOutcome for Outcome<T> {
    fn status(&self) -> Status {
        Outcome::status(self)
    }

    fn errors(&self) -> &[String] {
        Outcome::errors(self)
    }

    fn validation_errors(&self) -> &[ValidationError] {
        Outcome::validation_errors(self)
    }

    fn success_message(&self) -> &str {
        Outcome::success_message(self)
    }

    fn correlation_id(&self) -> &str {
        Outcome::correlation_id(self)
    }

    fn location(&self) -> &str {
        Outcome::location(self)
    }

    fn value_as_any(&self) -> Option<&dyn Any> {
        self.value().map(|value| value as &dyn Any)
    }
}

impl<T: Any> AnyOutcome for PagedOutcome<T> {
    fn status(&self) -> Status {
        self.as_outcome().status()
    }

    fn errors(&self) -> &[String] {
        self.as_outcome().errors()
    }

    fn validation_errors(&self) -> &[ValidationError] {
        self.as_outcome().validation_errors()
    }

    fn success_message(&self) -> &str {
        self.as_outcome().success_message()
    }

    fn correlation_id(&self) -> &str {
        self.as_outcome().correlation_id()
    }

    fn location(&self) -> &str {
        self.as_outcome().location()
    }

    fn value_as_any(&self) -> Option<&dyn Any> {
        self.as_outcome().value().map(|value| value as &dyn Any)
    }
}
