//! Transformations over the success channel.
//!
//! `map` and `bind` (plus their async variants behind the `async` feature)
//! run the caller's function only when the outcome settled in the success
//! family; every failure short-circuits the function entirely and crosses
//! the type boundary through [`Outcome::propagate`]. Railway-oriented,
//! left to right, each stage invoked at most once.

#[cfg(feature = "async")]
use core::future::Future;

use crate::status::Status;
use crate::types::ErrorVec;

use super::Outcome;

impl<T> Outcome<T> {
    /// Transforms the success value, passing failures through untouched.
    ///
    /// `Ok` and `Created` outcomes apply `f` to the value and keep their
    /// status, success message, correlation id and location. For any other
    /// status `f` is never invoked and the failure payload is carried across
    /// the type boundary by [`propagate`](Self::propagate).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let doubled = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(doubled.value(), Some(&42));
    ///
    /// let missing = Outcome::<i32>::not_found().map(|n| n.to_string());
    /// assert_eq!(missing.status(), Status::NotFound);
    /// assert_eq!(missing.value(), None);
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.status {
            Status::Ok | Status::Created => {
                let Outcome {
                    value,
                    status,
                    success_message,
                    correlation_id,
                    location,
                    ..
                } = self;
                Outcome {
                    value: value.map(f),
                    status,
                    errors: ErrorVec::new(),
                    validation_errors: ErrorVec::new(),
                    success_message,
                    correlation_id,
                    location,
                }
            }
            _ => self.propagate(),
        }
    }

    /// Chains an operation that can itself fail.
    ///
    /// `Ok` and `Created` outcomes hand their value to `f` and return its
    /// outcome verbatim; failures cross the type boundary through
    /// [`propagate`](Self::propagate) without invoking `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success(123)
    ///     .bind(|n| Outcome::success(n.to_string()))
    ///     .bind(|s| Outcome::success(s.len()));
    /// assert_eq!(outcome.value(), Some(&3));
    /// ```
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.status {
            Status::Ok | Status::Created => match self.value {
                Some(value) => f(value),
                // A derived Ok can be value-less after error mutation
                // reverted a failure; there is nothing to hand to `f`.
                None => Outcome {
                    value: None,
                    status: self.status,
                    errors: ErrorVec::new(),
                    validation_errors: ErrorVec::new(),
                    success_message: self.success_message,
                    correlation_id: self.correlation_id,
                    location: self.location,
                },
            },
            _ => self.propagate(),
        }
    }

    /// Collapses a valued outcome into `Outcome<()>`.
    ///
    /// Used when a caller only cares whether the operation succeeded. `Ok`
    /// and `Created` keep their message, correlation id and location;
    /// failures are carried across by [`propagate`](Self::propagate).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let done = Outcome::success(42).to_unit();
    /// assert_eq!(done.status(), Status::Ok);
    ///
    /// let failed = Outcome::<i32>::error("boom").to_unit();
    /// assert_eq!(failed.errors(), ["boom"]);
    /// ```
    pub fn to_unit(self) -> Outcome<()> {
        match self.status {
            Status::Ok | Status::Created => Outcome {
                value: Some(()),
                status: self.status,
                errors: ErrorVec::new(),
                validation_errors: ErrorVec::new(),
                success_message: self.success_message,
                correlation_id: self.correlation_id,
                location: self.location,
            },
            _ => self.propagate(),
        }
    }

    /// Carries a failure across a value-type boundary.
    ///
    /// `Outcome<T>` and `Outcome<U>` are distinct instantiations, so the
    /// failure payload must be copied rather than referenced. Each status
    /// has a fixed preservation rule:
    ///
    /// - `NotFound`, `Unauthorized`, `Forbidden`, `Conflict`,
    ///   `CriticalError`, `Unavailable`: failure messages are kept.
    /// - `Invalid`: the validation error list is kept verbatim.
    /// - `Error`: failure messages and the correlation id are kept.
    /// - `NoContent`: status only, no payload.
    ///
    /// Also usable directly as the early-return idiom when a helper's
    /// failure should become the caller's failure of a different value type.
    ///
    /// # Panics
    ///
    /// Panics when called on an `Ok` or `Created` outcome: a success value
    /// cannot cross a type boundary without a transformation, so reaching
    /// this with a success status is a programming defect.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let failed: Outcome<String> = Outcome::<i32>::conflict_with(["already exists"]).propagate();
    /// assert_eq!(failed.status(), Status::Conflict);
    /// assert_eq!(failed.errors(), ["already exists"]);
    /// ```
    pub fn propagate<U>(self) -> Outcome<U> {
        let status = self.status;
        match status {
            Status::Ok | Status::Created => panic!(
                "cannot propagate success status {} across value types; use `map` or `bind`",
                status
            ),
            Status::NoContent => Outcome::no_content(),
            Status::Invalid => Outcome::invalid_many(self.validation_errors),
            Status::Error => {
                let mut outcome = Outcome::with_status(Status::Error);
                outcome.errors = self.errors;
                outcome.correlation_id = self.correlation_id;
                outcome
            }
            Status::NotFound
            | Status::Unauthorized
            | Status::Forbidden
            | Status::Conflict
            | Status::CriticalError
            | Status::Unavailable => {
                let mut outcome = Outcome::with_status(status);
                outcome.errors = self.errors;
                outcome
            }
        }
    }

    /// Transforms the success value with an async function.
    ///
    /// Same semantics as [`map`](Self::map); the function is never invoked
    /// (and so none of its side effects run) when the outcome is already a
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let outcome = Outcome::success(21).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(outcome.value(), Some(&42));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.status {
            Status::Ok | Status::Created => {
                let Outcome {
                    value,
                    status,
                    success_message,
                    correlation_id,
                    location,
                    ..
                } = self;
                let value = match value {
                    Some(value) => Some(f(value).await),
                    None => None,
                };
                Outcome {
                    value,
                    status,
                    errors: ErrorVec::new(),
                    validation_errors: ErrorVec::new(),
                    success_message,
                    correlation_id,
                    location,
                }
            }
            _ => self.propagate(),
        }
    }

    /// Chains an async operation that can itself fail.
    ///
    /// Same semantics as [`bind`](Self::bind); the function is never invoked
    /// when the outcome is already a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let outcome = Outcome::success(123)
    ///     .bind_async(|n| async move { Outcome::success(n.to_string()) })
    ///     .await;
    /// assert_eq!(outcome.value().map(String::as_str), Some("123"));
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.status {
            Status::Ok | Status::Created => match self.value {
                Some(value) => f(value).await,
                None => Outcome {
                    value: None,
                    status: self.status,
                    errors: ErrorVec::new(),
                    validation_errors: ErrorVec::new(),
                    success_message: self.success_message,
                    correlation_id: self.correlation_id,
                    location: self.location,
                },
            },
            _ => self.propagate(),
        }
    }
}
