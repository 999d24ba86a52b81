//! Conversion helpers between `core::result::Result` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally: wrap legacy results at the boundary, or flatten an
//! outcome back into a plain result when calling into external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let result: Result<i32, &str> = Err("db timeout");
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_error());
//! ```

use core::fmt::Display;

use crate::outcome::Outcome;
use crate::types::ErrorList;

/// Converts a plain `Result` into an [`Outcome`].
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::success(value)` if the result is `Ok`
/// * an `Error` outcome carrying the error's display string otherwise
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let ok: Result<i32, &str> = Ok(42);
/// assert_eq!(result_to_outcome(ok).into_value(), Some(42));
///
/// let err: Result<i32, &str> = Err("failed");
/// assert_eq!(result_to_outcome(err).errors(), ["failed"]);
/// ```
#[inline]
pub fn result_to_outcome<T, E: Display>(result: Result<T, E>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::success(value),
        Err(error) => Outcome::error(error.to_string()),
    }
}

/// Converts an [`Outcome`] into a plain `Result`.
///
/// The success side is `Option<T>` because `NoContent` succeeds without a
/// value. The failure side is an [`ErrorList`] rebuilt from the outcome's
/// plain messages (or, for `Invalid`, its validation messages) plus the
/// correlation id.
///
/// # Arguments
///
/// * `outcome` - The outcome to flatten
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::success(42)), Ok(Some(42)));
///
/// let err = outcome_to_result(Outcome::<i32>::error("failed")).unwrap_err();
/// assert_eq!(err.error_messages(), ["failed"]);
/// ```
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<Option<T>, ErrorList> {
    if outcome.is_success() {
        return Ok(outcome.into_value());
    }
    let messages: Vec<String> = if outcome.is_invalid() {
        outcome
            .validation_errors()
            .iter()
            .map(|v| v.to_string())
            .collect()
    } else {
        outcome.errors().to_vec()
    };
    let mut list = ErrorList::new(messages);
    if !outcome.correlation_id().is_empty() {
        list = list.with_correlation_id(outcome.correlation_id());
    }
    Err(list)
}

/// Folds a sequence of outcomes into one outcome of all success values.
///
/// Classic railway fold: values are collected in order until the first
/// failure, which is carried across by
/// [`Outcome::propagate`](crate::Outcome::propagate); outcomes after it are
/// not inspected.
///
/// # Arguments
///
/// * `outcomes` - An iterator of outcomes to fold
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_outcome;
/// use outcome_rail::{Outcome, Status};
///
/// let all_ok = collect_outcome([Outcome::success(1), Outcome::success(2)]);
/// assert_eq!(all_ok.into_value(), Some(vec![1, 2]));
///
/// let short_circuit = collect_outcome([Outcome::success(1), Outcome::not_found()]);
/// assert_eq!(short_circuit.status(), Status::NotFound);
/// ```
pub fn collect_outcome<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let iter = outcomes.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for outcome in iter {
        if !outcome.is_success() {
            return outcome.propagate();
        }
        if let Some(value) = outcome.into_value() {
            values.push(value);
        }
    }
    Outcome::success(values)
}
