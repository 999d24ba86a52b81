//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Brings the `map`/`bind` combinators to async producers, so a call site
//! can chain transformations onto an outcome-returning future without
//! awaiting it first.

use core::future::Future;

use crate::outcome::Outcome;

use super::transform_future::TransformFuture;

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Together with the inherent [`Outcome::map_async`] and
/// [`Outcome::bind_async`] this covers every mix of sync/async producer and
/// sync/async transformation. Failure semantics are identical to the sync
/// combinators: the transformation never runs on a failure, which
/// short-circuits the rest of the chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude_async::*;
///
/// async fn load_len() -> Outcome<usize> {
///     async { Outcome::success("hello".to_string()) }
///         .map_outcome(|s| s.len())
///         .await
/// }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Transforms the resolved success value with a synchronous function.
    ///
    /// Equivalent to awaiting and calling [`Outcome::map`], but usable
    /// mid-chain without an intermediate `await`.
    #[inline]
    fn map_outcome<U, F>(self, f: F) -> TransformFuture<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        TransformFuture::new(self, move |outcome: Outcome<T>| outcome.map(f))
    }

    /// Chains a synchronous fallible operation onto the resolved outcome.
    ///
    /// Equivalent to awaiting and calling [`Outcome::bind`].
    #[inline]
    fn bind_outcome<U, F>(self, f: F) -> TransformFuture<Self, impl FnOnce(Outcome<T>) -> Outcome<U>>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        TransformFuture::new(self, move |outcome: Outcome<T>| outcome.bind(f))
    }

    /// Transforms the resolved success value with an async function.
    ///
    /// The function is invoked only after this future resolves with a
    /// success-family outcome; failures skip it entirely.
    #[inline]
    fn map_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(f).await }
    }

    /// Chains an async fallible operation onto the resolved outcome.
    ///
    /// The function is invoked only after this future resolves with a
    /// success-family outcome; failures skip it entirely.
    #[inline]
    fn bind_outcome_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move { self.await.bind_async(f).await }
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
