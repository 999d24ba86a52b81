//! Future wrapper applying a synchronous transformation to an outcome.
//!
//! This module provides `TransformFuture`, which wraps a
//! `Future<Output = Outcome<T>>` and applies a transformation exactly once
//! when the inner future resolves.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::outcome::Outcome;

pin_project! {
    /// A future wrapper that transforms the resolved [`Outcome`].
    ///
    /// The transformation runs exactly once, at resolution; until then the
    /// wrapper is a transparent poll of the inner future.
    ///
    /// # Cancel Safety
    ///
    /// `TransformFuture` is cancel-safe if the inner future is cancel-safe.
    /// The transformation is only called when `poll` returns `Poll::Ready`.
    #[must_use = "futures do nothing unless polled"]
    pub struct TransformFuture<Fut, F> {
        #[pin]
        future: Fut,
        transform: Option<F>,
    }
}

impl<Fut, F> TransformFuture<Fut, F> {
    /// Creates a new `TransformFuture` from the inner future and the
    /// transformation to apply at resolution.
    #[inline]
    pub fn new(future: Fut, transform: F) -> Self {
        Self {
            future,
            transform: Some(transform),
        }
    }
}

impl<Fut, F, T, U> Future for TransformFuture<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(Outcome<T>) -> Outcome<U>,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            let transform = this
                .transform
                .take()
                .expect("TransformFuture polled after completion; this is a bug");
            transform(outcome)
        })
    }
}

impl<Fut, F, T, U> FusedFuture for TransformFuture<Fut, F>
where
    Fut: FusedFuture<Output = Outcome<T>>,
    F: FnOnce(Outcome<T>) -> Outcome<U>,
{
    fn is_terminated(&self) -> bool {
        // Also check transform since it's taken at completion
        self.transform.is_none() || self.future.is_terminated()
    }
}
