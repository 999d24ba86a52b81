//! Tests for the FutureOutcomeExt trait.

use std::sync::atomic::{AtomicU32, Ordering};

use outcome_rail::prelude_async::*;

#[test]
fn transform_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<
        TransformFuture<std::future::Ready<Outcome<i32>>, fn(Outcome<i32>) -> Outcome<String>>,
    >();
    assert_sync::<
        TransformFuture<std::future::Ready<Outcome<i32>>, fn(Outcome<i32>) -> Outcome<String>>,
    >();
}

#[tokio::test]
async fn transform_runs_exactly_once_across_multiple_polls() {
    let calls = AtomicU32::new(0);

    // Yield before resolving so the wrapper is polled more than once.
    let inner = async {
        tokio::task::yield_now().await;
        Outcome::success(21)
    };
    let outcome = TransformFuture::new(inner, |outcome: Outcome<i32>| {
        calls.fetch_add(1, Ordering::SeqCst);
        outcome.map(|n| n * 2)
    })
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.value(), Some(&42));
}

#[tokio::test]
async fn map_outcome_transforms_resolved_success() {
    let outcome = async { Outcome::success("hello".to_string()) }
        .map_outcome(|s| s.len())
        .await;
    assert_eq!(outcome.value(), Some(&5));
}

#[tokio::test]
async fn map_outcome_skips_function_on_failure() {
    let calls = AtomicU32::new(0);

    let outcome = async { Outcome::<i32>::not_found() }
        .map_outcome(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            n.to_string()
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.status(), Status::NotFound);
}

#[tokio::test]
async fn bind_outcome_chains_onto_resolved_outcome() {
    let outcome = async { Outcome::success(123) }
        .bind_outcome(|n| Outcome::success(n.to_string()))
        .await;
    assert_eq!(outcome.value().map(String::as_str), Some("123"));
}

#[tokio::test]
async fn bind_outcome_carries_failure_across_types() {
    let outcome: Outcome<String> = async { Outcome::<i32>::forbidden_with(["denied"]) }
        .bind_outcome(|n| Outcome::success(n.to_string()))
        .await;
    assert_eq!(outcome.status(), Status::Forbidden);
    assert_eq!(outcome.errors(), ["denied"]);
}

#[tokio::test]
async fn map_outcome_async_awaits_the_transformation() {
    let outcome = async { Outcome::success(21) }
        .map_outcome_async(|n| async move {
            tokio::task::yield_now().await;
            n * 2
        })
        .await;
    assert_eq!(outcome.value(), Some(&42));
}

#[tokio::test]
async fn bind_outcome_async_skips_function_on_failure() {
    let calls = AtomicU32::new(0);

    let outcome = async { Outcome::<i32>::error("boom") }
        .bind_outcome_async(|n| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Outcome::success(n + 1) }
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.status(), Status::Error);
    assert_eq!(outcome.errors(), ["boom"]);
}

#[tokio::test]
async fn chained_stages_preserve_invalid_payload() {
    let ve = ValidationError::new("bad").with_identifier("field");
    let source = Outcome::<i32>::invalid(ve.clone());

    let outcome: Outcome<usize> = async move { source }
        .map_outcome(|n: i32| n.to_string())
        .map_outcome(|s| s.len())
        .await;

    assert_eq!(outcome.status(), Status::Invalid);
    assert_eq!(outcome.validation_errors(), [ve]);
}
