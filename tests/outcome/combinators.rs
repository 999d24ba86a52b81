use std::cell::Cell;

use outcome_rail::{Outcome, Status, ValidationError};

#[test]
fn map_transforms_success_value() {
    let outcome = Outcome::success(21).map(|n| n * 2);
    assert_eq!(outcome.status(), Status::Ok);
    assert_eq!(outcome.value(), Some(&42));
}

#[test]
fn map_preserves_success_message() {
    let outcome = Outcome::success_with_message(21, "found it").map(|n| n * 2);
    assert_eq!(outcome.success_message(), "found it");
}

#[test]
fn map_never_invokes_function_on_failure() {
    let calls = Cell::new(0);
    let outcome = Outcome::<i32>::not_found().map(|n| {
        calls.set(calls.get() + 1);
        n.to_string()
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.status(), Status::NotFound);
    assert_eq!(outcome.value(), None);
}

#[test]
fn map_on_created_preserves_location() {
    let outcome = Outcome::created_at(7, "/foo/1").map(|n| n + 1);
    assert_eq!(outcome.status(), Status::Created);
    assert_eq!(outcome.location(), "/foo/1");
    assert_eq!(outcome.value(), Some(&8));
}

#[test]
fn map_on_invalid_preserves_validation_errors_verbatim() {
    let ve1 = ValidationError::new("first").with_identifier("a");
    let ve2 = ValidationError::new("second").with_identifier("b");
    let outcome = Outcome::<i32>::invalid_many([ve1.clone(), ve2.clone()]).map(|n| n.to_string());

    assert_eq!(outcome.status(), Status::Invalid);
    assert_eq!(outcome.validation_errors(), [ve1, ve2]);
}

#[test]
fn map_on_error_preserves_messages_and_correlation_id() {
    let outcome =
        Outcome::<i32>::error_with_correlation_id("req-3", ["boom"]).map(|n| n.to_string());
    assert_eq!(outcome.status(), Status::Error);
    assert_eq!(outcome.errors(), ["boom"]);
    assert_eq!(outcome.correlation_id(), "req-3");
}

#[test]
fn bind_chains_fallible_operations() {
    let outcome = Outcome::success(123)
        .bind(|n| Outcome::success(n.to_string()))
        .bind(|s| Outcome::success(s.len()));
    assert_eq!(outcome.status(), Status::Ok);
    assert_eq!(outcome.value(), Some(&3));
}

#[test]
fn bind_short_circuits_on_mid_chain_failure() {
    let calls = Cell::new(0);
    let outcome = Outcome::success(123)
        .bind(|_| Outcome::<String>::conflict_with(["taken"]))
        .bind(|s| {
            calls.set(calls.get() + 1);
            Outcome::success(s.len())
        });
    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.status(), Status::Conflict);
    assert_eq!(outcome.errors(), ["taken"]);
}

#[test]
fn bind_never_invokes_function_on_failure() {
    let calls = Cell::new(0);
    let outcome = Outcome::<i32>::error("boom").bind(|n| {
        calls.set(calls.get() + 1);
        Outcome::success(n + 1)
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.status(), Status::Error);
}

#[test]
fn to_unit_keeps_success_metadata() {
    let outcome = Outcome::success_with_message(42, "done").to_unit();
    assert_eq!(outcome.status(), Status::Ok);
    assert_eq!(outcome.success_message(), "done");
    assert_eq!(outcome.value(), Some(&()));
}

#[test]
fn to_unit_carries_failures_across() {
    let outcome = Outcome::<i32>::invalid(ValidationError::new("bad")).to_unit();
    assert_eq!(outcome.status(), Status::Invalid);
    assert_eq!(outcome.validation_errors().len(), 1);
}

#[test]
fn propagate_keeps_sticky_messages() {
    let outcome: Outcome<String> = Outcome::<i32>::unavailable_with(["maintenance"]).propagate();
    assert_eq!(outcome.status(), Status::Unavailable);
    assert_eq!(outcome.errors(), ["maintenance"]);
}

#[test]
fn propagate_no_content_is_status_only() {
    let source = Outcome::<i32>::no_content();
    let outcome: Outcome<String> = source.propagate();
    assert_eq!(outcome.status(), Status::NoContent);
    assert!(outcome.errors().is_empty());
    assert_eq!(outcome.value(), None);
}

#[test]
fn propagate_error_rebuilds_correlation_id() {
    let source = Outcome::<i32>::error_with_correlation_id("req-11", ["a", "b"]);
    let outcome: Outcome<String> = source.propagate();
    assert_eq!(outcome.status(), Status::Error);
    assert_eq!(outcome.errors(), ["a", "b"]);
    assert_eq!(outcome.correlation_id(), "req-11");
}

#[test]
#[should_panic(expected = "cannot propagate success status")]
fn propagate_on_success_is_a_defect() {
    let _: Outcome<String> = Outcome::success(1).propagate();
}
