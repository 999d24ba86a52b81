use std::any::TypeId;

use outcome_rail::{AnyOutcome, Outcome, PagedInfo, Status, ValidationError};

#[test]
fn erased_view_exposes_status_and_value_handle() {
    let outcomes: Vec<Box<dyn AnyOutcome>> = vec![
        Box::new(Outcome::success(42)),
        Box::new(Outcome::<String>::invalid(ValidationError::new("bad"))),
        Box::new(Outcome::success("text").into_paged(PagedInfo::default())),
    ];

    assert_eq!(outcomes[0].status(), Status::Ok);
    assert!(outcomes[0].is_success());
    let value = outcomes[0].value_as_any().unwrap();
    assert_eq!(value.downcast_ref::<i32>(), Some(&42));
    assert_eq!(outcomes[0].value_type_id(), Some(TypeId::of::<i32>()));

    assert_eq!(outcomes[1].status(), Status::Invalid);
    assert!(outcomes[1].value_as_any().is_none());
    assert_eq!(outcomes[1].value_type_id(), None);
    assert_eq!(outcomes[1].validation_errors().len(), 1);

    assert_eq!(outcomes[2].value_type_id(), Some(TypeId::of::<&str>()));
}

#[test]
fn erased_view_exposes_failure_payload() {
    let outcome = Outcome::<i32>::error_with_correlation_id("req-5", ["boom"]);
    let erased: &dyn AnyOutcome = &outcome;

    assert_eq!(erased.errors(), ["boom"]);
    assert_eq!(erased.correlation_id(), "req-5");
    assert_eq!(erased.location(), "");
    assert!(!erased.is_success());
}

#[test]
fn erased_view_exposes_created_location() {
    let outcome = Outcome::created_at(7u8, "/widgets/7");
    let erased: &dyn AnyOutcome = &outcome;
    assert_eq!(erased.location(), "/widgets/7");
    assert_eq!(erased.status(), Status::Created);
}
