//! Tests for the derived-status rules: the Ok/Error/Invalid subset follows
//! the error collections, everything else keeps its construction status.

use outcome_rail::{Outcome, Status, ValidationError};

#[test]
fn status_follows_error_collections_through_full_cycle() {
    let mut outcome = Outcome::success(());
    assert_eq!(outcome.status(), Status::Ok);

    outcome.add_validation_error(ValidationError::new("Error 1"));
    assert_eq!(outcome.status(), Status::Invalid);

    outcome.add_error("Error 1");
    assert_eq!(outcome.status(), Status::Error);

    outcome.clear_errors();
    assert_eq!(outcome.status(), Status::Invalid);

    outcome.clear_validation_errors();
    assert_eq!(outcome.status(), Status::Ok);
}

#[test]
fn plain_errors_win_over_validation_errors() {
    let mut outcome = Outcome::success(());
    outcome.add_error("plain");
    outcome.add_validation_error(ValidationError::new("structured"));
    assert_eq!(outcome.status(), Status::Error);

    outcome.remove_error("plain");
    assert_eq!(outcome.status(), Status::Invalid);
}

#[test]
fn remove_error_drops_first_occurrence_only() {
    let mut outcome = Outcome::<()>::error_many(["dup", "dup"]);
    assert!(outcome.remove_error("dup"));
    assert_eq!(outcome.errors(), ["dup"]);
    assert_eq!(outcome.status(), Status::Error);

    assert!(outcome.remove_error("dup"));
    assert_eq!(outcome.status(), Status::Ok);
    assert!(!outcome.remove_error("dup"));
}

#[test]
fn set_errors_replaces_and_rederives() {
    let mut outcome = Outcome::success(());
    outcome.set_errors(["a", "b"]);
    assert_eq!(outcome.status(), Status::Error);
    assert_eq!(outcome.errors(), ["a", "b"]);

    outcome.set_errors(Vec::<String>::new());
    assert_eq!(outcome.status(), Status::Ok);
}

#[test]
fn extend_validation_errors_rederives_once_visible() {
    let mut outcome = Outcome::success(());
    outcome.extend_validation_errors([
        ValidationError::new("one"),
        ValidationError::new("two"),
    ]);
    assert_eq!(outcome.status(), Status::Invalid);
    assert_eq!(outcome.validation_errors().len(), 2);
}

#[test]
fn remove_validation_error_matches_structurally() {
    let target = ValidationError::new("bad field").with_identifier("name");
    let mut outcome = Outcome::<()>::invalid_many([target.clone(), ValidationError::new("other")]);

    assert!(outcome.remove_validation_error(&target));
    assert_eq!(outcome.status(), Status::Invalid);
    assert!(outcome.remove_validation_error(&ValidationError::new("other")));
    assert_eq!(outcome.status(), Status::Ok);
}

#[test]
fn sticky_statuses_survive_error_mutation() {
    let sticky = [
        Outcome::<()>::not_found(),
        Outcome::<()>::forbidden(),
        Outcome::<()>::unauthorized(),
        Outcome::<()>::conflict(),
        Outcome::<()>::unavailable(),
        Outcome::<()>::critical_error(),
    ];

    for mut outcome in sticky {
        let original = outcome.status();

        outcome.add_error("late error");
        assert_eq!(outcome.status(), original);
        assert_eq!(outcome.errors(), ["late error"]);

        outcome.add_validation_error(ValidationError::new("late validation"));
        assert_eq!(outcome.status(), original);

        outcome.clear_errors();
        outcome.clear_validation_errors();
        assert_eq!(outcome.status(), original);
    }
}

#[test]
fn created_and_no_content_survive_error_mutation() {
    let mut created = Outcome::created_at(1, "/widgets/1");
    created.add_error("late error");
    assert_eq!(created.status(), Status::Created);

    let mut no_content = Outcome::<()>::no_content();
    no_content.add_validation_error(ValidationError::new("late"));
    assert_eq!(no_content.status(), Status::NoContent);
}

#[test]
fn invalid_factory_reverts_to_ok_when_cleared() {
    let mut outcome = Outcome::<()>::invalid(ValidationError::new("bad"));
    assert_eq!(outcome.status(), Status::Invalid);

    outcome.clear_validation_errors();
    assert_eq!(outcome.status(), Status::Ok);
}
