use requirements_rail::{
    check_if, check_if_option, named, require_that, require_that_option, ErrorKind,
};

mod collection;

#[test]
fn failed_chain_never_reports_success_again() {
    let validator = check_if(-1, "count")
        .unwrap()
        .is_positive()
        .unwrap()
        .is_negative()
        .unwrap()
        .is_zero()
        .unwrap();

    assert_eq!(
        validator.else_get_messages(),
        vec![
            "\"count\" must be positive.\ncount: -1".to_string(),
            "\"count\" must be negative".to_string(),
            "\"count\" must be zero".to_string(),
        ]
    );
}

#[test]
fn passing_checks_are_idempotent() {
    let validator = check_if(5, "count").unwrap().is_positive().unwrap();
    let validator = validator.is_positive().unwrap().is_positive().unwrap();

    assert!(!validator.validation_failed());
    assert_eq!(validator.get_value(), Ok(&5));
}

#[test]
fn and_appends_failures_in_order() {
    let first = check_if(1, "first").unwrap();
    let second = check_if(-1, "second").unwrap().is_positive().unwrap().is_zero().unwrap();
    let expected = second.else_get_messages();

    let combined = first.and(&[&second]);
    assert_eq!(combined.else_get_messages(), expected);
    assert_eq!(second.else_get_messages().len(), 2);
}

#[test]
fn and_accepts_validators_of_different_types() {
    let name = check_if(String::new(), "name").unwrap().is_not_empty().unwrap();
    let tags = check_if(vec!["a", "a"], "tags").unwrap().does_not_contain_duplicates().unwrap();

    let combined = check_if((), "form").unwrap().and(&[&name, &tags]);
    assert_eq!(
        combined.else_get_messages(),
        vec![
            "\"name\" may not be empty.\nname: \"\"".to_string(),
            "\"tags\" may not contain any duplicate elements.\n\
             tags      : [\"a\", \"a\"]\n\
             duplicates: [\"a\"]"
                .to_string(),
        ]
    );
}

#[test]
fn or_clears_failures_when_any_side_passes() {
    let failing = check_if(5, "value").unwrap().is_negative().unwrap();
    let passing = check_if(5, "value").unwrap().is_positive().unwrap();
    assert!(!failing.or(&[&passing]).validation_failed());

    let failing = check_if(5, "value").unwrap().is_negative().unwrap();
    let passing = check_if(5, "value").unwrap().is_positive().unwrap();
    assert!(!passing.or(&[&failing]).validation_failed());
}

#[test]
fn or_concatenates_failures_when_every_side_fails() {
    let negative = check_if(5, "value").unwrap().is_negative().unwrap();
    let zero = check_if(5, "value").unwrap().is_zero().unwrap();

    let either = negative.or(&[&zero]);
    assert_eq!(
        either.else_get_messages(),
        ["\"value\" must be negative.\nvalue: 5", "\"value\" must be zero.\nvalue: 5"]
    );
}

#[test]
fn operand_named_like_value_is_rejected_eagerly() {
    let error = check_if(5, "x").unwrap().is_less_than(named(10, "x")).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::NameConflict);
    assert_eq!(
        error.message(),
        "The name \"x\" is already in use by the value being validated. Choose a different name."
    );
}

#[test]
fn operand_named_like_context_entry_is_rejected_eagerly() {
    let validator = check_if(5, "x").unwrap().with_context(10, "limit").unwrap();
    let error = validator.is_less_than(named(10, "limit")).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::NameConflict);
    assert_eq!(
        error.message(),
        "The name \"limit\" is already in use by the validator context. Choose a different name."
    );
}

#[test]
fn invalid_names_are_rejected() {
    let error = check_if(1, "").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.message(), "name may not be empty.");

    let error = check_if(1, "a b").unwrap_err();
    assert_eq!(error.message(), "name may not contain whitespace.\nactual: \"a b\"");

    let error = check_if(1, "a").unwrap().is_less_than(named(2, "")).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn null_failure_takes_precedence_over_predicate() {
    let validator = check_if_option(None::<i32>, "timeout").unwrap().is_positive().unwrap();
    let failures = validator.else_get_failures();

    assert_eq!(failures.len(), 1);
    assert_eq!(failures.iter().next().unwrap().kind(), ErrorKind::Null);
    assert_eq!(failures.messages(), vec!["\"timeout\" may not be null".to_string()]);
}

#[test]
fn fail_fast_returns_null_error() {
    let error = require_that_option(None::<u32>, "limit").unwrap().is_not_null().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Null);
    assert_eq!(error.message(), "\"limit\" may not be null");

    let error = require_that_option(None::<u32>, "limit").unwrap().is_positive().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Null);

    assert!(require_that_option(None::<u32>, "limit").unwrap().is_null().is_ok());
    assert!(require_that(7, "limit").unwrap().is_null().is_err());
}

#[test]
fn validator_context_follows_failure_context() {
    let validator = check_if(3, "count")
        .unwrap()
        .with_context("db", "source")
        .unwrap()
        .is_greater_than(5)
        .unwrap();

    assert_eq!(
        validator.else_get_messages(),
        ["\"count\" must be greater than 5.\ncount : 3\nsource: \"db\""]
    );
    assert_eq!(validator.get_context_as_string(), "source: \"db\"");
}

#[test]
fn with_context_replaces_existing_entry() {
    let validator = check_if(3, "count")
        .unwrap()
        .with_context(1, "attempt")
        .unwrap()
        .with_context(2, "attempt")
        .unwrap();

    assert_eq!(validator.get_context().len(), 1);
    assert_eq!(
        validator.get_context().get("attempt").map(ToString::to_string),
        Some("2".to_string())
    );

    let error = check_if(3, "count").unwrap().with_context(1, "count").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NameConflict);
}

#[test]
fn projection_lists_parent_value_in_context() {
    let validator = check_if("abc".to_string(), "code").unwrap().length().unwrap();

    assert_eq!(validator.get_name(), "code.length()");
    assert_eq!(
        validator.get_context().get("code").map(ToString::to_string),
        Some("\"abc\"".to_string())
    );
    assert_eq!(validator.get_value(), Ok(&3));
}

#[test]
fn value_accessors_report_state() {
    let validator = check_if(-1, "count").unwrap().is_positive().unwrap();
    let error = validator.get_value().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UndefinedValue);
    assert_eq!(
        error.message(),
        "The value of \"count\" is undefined because an earlier check failed."
    );
    assert_eq!(*validator.get_value_or(&0), 0);

    let validator = check_if_option(None::<i32>, "count").unwrap();
    assert_eq!(validator.get_value().unwrap_err().kind(), ErrorKind::Null);

    assert_eq!(check_if(4, "count").unwrap().into_value(), Ok(4));
}
