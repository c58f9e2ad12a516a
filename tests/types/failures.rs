use requirements_rail::{check_if, require_that, ErrorKind, Validators};

#[test]
fn single_failure_yields_its_own_error() {
    let validator = check_if(-2, "delta").unwrap().is_positive().unwrap();
    let error = validator.else_get_exception().unwrap();

    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.message(), "\"delta\" must be positive.\ndelta: -2");
    assert!(error.location().is_some());
}

#[test]
fn several_failures_yield_aggregate() {
    let validator = check_if(-2, "delta").unwrap().is_positive().unwrap().is_zero().unwrap();
    let error = validator.else_throw().unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Aggregate);
    assert_eq!(
        error.message(),
        "InvalidArgumentError: \"delta\" must be positive.\ndelta: -2\n\n\
         InvalidArgumentError: \"delta\" must be zero"
    );
    assert_eq!(error.failures().len(), 2);
}

#[test]
fn no_failures_yield_nothing() {
    let validator = check_if(2, "delta").unwrap().is_positive().unwrap();

    assert!(validator.else_get_failures().is_empty());
    assert!(validator.else_get_exception().is_none());
    assert!(validator.else_throw().is_ok());
}

#[test]
fn snapshot_is_not_affected_by_later_failures() {
    let validator = check_if(-2, "delta").unwrap().is_positive().unwrap();
    let snapshot = validator.else_get_failures();
    let validator = validator.is_zero().unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(validator.else_get_failures().len(), 2);
}

#[test]
fn lazy_exception_is_memoized() {
    let validators = Validators::checking().update_configuration(|c| c.record_stacktrace(false));
    let validator = validators.that(-2, "delta").unwrap().is_positive().unwrap();
    let failures = validator.else_get_failures();
    let failure = failures.iter().next().unwrap();

    assert!(!failure.is_materialized());
    let first: *const _ = failure.exception();
    let second: *const _ = failure.exception();
    assert!(std::ptr::eq(first, second));
    assert!(failure.is_materialized());
}

#[test]
fn eager_exception_is_built_when_recorded() {
    let validator = check_if(-2, "delta").unwrap().is_positive().unwrap();
    let failures = validator.else_get_failures();
    let failure = failures.iter().next().unwrap();

    assert!(failure.is_materialized());
    assert_eq!(failure.message(), "\"delta\" must be positive.\ndelta: -2");
    assert!(failure.cause().is_none());
    assert!(failure.checked_kinds().is_empty());
}

#[test]
fn fail_fast_error_matches_recorded_failure() {
    let error = require_that(-2, "delta").unwrap().is_positive().unwrap_err();
    let recorded = check_if(-2, "delta")
        .unwrap()
        .is_positive()
        .unwrap()
        .else_get_exception()
        .unwrap();
    assert_eq!(error, recorded);
}

#[test]
fn projection_records_into_parent_failures() {
    let validator = check_if("ab".to_string(), "code").unwrap().is_empty().unwrap();
    let length = validator.length().unwrap().is_greater_than(5).unwrap();
    let failures = length.else_get_failures();

    assert_eq!(failures.len(), 2);
    assert_eq!(failures.messages()[1], "code.length() must be greater than 5");
}
