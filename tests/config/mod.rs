use requirements_rail::config::{Configuration, EqualityMethod};
use requirements_rail::{check_if, named, require_that, ErrorKind, ValidationError, Validators};

fn bad_request(error: &ValidationError) -> Option<ValidationError> {
    let kind = ErrorKind::Custom { name: "BadRequest", checked: false };
    Some(ValidationError::new(kind, error.message()))
}

#[test]
fn presets_differ_only_in_failure_mode() {
    assert!(Validators::requiring().configuration().throw_on_failure());
    assert!(Validators::assuming().configuration().throw_on_failure());
    assert!(!Validators::checking().configuration().throw_on_failure());
}

#[test]
fn update_configuration_returns_modified_copy() {
    let original = Validators::checking();
    let updated = original.update_configuration(|c| {
        c.allow_diff(false).equality_method(EqualityMethod::ByComparison)
    });

    assert!(original.configuration().allow_diff());
    assert!(!updated.configuration().allow_diff());
    assert_eq!(updated.configuration().equality_method(), EqualityMethod::ByComparison);
    assert!(!updated.configuration().throw_on_failure());
}

#[test]
fn factory_methods_override_failure_mode() {
    let validators = Validators::checking();
    assert!(validators.require_that(-1, "delta").unwrap().is_positive().is_err());

    let validators = Validators::requiring();
    let validator = validators.check_if(-1, "delta").unwrap().is_positive().unwrap();
    assert!(validator.validation_failed());
}

#[test]
fn that_uses_configured_failure_mode() {
    let validator = Validators::checking().that(-1, "delta").unwrap().is_positive().unwrap();
    assert_eq!(validator.else_get_messages(), ["\"delta\" must be positive.\ndelta: -1"]);

    assert!(Validators::requiring().that(-1, "delta").unwrap().is_positive().is_err());
}

#[test]
fn transformer_rewrites_thrown_errors() {
    let validators = Validators::with_configuration(
        Configuration::builder().exception_transformer(bad_request).build(),
    );

    let error = validators.require_that(0, "page").unwrap().is_positive().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Custom { name: "BadRequest", checked: false });
    assert_eq!(error.message(), "\"page\" must be positive.\npage: 0");
}

#[test]
fn transformer_applies_to_lazy_failures() {
    let validators = Validators::checking()
        .update_configuration(|c| c.record_stacktrace(false).exception_transformer(bad_request));

    let validator = validators.that(0, "page").unwrap().is_positive().unwrap();
    let failures = validator.else_get_failures();
    let failure = failures.iter().next().unwrap();

    assert!(!failure.is_materialized());
    assert_eq!(failure.kind().label(), "BadRequest");
    assert!(failure.is_materialized());
}

#[test]
fn transformer_returning_checked_kind_is_wrapped() {
    let validators = Validators::with_configuration(
        Configuration::builder()
            .exception_transformer(|error: &ValidationError| {
                let kind = ErrorKind::Custom { name: "Timeout", checked: true };
                Some(ValidationError::new(kind, error.message()))
            })
            .build(),
    );

    let error = validators.require_that(0, "page").unwrap().is_positive().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::WrappedChecked);
    assert_eq!(error.message(), "\"page\" must be positive.\npage: 0");

    let cause = std::error::Error::source(&error).unwrap();
    assert!(cause.to_string().contains("must be positive"));
}

#[test]
fn cleared_transformer_restores_default_errors() {
    let configuration = Configuration::builder().exception_transformer(bad_request).build();
    let cleared = configuration.to_builder().clear_exception_transformer().build();
    assert!(cleared.exception_transformer().is_none());

    let error = Validators::with_configuration(cleared)
        .require_that(0, "page")
        .unwrap()
        .is_positive()
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn record_stacktrace_does_not_change_kind_or_message() {
    let exception = |record_stacktrace: bool| {
        let validators = Validators::checking()
            .update_configuration(|c| c.record_stacktrace(record_stacktrace));
        validators
            .that(vec![3, 1, 2], "actual")
            .unwrap()
            .is_sorted(|a: &i32, b: &i32| a.cmp(b))
            .unwrap()
            .contains(named(7, "expected"))
            .unwrap()
            .else_get_exception()
            .unwrap()
    };

    let eager = exception(true);
    let lazy = exception(false);
    assert_eq!(eager.kind(), lazy.kind());
    assert_eq!(eager.message(), lazy.message());
    assert_eq!(eager, lazy);
}

#[test]
fn unclean_stack_trace_captures_backtrace() {
    let validators = Validators::requiring().update_configuration(|c| c.clean_stack_trace(false));
    let error = validators.require_that(0, "page").unwrap().is_positive().unwrap_err();
    let backtrace = error.backtrace().unwrap();
    assert_ne!(backtrace, "disabled backtrace");
    assert!(!backtrace.is_empty());

    let error = require_that(0, "page").unwrap().is_positive().unwrap_err();
    assert!(error.backtrace().is_none());
}

#[derive(Debug, PartialEq)]
struct Release {
    major: u32,
    label: &'static str,
}

impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.major.partial_cmp(&other.major)
    }
}

#[test]
fn equality_method_selects_element_comparison() {
    let releases = || {
        vec![Release { major: 1, label: "stable" }, Release { major: 2, label: "beta" }]
    };
    let wanted = || Release { major: 2, label: "rc" };

    let validator = check_if(releases(), "releases").unwrap().contains(wanted()).unwrap();
    assert!(validator.validation_failed());

    let by_comparison = Validators::checking()
        .update_configuration(|c| c.equality_method(EqualityMethod::ByComparison));
    let validator = by_comparison.that(releases(), "releases").unwrap().contains(wanted()).unwrap();
    assert!(!validator.validation_failed());
}

#[test]
fn equality_method_does_not_apply_to_is_equal_to() {
    let by_comparison = Validators::checking()
        .update_configuration(|c| c.equality_method(EqualityMethod::ByComparison));
    let stable = Release { major: 2, label: "stable" };
    let validator = by_comparison
        .that(stable, "release")
        .unwrap()
        .is_equal_to(Release { major: 2, label: "rc" })
        .unwrap();
    assert!(validator.validation_failed());
}
