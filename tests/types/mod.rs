use requirements_rail::config::EqualityMethod;
use requirements_rail::types::{
    duplicates, sorted_if_unsorted, ContextMap, ContextValue, Difference, ValidationTarget,
};
use requirements_rail::{ErrorKind, ValidationError};

mod failures;
#[cfg(feature = "serde")]
mod serialization;

#[test]
fn difference_partitions_both_sides() {
    let diff = Difference::actual_vs_other(&[1, 2, 3], &[2, 3, 4], EqualityMethod::ByEquals);

    assert_eq!(diff.common(), &[2, 3]);
    assert_eq!(diff.only_in_actual(), &[1]);
    assert_eq!(diff.only_in_other(), &[4]);
    assert!(diff.are_different());
}

#[test]
fn difference_ignores_order_and_multiplicity() {
    let diff = Difference::actual_vs_other(&[3, 1, 1, 2], &[1, 2, 3, 3], EqualityMethod::ByEquals);

    assert!(diff.are_the_same());
    assert_eq!(diff.common(), &[3, 1, 2]);
}

#[test]
fn duplicates_are_reported_once_in_order_of_appearance() {
    assert_eq!(duplicates(&[1, 2, 1, 3, 2, 1], EqualityMethod::ByEquals, false), vec![1, 2]);
    assert!(duplicates(&[1, 2, 3], EqualityMethod::ByEquals, false).is_empty());
    assert!(duplicates(&[1, 1], EqualityMethod::ByEquals, true).is_empty());
}

#[test]
fn difference_and_duplicates_handle_thousands_of_elements() {
    let actual: Vec<u32> = (0..2_000).collect();
    let other: Vec<u32> = (1..=2_000).collect();
    let diff = Difference::actual_vs_other(&actual, &other, EqualityMethod::ByEquals);

    assert_eq!(diff.common().len(), 1_999);
    assert_eq!(diff.only_in_actual(), &[0]);
    assert_eq!(diff.only_in_other(), &[2_000]);

    let repeated: Vec<u32> = (0..2_000).map(|i| i % 1_000).collect();
    let dups = duplicates(&repeated, EqualityMethod::ByComparison, false);
    assert_eq!(dups, actual[..1_000].to_vec());
}

#[test]
fn sorted_if_unsorted_returns_expected_order() {
    assert_eq!(sorted_if_unsorted(&[3, 1, 2_i32], |a, b| a.cmp(b)), Some(vec![1, 2, 3]));
    assert_eq!(sorted_if_unsorted(&[1, 2, 2, 3_i32], |a, b| a.cmp(b)), None);
    assert_eq!(sorted_if_unsorted::<i32, _>(&[], |a, b| a.cmp(b)), None);
    assert_eq!(sorted_if_unsorted(&[1, 2, 3_i32], |a, b| b.cmp(a)), Some(vec![3, 2, 1]));
}

#[test]
fn target_collapses_to_undefined_after_failed_test() {
    let target = ValidationTarget::valid(5);
    assert!(!target.validation_failed(|v| *v > 0));
    assert!(target.validation_failed(|v| *v > 10));

    let undefined: ValidationTarget<i32> = ValidationTarget::Undefined;
    assert!(undefined.validation_failed(|_| true));
    assert!(ValidationTarget::<i32>::from_option(None).is_null());
    assert!(ValidationTarget::<i32>::Null.null_to_undefined().is_undefined());
}

#[test]
fn context_map_keeps_insertion_order_and_replaces_in_place() {
    let mut context = ContextMap::new();
    context.insert("first", ContextValue::of(&1));
    context.insert("second", ContextValue::of(&2));
    context.insert("first", ContextValue::of(&3));

    let entries: Vec<(String, String)> = context
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(
        entries,
        vec![("first".to_string(), "3".to_string()), ("second".to_string(), "2".to_string())]
    );
}

#[test]
fn aggregate_error_keeps_every_message() {
    let error = ValidationError::aggregate(vec![
        ValidationError::invalid_argument("\"a\" must be positive"),
        ValidationError::null("\"b\" may not be null"),
    ]);

    assert_eq!(error.kind(), ErrorKind::Aggregate);
    assert_eq!(
        error.message(),
        "InvalidArgumentError: \"a\" must be positive\n\nNullError: \"b\" may not be null"
    );
    assert_eq!(error.failures().len(), 2);
}

#[test]
fn only_io_and_checked_custom_kinds_are_checked() {
    assert!(ErrorKind::Io.is_checked());
    assert!(!ErrorKind::WrappedChecked.is_checked());
    assert!(!ErrorKind::Custom { name: "Conflict", checked: false }.is_checked());
    assert!(ErrorKind::InternalInvariant.is_fatal());
}
