use requirements_rail::{check_if, named, ErrorKind, Validators};
use std::collections::{BTreeSet, HashSet, VecDeque};

#[test]
fn set_comparisons_against_overlapping_list() {
    let checks = Validators::checking();
    let actual = || checks.that(vec![1, 2, 3], "actual").unwrap();

    assert!(actual().contains_exactly(vec![2, 3, 4]).unwrap().validation_failed());
    assert!(!actual().contains_any(vec![2, 3, 4]).unwrap().validation_failed());
    assert!(actual().contains_all(vec![2, 3, 4]).unwrap().validation_failed());
    assert!(actual().does_not_contain_any(vec![2, 3, 4]).unwrap().validation_failed());
    assert!(!actual().does_not_contain_all(vec![2, 3, 4]).unwrap().validation_failed());
    assert!(!actual().does_not_contain_exactly(vec![2, 3, 4]).unwrap().validation_failed());
}

#[test]
fn contains_exactly_ignores_order() {
    let validator = check_if(vec![3, 1, 2], "actual")
        .unwrap()
        .contains_exactly(vec![1, 2, 3])
        .unwrap();
    assert!(!validator.validation_failed());

    let validator = check_if(vec![3, 1, 2], "actual")
        .unwrap()
        .does_not_contain_exactly(vec![1, 2, 3])
        .unwrap();
    assert!(validator.validation_failed());
}

#[test]
fn contains_all_lists_missing_elements() {
    let messages = check_if(vec!["read"], "granted")
        .unwrap()
        .contains_all(named(vec!["read", "write"], "required"))
        .unwrap()
        .else_get_messages();

    assert_eq!(
        messages,
        vec!["\"granted\" must contain all the elements present in \"required\".\n\
              granted : [\"read\"]\n\
              required: [\"read\", \"write\"]\n\
              missing : [\"write\"]"
            .to_string()]
    );
}

#[test]
fn does_not_contain_any_lists_elements_to_remove() {
    let messages = check_if(vec![1, 2, 3], "actual")
        .unwrap()
        .does_not_contain_any(vec![3, 4])
        .unwrap()
        .else_get_messages();

    assert_eq!(
        messages,
        vec!["\"actual\" may not contain any of the elements present in [3, 4].\n\
              actual          : [1, 2, 3]\n\
              elementsToRemove: [3]"
            .to_string()]
    );
}

#[test]
fn contains_exactly_against_named_list() {
    let messages = check_if(vec![1, 2], "actual")
        .unwrap()
        .contains_exactly(named(vec![2, 5], "expected"))
        .unwrap()
        .else_get_messages();

    assert_eq!(
        messages[0],
        "\"actual\" must consist of the same elements as \"expected\", regardless of their order.\n\
         actual  : [1, 2]\n\
         expected: [2, 5]\n\
         missing : [5]\n\
         unwanted: [1]"
    );
}

#[test]
fn membership() {
    let validator = check_if(VecDeque::from(vec!['a', 'b']), "letters")
        .unwrap()
        .contains('a')
        .unwrap()
        .does_not_contain('z')
        .unwrap();
    assert!(!validator.validation_failed());

    let messages = check_if(vec![1, 2], "ids")
        .unwrap()
        .contains(named(7, "wanted"))
        .unwrap()
        .else_get_messages();
    assert_eq!(messages, ["\"ids\" must contain \"wanted\".\nids   : [1, 2]\nwanted: 7"]);
}

#[test]
fn sorting_diagnostic_lists_expected_order() {
    let messages = check_if(vec![3, 1, 2], "actual")
        .unwrap()
        .is_sorted(|a: &i32, b: &i32| a.cmp(b))
        .unwrap()
        .else_get_messages();
    assert_eq!(messages, ["\"actual\" must be sorted.\nactual  : [3, 1, 2]\nexpected: [1, 2, 3]"]);

    let validator = check_if(vec![3, 2, 1], "actual")
        .unwrap()
        .is_sorted(|a: &i32, b: &i32| b.cmp(a))
        .unwrap();
    assert!(!validator.validation_failed());
}

#[test]
fn sets_never_report_duplicates() {
    let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
    assert!(!check_if(set, "ids")
        .unwrap()
        .does_not_contain_duplicates()
        .unwrap()
        .validation_failed());

    let set: BTreeSet<&str> = ["b", "a"].into_iter().collect();
    let validator = check_if(set, "names")
        .unwrap()
        .is_sorted(|a: &&str, b: &&str| a.cmp(b))
        .unwrap();
    assert!(!validator.validation_failed());
}

#[test]
fn size_projection() {
    let messages = check_if(vec![1, 2, 3], "items")
        .unwrap()
        .is_not_empty()
        .unwrap()
        .size()
        .unwrap()
        .is_less_than(named(2, "max"))
        .unwrap()
        .else_get_messages();

    assert_eq!(
        messages,
        ["items.size() must be less than \"max\".\n\
          items.size(): 3\n\
          max         : 2\n\
          items       : [1, 2, 3]"]
    );
}

#[test]
fn empty_collections() {
    assert!(!check_if(Vec::<u8>::new(), "bytes").unwrap().is_empty().unwrap().validation_failed());

    let messages = check_if(Vec::<u8>::new(), "bytes")
        .unwrap()
        .is_not_empty()
        .unwrap()
        .else_get_messages();
    assert_eq!(messages, vec!["\"bytes\" may not be empty.\nbytes: []".to_string()]);
}

#[test]
fn as_list_keeps_failure_sink() {
    let set: BTreeSet<i32> = [1, 2].into_iter().collect();
    let list = check_if(set, "ids").unwrap().as_list().unwrap().contains(3).unwrap();

    assert_eq!(list.get_name(), "ids.as_list()");
    assert_eq!(list.else_get_failures().len(), 1);
    assert_eq!(list.else_get_exception().map(|e| e.kind()), Some(ErrorKind::InvalidArgument));
}
