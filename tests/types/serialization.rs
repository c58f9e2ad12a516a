use requirements_rail::config::EqualityMethod;
use requirements_rail::types::{ContextValue, Difference};
use requirements_rail::ErrorKind;

#[test]
fn error_kind_round_trips() {
    let json = serde_json::to_string(&ErrorKind::InvalidArgument).unwrap();
    assert_eq!(json, "\"InvalidArgument\"");
    assert_eq!(serde_json::from_str::<ErrorKind>(&json).unwrap(), ErrorKind::InvalidArgument);
}

#[test]
fn context_value_round_trips() {
    let value = ContextValue::list([1, 2].iter());
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"List":["1","2"]}"#);
    assert_eq!(serde_json::from_str::<ContextValue>(&json).unwrap(), value);
}

#[test]
fn difference_serializes_partitions() {
    let diff = Difference::actual_vs_other(&[1, 2, 3], &[2, 3, 4], EqualityMethod::ByEquals);
    let json = serde_json::to_value(&diff).unwrap();

    assert_eq!(json["common"], serde_json::json!([2, 3]));
    assert_eq!(json["only_in_actual"], serde_json::json!([1]));
    assert_eq!(json["only_in_other"], serde_json::json!([4]));
    assert_eq!(serde_json::from_value::<Difference<i32>>(json).unwrap(), diff);
}

#[test]
fn equality_method_round_trips() {
    let json = serde_json::to_string(&EqualityMethod::ByComparison).unwrap();
    assert_eq!(
        serde_json::from_str::<EqualityMethod>(&json).unwrap(),
        EqualityMethod::ByComparison
    );
}

#[test]
fn custom_kind_loses_its_name_when_deserialized() {
    let kind = ErrorKind::Custom { name: "BadRequest", checked: true };
    let json = serde_json::to_string(&kind).unwrap();
    assert_eq!(json, r#"{"Custom":{"name":"BadRequest","checked":true}}"#);

    let restored = serde_json::from_str::<ErrorKind>(&json).unwrap();
    assert_eq!(restored, ErrorKind::Custom { name: "", checked: true });
    assert!(restored.is_checked());
}
