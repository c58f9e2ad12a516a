use requirements_rail::{assume_that, check_if, named, require_that, ErrorKind};

#[test]
fn require_that_names_value_after_expression() {
    let retries = 7;
    let error = require_that!(retries).unwrap().is_less_than(5).unwrap_err();
    assert_eq!(error.message(), "\"retries\" must be less than 5.\nretries: 7");
}

#[test]
fn explicit_name_overrides_expression() {
    let port = 80;
    let validator = check_if!(port, "server.port").unwrap().is_greater_than(1023).unwrap();
    assert_eq!(validator.get_name(), "server.port");
    assert_eq!(
        validator.else_get_messages(),
        ["server.port must be greater than 1023.\nserver.port: 80"]
    );
}

#[test]
fn named_macro_lists_operand_in_context() {
    let balance = 100;
    let amount = 130;
    let error = assume_that!(amount)
        .unwrap()
        .is_less_than_or_equal_to(named!(balance))
        .unwrap_err();
    assert_eq!(
        error.message(),
        "\"amount\" must be less than or equal to \"balance\".\namount : 130\nbalance: 100"
    );
}

#[test]
fn expression_with_whitespace_is_rejected() {
    let (a, b) = (1, 2);
    let error = require_that!(a + b).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidArgument);
    assert_eq!(error.message(), "name may not contain whitespace.\nactual: \"a + b\"");
}

#[test]
fn field_access_is_a_valid_name() {
    struct User {
        age: u8,
    }
    let user = User { age: 17 };
    let validator = check_if!(user.age).unwrap().is_greater_than_or_equal_to(18).unwrap();
    assert_eq!(
        validator.else_get_messages(),
        ["user.age must be greater than or equal to 18.\nuser.age: 17"]
    );
}
