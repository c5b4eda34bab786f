//! Tests for the `is_not_null` check
//!
//! Covers plain and borrowed optional values, condition descriptions and
//! suppressed validators.

use conditions::prelude::*;
use conditions_core::testing::suppress_exceptions_for_test;
use pretty_assertions::assert_eq;

#[test]
fn test_null_value_fails_with_null_argument() {
    let o: Option<String> = None;
    let err = requires(o).is_not_null().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
}

#[test]
fn test_set_value_passes() {
    let o = Some(String::from("object"));
    assert!(requires(o).is_not_null().is_ok());
}

#[test]
fn test_null_number_fails() {
    let i: Option<i32> = None;
    let err = requires(i).is_not_null().unwrap_err();
    assert!(matches!(err, ConditionError::NullArgument { .. }));
}

#[test]
fn test_set_number_passes() {
    assert!(requires(Some(3)).is_not_null().is_ok());
}

#[test]
fn test_empty_description_on_success() {
    assert!(requires(Some(4)).is_not_null_described("").is_ok());
}

#[test]
fn test_failure_references_argument_name() {
    let o: Option<&str> = None;
    let err = requires_named(o, "o").is_not_null().unwrap_err();
    assert_eq!(err.param_name(), Some("o"));
    assert_eq!(err.message(), "o should not be null.");
    assert_eq!(err.to_string(), "o should not be null.\nParameter name: o");
}

#[test]
fn test_description_is_substituted() {
    let o: Option<&str> = None;
    let err = requires_named(o, "o")
        .is_not_null_described("qwe {0} xyz")
        .unwrap_err();
    assert!(err.to_string().contains("qwe o xyz"));

    let i: Option<i32> = None;
    let err = requires_named(i, "i")
        .is_not_null_described("qwe {0} xyz")
        .unwrap_err();
    assert!(err.to_string().contains("qwe i xyz"));
}

#[test]
fn test_description_without_name() {
    let i: Option<i32> = None;
    let err = requires(i).is_not_null_described("qwe {0} xyz").unwrap_err();
    assert_eq!(err.message(), "qwe  xyz");
}

#[test]
fn test_malformed_description_is_rejected() {
    let err = requires(Some(1))
        .is_not_null_described("qwe {1} xyz")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDescription);

    let err = requires(Some(1))
        .is_not_null_described("qwe { 0 } xyz")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDescription);
}

#[test]
fn test_postcondition_null() {
    let result: Option<u8> = None;
    let err = ensures_named(result, "result").is_not_null().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PostconditionViolated);
    assert_eq!(err.message(), "result should not be null.");
    assert_eq!(err.param_name(), None);
}

#[test]
fn test_suppressed_validator_passes_null() {
    let o: Option<String> = None;
    let validator = suppress_exceptions_for_test(requires(o))
        .is_not_null()
        .unwrap();
    assert!(validator.value().is_none());
}
