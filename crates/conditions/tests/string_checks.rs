//! Tests for the remaining string checks

use conditions::prelude::*;
use conditions::CultureInfo;
use pretty_assertions::assert_eq;

#[test]
fn test_starts_with() {
    assert!(requires("config.json").starts_with("config").is_ok());
    let err = requires_named("config.json", "path")
        .starts_with("settings")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "path should start with 'settings'.");
}

#[test]
fn test_does_not_start_with() {
    assert!(requires("config.json").does_not_start_with("settings").is_ok());
    let err = requires_named("config.json", "path")
        .does_not_start_with("conf")
        .unwrap_err();
    assert_eq!(err.message(), "path should not start with 'conf'.");
}

#[test]
fn test_null_subject_fails_positive_relation() {
    let path: Option<&str> = None;
    let err = requires_named(path, "path").starts_with("a").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
    assert_eq!(err.param_name(), Some("path"));

    let err = requires_named(path, "path").contains("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
}

#[test]
fn test_null_subject_passes_negated_relation() {
    let path: Option<String> = None;
    assert!(requires(path.clone()).does_not_start_with("a").is_ok());
    assert!(requires(path).does_not_contain("a").is_ok());
}

#[test]
fn test_null_comparand_fails_every_relation() {
    let none = None::<&str>;
    assert_eq!(
        requires("abc").starts_with(none).unwrap_err().kind(),
        ErrorKind::NullArgument
    );
    assert_eq!(
        requires("abc").does_not_contain(none).unwrap_err().kind(),
        ErrorKind::NullArgument
    );
    assert_eq!(
        requires("abc").ends_with(none).unwrap_err().message(),
        " should end with null."
    );
}

#[test]
fn test_contains() {
    let value = String::from("hello world");
    assert!(requires(&value).contains("o w").is_ok());
    assert!(requires(&value).contains("").is_ok());
    let err = requires_named(&value, "greeting")
        .contains("WORLD")
        .unwrap_err();
    assert_eq!(err.message(), "greeting should contain 'WORLD'.");
    assert!(requires(&value)
        .contains_using("WORLD", &StringComparison::OrdinalIgnoreCase, None)
        .is_ok());
}

#[test]
fn test_does_not_contain() {
    let err = requires_named("a secret token", "text")
        .does_not_contain("secret")
        .unwrap_err();
    assert_eq!(err.message(), "text should not contain 'secret'.");
    assert!(requires("a secret token").does_not_contain("password").is_ok());
}

#[test]
fn test_ends_with() {
    assert!(requires("archive.tar.gz").ends_with(".gz").is_ok());
    assert!(requires("archive.tar.gz")
        .ends_with_using(".GZ", &StringComparison::OrdinalIgnoreCase, None)
        .is_ok());
    let err = requires_named("archive.tar.gz", "file")
        .ends_with_using(".zip", &StringComparison::Ordinal, Some("{0} must be a zip"))
        .unwrap_err();
    assert_eq!(err.message(), "file must be a zip");
}

#[test]
fn test_equality_allows_nulls() {
    let none: Option<&str> = None;
    assert!(requires(none).is_equal_to(None::<&str>).is_ok());
    assert!(requires("x").is_not_equal_to(None::<&str>).is_ok());

    let err = requires_named(none, "name").is_equal_to("x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "name should be equal to 'x'.");

    let err = requires_named(none, "name")
        .is_not_equal_to(None::<&str>)
        .unwrap_err();
    assert_eq!(err.message(), "name should not be equal to null.");
}

#[test]
fn test_equality_using_culture() {
    let turkish = StringComparison::culture("tr-TR", true);
    assert!(requires("TITLE")
        .is_not_equal_to_using("title", &turkish, None)
        .is_ok());
    assert!(requires("TİTLE")
        .is_equal_to_using("title", &turkish, None)
        .is_ok());

    let invariant = StringComparison::culture(CultureInfo::invariant(), true);
    assert!(requires("TITLE")
        .is_equal_to_using("title", &invariant, None)
        .is_ok());
}

#[test]
fn test_is_not_null_or_empty() {
    assert!(requires("x").is_not_null_or_empty().is_ok());

    let err = requires_named("", "name").is_not_null_or_empty().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.message(), "name should not be null or empty.");

    let missing: Option<String> = None;
    let err = requires_named(&missing, "name")
        .is_not_null_or_empty_described("{0} is required")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullArgument);
    assert_eq!(err.message(), "name is required");
}

#[test]
fn test_chain_stops_at_first_failure() {
    let err = requires_named("report.tmp", "file")
        .is_not_null_or_empty()
        .and_then(|v| v.starts_with("summary"))
        .and_then(|v| v.does_not_end_with(".tmp"))
        .unwrap_err();
    assert_eq!(err.message(), "file should start with 'summary'.");
}

#[test]
fn test_validator_keeps_value() {
    let validator = requires_named(String::from("abc"), "s")
        .starts_with("a")
        .and_then(|v| v.ends_with("c"))
        .unwrap();
    assert_eq!(validator.name(), Some("s"));
    assert_eq!(validator.into_value(), "abc");
}

#[test]
fn test_ignore_case_folds_each_letter_alike() {
    let ignore_case = StringComparison::OrdinalIgnoreCase;
    assert!(requires("ΣΑΣ").ends_with("Σ").is_ok());
    assert!(requires("ΣΑΣ").ends_with_using("Σ", &ignore_case, None).is_ok());
    assert!(requires("ΣΑΣ").ends_with_using("σ", &ignore_case, None).is_ok());
    assert!(requires("ΣΑΣ")
        .is_equal_to_using("σασ", &ignore_case, None)
        .is_ok());
    assert!(requires("\u{1c5}")
        .is_equal_to_using("\u{1c6}", &ignore_case, None)
        .is_ok());

    let greek = StringComparison::culture("el-GR", true);
    assert!(requires("ΟΔΟΣ").ends_with_using("ς", &greek, None).is_err());
    assert!(requires("ΟΔΟΣ").ends_with_using("σ", &greek, None).is_ok());
}
