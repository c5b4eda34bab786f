//! Null checks
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use conditions_core::{CheckOutcome, FailureReason, Result, Validator};

/// Values that may be null
pub trait Nullable {
    fn is_null_value(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null_value(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for &Option<T> {
    fn is_null_value(&self) -> bool {
        self.is_none()
    }
}

/// Checks on values that may be null
pub trait NullChecks: Sized {
    /// Fails with an invalid-argument error unless the value is null
    fn is_null(self) -> Result<Self>;

    fn is_null_described(self, description: &str) -> Result<Self>;

    /// Fails with a null-argument error when the value is null
    fn is_not_null(self) -> Result<Self>;

    fn is_not_null_described(self, description: &str) -> Result<Self>;
}

impl<T: Nullable> NullChecks for Validator<'_, T> {
    fn is_null(self) -> Result<Self> {
        check_null(self, true, None)
    }

    fn is_null_described(self, description: &str) -> Result<Self> {
        check_null(self, true, Some(description))
    }

    fn is_not_null(self) -> Result<Self> {
        check_null(self, false, None)
    }

    fn is_not_null_described(self, description: &str) -> Result<Self> {
        check_null(self, false, Some(description))
    }
}

fn check_null<'a, T: Nullable>(
    validator: Validator<'a, T>,
    expect_null: bool,
    description: Option<&str>,
) -> Result<Validator<'a, T>> {
    validator.check(description, |value| {
        match (expect_null, value.is_null_value()) {
            (true, true) | (false, false) => CheckOutcome::Passed,
            (true, false) => CheckOutcome::failed(FailureReason::ArgumentInvalid, "be null"),
            (false, true) => CheckOutcome::failed(FailureReason::ArgumentNull, "not be null"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use conditions_core::{requires_named, ErrorKind};

    #[test]
    fn test_nullable_impls() {
        assert!(Option::<u8>::None.is_null_value());
        assert!(!(&Some(1)).is_null_value());
    }

    #[test]
    fn test_is_null() {
        assert!(requires_named(Option::<u8>::None, "x").is_null().is_ok());
        let err = requires_named(Some(1), "x").is_null().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "x should be null.");
    }

    #[test]
    fn test_is_not_null_on_borrowed_option() {
        let value: Option<String> = None;
        let err = requires_named(&value, "value").is_not_null().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
        assert_eq!(err.message(), "value should not be null.");
    }
}
