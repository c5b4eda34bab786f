//! Mapping from validation mode and failure reason to error kind
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{ConditionError, ErrorKind, FailureReason};
use crate::validator::ValidationMode;

/// Decides which error a failed check produces
pub struct ExceptionClassifier;

impl ExceptionClassifier {
    /// Error kind for a failure in the given mode
    ///
    /// Postcondition mode always yields [`ErrorKind::PostconditionViolated`].
    pub fn kind(mode: ValidationMode, reason: FailureReason) -> ErrorKind {
        match (mode, reason) {
            (ValidationMode::Postcondition, _) => ErrorKind::PostconditionViolated,
            (ValidationMode::Precondition, FailureReason::ArgumentNull) => ErrorKind::NullArgument,
            (ValidationMode::Precondition, FailureReason::ArgumentInvalid) => {
                ErrorKind::InvalidArgument
            }
            (ValidationMode::Precondition, FailureReason::ArgumentOutOfRange) => {
                ErrorKind::ArgumentOutOfRange
            }
            (ValidationMode::Precondition, FailureReason::PostconditionViolated) => {
                ErrorKind::PostconditionViolated
            }
        }
    }

    /// Build the error for a failure
    ///
    /// Precondition errors carry the argument name as a field; postcondition
    /// errors keep the reason the check reported.
    pub fn classify(
        mode: ValidationMode,
        reason: FailureReason,
        message: String,
        argument_name: Option<&str>,
    ) -> ConditionError {
        let param_name = argument_name.map(str::to_string);
        match Self::kind(mode, reason) {
            ErrorKind::NullArgument => ConditionError::NullArgument {
                message,
                param_name,
            },
            ErrorKind::InvalidArgument => ConditionError::InvalidArgument {
                message,
                param_name,
            },
            ErrorKind::ArgumentOutOfRange => ConditionError::ArgumentOutOfRange {
                message,
                param_name,
            },
            ErrorKind::PostconditionViolated | ErrorKind::MalformedDescription => {
                ConditionError::PostconditionViolated { message, reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_table() {
        let cases = [
            (FailureReason::ArgumentNull, ErrorKind::NullArgument),
            (FailureReason::ArgumentInvalid, ErrorKind::InvalidArgument),
            (FailureReason::ArgumentOutOfRange, ErrorKind::ArgumentOutOfRange),
            (FailureReason::PostconditionViolated, ErrorKind::PostconditionViolated),
        ];
        for (reason, expected) in cases {
            assert_eq!(
                ExceptionClassifier::kind(ValidationMode::Precondition, reason),
                expected
            );
        }
    }

    #[test]
    fn test_postcondition_mode_always_postcondition() {
        for reason in [
            FailureReason::ArgumentNull,
            FailureReason::ArgumentInvalid,
            FailureReason::ArgumentOutOfRange,
            FailureReason::PostconditionViolated,
        ] {
            let err = ExceptionClassifier::classify(
                ValidationMode::Postcondition,
                reason,
                "result should not be null.".to_string(),
                Some("result"),
            );
            assert_eq!(err.kind(), ErrorKind::PostconditionViolated);
            assert_eq!(err.param_name(), None);
            assert_eq!(
                err,
                ConditionError::PostconditionViolated {
                    message: "result should not be null.".to_string(),
                    reason,
                }
            );
        }
    }

    #[test]
    fn test_precondition_carries_param_name() {
        let err = ExceptionClassifier::classify(
            ValidationMode::Precondition,
            FailureReason::ArgumentNull,
            "o should not be null.".to_string(),
            Some("o"),
        );
        assert_eq!(err.kind(), ErrorKind::NullArgument);
        assert_eq!(err.param_name(), Some("o"));
        assert_eq!(err.message(), "o should not be null.");
    }
}
