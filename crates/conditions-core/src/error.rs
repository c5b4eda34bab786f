//! Error types for failed conditions
//!
//! Every failed check surfaces as one variant of [`ConditionError`]. The
//! variant is the error kind; callers match on it (or on [`ErrorKind`]) instead
//! of parsing message text.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for condition checks
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConditionError {
    /// A precondition required a non-null value (or comparand) and got null
    #[error("{message}{}", ParameterSuffix(.param_name.as_deref()))]
    NullArgument {
        message: String,
        param_name: Option<String>,
    },

    /// A precondition rejected the value itself
    #[error("{message}{}", ParameterSuffix(.param_name.as_deref()))]
    InvalidArgument {
        message: String,
        param_name: Option<String>,
    },

    /// A precondition rejected the value because of a relational bound
    #[error("{message}{}", ParameterSuffix(.param_name.as_deref()))]
    ArgumentOutOfRange {
        message: String,
        param_name: Option<String>,
    },

    /// A postcondition (result or internal invariant) did not hold
    #[error("{message}")]
    PostconditionViolated {
        message: String,
        reason: FailureReason,
    },

    /// A caller-supplied condition description could not be used as a template
    #[error("Invalid condition description '{template}': {reason}")]
    MalformedDescription { template: String, reason: String },
}

/// Convenience type alias for Results using our error type
pub type Result<T> = std::result::Result<T, ConditionError>;

/// Discriminant of [`ConditionError`], for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NullArgument,
    InvalidArgument,
    ArgumentOutOfRange,
    PostconditionViolated,
    MalformedDescription,
}

/// Why a check failed, as reported by the check itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The value or a required comparand was null
    ArgumentNull,
    /// The value itself is not allowed
    ArgumentInvalid,
    /// The value violates a relational bound
    ArgumentOutOfRange,
    /// An invariant that is not about an incoming argument did not hold
    PostconditionViolated,
}

impl ConditionError {
    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConditionError::NullArgument { .. } => ErrorKind::NullArgument,
            ConditionError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            ConditionError::ArgumentOutOfRange { .. } => ErrorKind::ArgumentOutOfRange,
            ConditionError::PostconditionViolated { .. } => ErrorKind::PostconditionViolated,
            ConditionError::MalformedDescription { .. } => ErrorKind::MalformedDescription,
        }
    }

    /// Formatted failure message, without the parameter-name suffix
    pub fn message(&self) -> &str {
        match self {
            ConditionError::NullArgument { message, .. }
            | ConditionError::InvalidArgument { message, .. }
            | ConditionError::ArgumentOutOfRange { message, .. }
            | ConditionError::PostconditionViolated { message, .. } => message,
            ConditionError::MalformedDescription { reason, .. } => reason,
        }
    }

    /// Name of the argument that failed, for precondition errors
    pub fn param_name(&self) -> Option<&str> {
        match self {
            ConditionError::NullArgument { param_name, .. }
            | ConditionError::InvalidArgument { param_name, .. }
            | ConditionError::ArgumentOutOfRange { param_name, .. } => param_name.as_deref(),
            ConditionError::PostconditionViolated { .. }
            | ConditionError::MalformedDescription { .. } => None,
        }
    }

    /// Whether this error reports a violated precondition
    pub fn is_precondition(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NullArgument | ErrorKind::InvalidArgument | ErrorKind::ArgumentOutOfRange
        )
    }

    pub(crate) fn malformed_description<T, R>(template: T, reason: R) -> Self
    where
        T: Into<String>,
        R: Into<String>,
    {
        ConditionError::MalformedDescription {
            template: template.into(),
            reason: reason.into(),
        }
    }
}

/// Renders the trailing parameter-name line of precondition errors
struct ParameterSuffix<'a>(Option<&'a str>);

impl fmt::Display for ParameterSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(name) => write!(f, "\nParameter name: {}", name),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NullArgument => write!(f, "null argument"),
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::ArgumentOutOfRange => write!(f, "argument out of range"),
            ErrorKind::PostconditionViolated => write!(f, "postcondition violated"),
            ErrorKind::MalformedDescription => write!(f, "malformed description"),
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::ArgumentNull => write!(f, "ArgumentNull"),
            FailureReason::ArgumentInvalid => write!(f, "ArgumentInvalid"),
            FailureReason::ArgumentOutOfRange => write!(f, "ArgumentOutOfRange"),
            FailureReason::PostconditionViolated => write!(f, "PostconditionViolated"),
        }
    }
}
