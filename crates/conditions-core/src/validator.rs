//! The validator and its check dispatch
//!
//! A [`Validator`] wraps the value under validation. Checks consume the
//! validator and hand it back on success, so they chain with `?`:
//!
//! ```rust
//! use conditions_core::{requires_named, CheckOutcome, FailureReason, Result};
//!
//! fn positive(x: i32) -> Result<i32> {
//!     let x = requires_named(x, "x")
//!         .check(None, |x| {
//!             if *x > 0 {
//!                 CheckOutcome::Passed
//!             } else {
//!                 CheckOutcome::failed(FailureReason::ArgumentOutOfRange, "be greater than 0")
//!             }
//!         })?
//!         .into_value();
//!     Ok(x)
//! }
//!
//! assert!(positive(3).is_ok());
//! assert_eq!(
//!     positive(0).unwrap_err().to_string(),
//!     "x should be greater than 0.\nParameter name: x"
//! );
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::classify::ExceptionClassifier;
use crate::error::{FailureReason, Result};
use crate::message::{ConditionDescription, MessageFormatter};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a contract is being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationMode {
    /// An incoming argument; failures are caller errors
    Precondition,
    /// A result or internal invariant; failures are logic errors
    Postcondition,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Precondition => write!(f, "precondition"),
            ValidationMode::Postcondition => write!(f, "postcondition"),
        }
    }
}

/// A failed predicate as reported by a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub reason: FailureReason,
    /// Verb phrase completing "<argument> should ...", with check values filled in
    pub predicate: String,
}

/// Result of evaluating one check's predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed(Failure),
}

impl CheckOutcome {
    pub fn failed<P: Into<String>>(reason: FailureReason, predicate: P) -> Self {
        CheckOutcome::Failed(Failure {
            reason,
            predicate: predicate.into(),
        })
    }

    /// `Passed` when `holds`, otherwise the failure built by `failure`
    pub fn when<F>(holds: bool, failure: F) -> Self
    where
        F: FnOnce() -> Failure,
    {
        if holds {
            CheckOutcome::Passed
        } else {
            CheckOutcome::Failed(failure())
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

/// The value under validation plus what is needed to report on it
///
/// Never mutated after construction: checks take it by value and return it
/// unchanged on success.
#[derive(Debug, Clone)]
pub struct Validator<'a, T> {
    value: T,
    name: Option<&'a str>,
    mode: ValidationMode,
    #[cfg(any(test, feature = "testing"))]
    suppressed: bool,
}

impl<'a, T> Validator<'a, T> {
    pub(crate) fn new(value: T, name: Option<&'a str>, mode: ValidationMode) -> Self {
        Self {
            value,
            name,
            mode,
            #[cfg(any(test, feature = "testing"))]
            suppressed: false,
        }
    }

    /// The value under validation
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Argument name used in failure messages
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Run one check
    ///
    /// The description is parsed before the predicate runs, so a malformed
    /// description is reported even when the check would pass. On failure the
    /// message is formatted, the error classified by mode and reason, and
    /// returned.
    pub fn check<F>(self, description: Option<&str>, evaluate: F) -> Result<Self>
    where
        F: FnOnce(&T) -> CheckOutcome,
    {
        let description = description.map(ConditionDescription::parse).transpose()?;

        match evaluate(&self.value) {
            CheckOutcome::Passed => Ok(self),
            CheckOutcome::Failed(failure) => self.fail(failure, description.as_ref()),
        }
    }

    fn fail(self, failure: Failure, description: Option<&ConditionDescription>) -> Result<Self> {
        if self.is_suppressed() {
            tracing::trace!(
                target: "conditions",
                mode = %self.mode,
                reason = %failure.reason,
                argument = self.name.unwrap_or_default(),
                "suppressed failed check"
            );
            return Ok(self);
        }

        let message = MessageFormatter::format(&failure.predicate, description, self.name);
        let error = ExceptionClassifier::classify(self.mode, failure.reason, message, self.name);
        tracing::debug!(
            target: "conditions",
            mode = %self.mode,
            kind = %error.kind(),
            argument = self.name.unwrap_or_default(),
            "check failed: {}",
            error.message()
        );
        Err(error)
    }

    #[cfg(any(test, feature = "testing"))]
    fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    #[cfg(not(any(test, feature = "testing")))]
    fn is_suppressed(&self) -> bool {
        false
    }

    #[cfg(any(test, feature = "testing"))]
    pub(crate) fn suppressed(mut self) -> Self {
        self.suppressed = true;
        self
    }
}
