//! Free-form checks on any value
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use conditions_core::{CheckOutcome, FailureReason, Result, Validator};

const PREDICATE: &str = "satisfy the given condition";

/// Checks driven by a caller-computed condition
pub trait EvaluationChecks<T>: Sized {
    /// Fails with an invalid-argument error when `condition` is false
    fn evaluate(self, condition: bool) -> Result<Self>;

    fn evaluate_described(self, condition: bool, description: &str) -> Result<Self>;

    /// Like [`evaluate`](EvaluationChecks::evaluate), computing the condition from the value
    fn evaluate_with<F>(self, predicate: F) -> Result<Self>
    where
        F: FnOnce(&T) -> bool;
}

impl<T> EvaluationChecks<T> for Validator<'_, T> {
    fn evaluate(self, condition: bool) -> Result<Self> {
        self.evaluate_with(|_| condition)
    }

    fn evaluate_described(self, condition: bool, description: &str) -> Result<Self> {
        self.check(Some(description), |_| outcome(condition))
    }

    fn evaluate_with<F>(self, predicate: F) -> Result<Self>
    where
        F: FnOnce(&T) -> bool,
    {
        self.check(None, |value| outcome(predicate(value)))
    }
}

fn outcome(condition: bool) -> CheckOutcome {
    if condition {
        CheckOutcome::Passed
    } else {
        CheckOutcome::failed(FailureReason::ArgumentInvalid, PREDICATE)
    }
}
