//! Range and bound checks
//!
//! All failures here report an out-of-range argument. Values that do not
//! compare at all (NaN) fail every bound.
//!
//! [`OrderingChecks`] uses the value's own `PartialOrd`. For strings,
//! [`StringOrderingChecks`] orders through an explicit [`StringComparison`]
//! instead; a null subject fails its bound and range checks with a
//! null-argument error and passes `is_not_in_range_using`.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::checks::string::StringSubject;
use conditions_core::{
    CheckOutcome, Failure, FailureReason, MessageFormatter, Result, StringComparison, Validator,
};
use std::cmp::Ordering;
use std::fmt::Display;

/// Checks on ordered values
pub trait OrderingChecks<T>: Sized {
    /// Passes when `min <= value <= max`
    fn is_in_range(self, min: T, max: T) -> Result<Self>;

    fn is_in_range_described(self, min: T, max: T, description: &str) -> Result<Self>;

    fn is_not_in_range(self, min: T, max: T) -> Result<Self>;

    fn is_not_in_range_described(self, min: T, max: T, description: &str) -> Result<Self>;

    fn is_greater_than(self, bound: T) -> Result<Self>;

    fn is_greater_than_described(self, bound: T, description: &str) -> Result<Self>;

    fn is_greater_or_equal(self, bound: T) -> Result<Self>;

    fn is_greater_or_equal_described(self, bound: T, description: &str) -> Result<Self>;

    fn is_less_than(self, bound: T) -> Result<Self>;

    fn is_less_than_described(self, bound: T, description: &str) -> Result<Self>;

    fn is_less_or_equal(self, bound: T) -> Result<Self>;

    fn is_less_or_equal_described(self, bound: T, description: &str) -> Result<Self>;
}

impl<T: PartialOrd + Display> OrderingChecks<T> for Validator<'_, T> {
    fn is_in_range(self, min: T, max: T) -> Result<Self> {
        check_range(self, min, max, false, None)
    }

    fn is_in_range_described(self, min: T, max: T, description: &str) -> Result<Self> {
        check_range(self, min, max, false, Some(description))
    }

    fn is_not_in_range(self, min: T, max: T) -> Result<Self> {
        check_range(self, min, max, true, None)
    }

    fn is_not_in_range_described(self, min: T, max: T, description: &str) -> Result<Self> {
        check_range(self, min, max, true, Some(description))
    }

    fn is_greater_than(self, bound: T) -> Result<Self> {
        check_bound(self, Bound::GreaterThan, bound, None)
    }

    fn is_greater_than_described(self, bound: T, description: &str) -> Result<Self> {
        check_bound(self, Bound::GreaterThan, bound, Some(description))
    }

    fn is_greater_or_equal(self, bound: T) -> Result<Self> {
        check_bound(self, Bound::GreaterOrEqual, bound, None)
    }

    fn is_greater_or_equal_described(self, bound: T, description: &str) -> Result<Self> {
        check_bound(self, Bound::GreaterOrEqual, bound, Some(description))
    }

    fn is_less_than(self, bound: T) -> Result<Self> {
        check_bound(self, Bound::LessThan, bound, None)
    }

    fn is_less_than_described(self, bound: T, description: &str) -> Result<Self> {
        check_bound(self, Bound::LessThan, bound, Some(description))
    }

    fn is_less_or_equal(self, bound: T) -> Result<Self> {
        check_bound(self, Bound::LessOrEqual, bound, None)
    }

    fn is_less_or_equal_described(self, bound: T, description: &str) -> Result<Self> {
        check_bound(self, Bound::LessOrEqual, bound, Some(description))
    }
}

/// Bound and range checks on strings under an explicit comparison
pub trait StringOrderingChecks: Sized {
    fn is_in_range_using(
        self,
        min: &str,
        max: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn is_not_in_range_using(
        self,
        min: &str,
        max: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn is_greater_than_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn is_greater_or_equal_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn is_less_than_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn is_less_or_equal_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;
}

impl<T: StringSubject> StringOrderingChecks for Validator<'_, T> {
    fn is_in_range_using(
        self,
        min: &str,
        max: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        self.check(description, |value| {
            string_range_outcome(value.as_subject(), min, max, false, comparison)
        })
    }

    fn is_not_in_range_using(
        self,
        min: &str,
        max: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        self.check(description, |value| {
            string_range_outcome(value.as_subject(), min, max, true, comparison)
        })
    }

    fn is_greater_than_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        self.check(description, |value| {
            string_bound_outcome(value.as_subject(), Bound::GreaterThan, bound, comparison)
        })
    }

    fn is_greater_or_equal_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        self.check(description, |value| {
            string_bound_outcome(value.as_subject(), Bound::GreaterOrEqual, bound, comparison)
        })
    }

    fn is_less_than_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        self.check(description, |value| {
            string_bound_outcome(value.as_subject(), Bound::LessThan, bound, comparison)
        })
    }

    fn is_less_or_equal_using(
        self,
        bound: &str,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        self.check(description, |value| {
            string_bound_outcome(value.as_subject(), Bound::LessOrEqual, bound, comparison)
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl Bound {
    fn phrase(self) -> &'static str {
        match self {
            Bound::GreaterThan => "be greater than",
            Bound::GreaterOrEqual => "be greater than or equal to",
            Bound::LessThan => "be smaller than",
            Bound::LessOrEqual => "be smaller than or equal to",
        }
    }

    /// Whether a value ordered this way against the bound satisfies it
    fn admits(self, ordering: Option<Ordering>) -> bool {
        matches!(
            (self, ordering),
            (Bound::GreaterThan, Some(Ordering::Greater))
                | (
                    Bound::GreaterOrEqual,
                    Some(Ordering::Greater | Ordering::Equal)
                )
                | (Bound::LessThan, Some(Ordering::Less))
                | (Bound::LessOrEqual, Some(Ordering::Less | Ordering::Equal))
        )
    }
}

/// `against_min` and `against_max` order the value against each end
fn within(against_min: Option<Ordering>, against_max: Option<Ordering>) -> bool {
    Bound::GreaterOrEqual.admits(against_min) && Bound::LessOrEqual.admits(against_max)
}

fn range_predicate(negated: bool, min: impl Display, max: impl Display) -> String {
    format!(
        "{}be in range {} to {}",
        if negated { "not " } else { "" },
        min,
        max
    )
}

fn check_range<'a, T: PartialOrd + Display>(
    validator: Validator<'a, T>,
    min: T,
    max: T,
    negated: bool,
    description: Option<&str>,
) -> Result<Validator<'a, T>> {
    validator.check(description, |value| {
        let inside = within(value.partial_cmp(&min), value.partial_cmp(&max));
        out_of_range(inside != negated, || range_predicate(negated, &min, &max))
    })
}

fn check_bound<'a, T: PartialOrd + Display>(
    validator: Validator<'a, T>,
    bound_kind: Bound,
    bound: T,
    description: Option<&str>,
) -> Result<Validator<'a, T>> {
    validator.check(description, |value| {
        out_of_range(bound_kind.admits(value.partial_cmp(&bound)), || {
            format!("{} {}", bound_kind.phrase(), bound)
        })
    })
}

fn string_range_outcome(
    subject: Option<&str>,
    min: &str,
    max: &str,
    negated: bool,
    comparison: &StringComparison,
) -> CheckOutcome {
    let predicate = || {
        range_predicate(
            negated,
            MessageFormatter::quote(Some(min)),
            MessageFormatter::quote(Some(max)),
        )
    };
    match subject {
        None if negated => CheckOutcome::Passed,
        None => CheckOutcome::failed(FailureReason::ArgumentNull, predicate()),
        Some(subject) => {
            let inside = within(
                Some(comparison.compare(subject, min)),
                Some(comparison.compare(subject, max)),
            );
            out_of_range(inside != negated, predicate)
        }
    }
}

fn string_bound_outcome(
    subject: Option<&str>,
    bound_kind: Bound,
    bound: &str,
    comparison: &StringComparison,
) -> CheckOutcome {
    let predicate = || {
        format!(
            "{} {}",
            bound_kind.phrase(),
            MessageFormatter::quote(Some(bound))
        )
    };
    match subject {
        None => CheckOutcome::failed(FailureReason::ArgumentNull, predicate()),
        Some(subject) => out_of_range(
            bound_kind.admits(Some(comparison.compare(subject, bound))),
            predicate,
        ),
    }
}

fn out_of_range<F: FnOnce() -> String>(holds: bool, predicate: F) -> CheckOutcome {
    CheckOutcome::when(holds, || Failure {
        reason: FailureReason::ArgumentOutOfRange,
        predicate: predicate(),
    })
}
