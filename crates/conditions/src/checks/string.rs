//! String checks
//!
//! Relation checks (`starts_with`, `ends_with`, `contains` and their
//! negations) need a non-null comparand: a null one fails with a null-argument
//! error whatever the subject is. A null subject fails a positive relation
//! with a null-argument error and passes a negated one. Equality checks accept
//! null on either side and treat two nulls as equal.
//!
//! Plain variants compare ordinally; the `_using` variants take an explicit
//! [`StringComparison`] and an optional condition description.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use conditions_core::{
    CheckOutcome, FailureReason, MessageFormatter, Relation, Result, StringComparison, Validator,
};

/// Values that can be checked as (possibly null) strings
pub trait StringSubject {
    fn as_subject(&self) -> Option<&str>;
}

impl StringSubject for &str {
    fn as_subject(&self) -> Option<&str> {
        Some(*self)
    }
}

impl StringSubject for String {
    fn as_subject(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl StringSubject for &String {
    fn as_subject(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl StringSubject for Option<&str> {
    fn as_subject(&self) -> Option<&str> {
        *self
    }
}

impl StringSubject for Option<String> {
    fn as_subject(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl StringSubject for &Option<String> {
    fn as_subject(&self) -> Option<&str> {
        self.as_deref()
    }
}

/// Checks on string values
pub trait StringChecks: Sized {
    fn starts_with<'s, C: Into<Option<&'s str>>>(self, prefix: C) -> Result<Self>;

    fn starts_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        prefix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn does_not_start_with<'s, C: Into<Option<&'s str>>>(self, prefix: C) -> Result<Self>;

    fn does_not_start_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        prefix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn ends_with<'s, C: Into<Option<&'s str>>>(self, suffix: C) -> Result<Self>;

    fn ends_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        suffix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    /// Fails with an invalid-argument error when the value ends with `suffix`
    fn does_not_end_with<'s, C: Into<Option<&'s str>>>(self, suffix: C) -> Result<Self>;

    fn does_not_end_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        suffix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn contains<'s, C: Into<Option<&'s str>>>(self, needle: C) -> Result<Self>;

    fn contains_using<'s, C: Into<Option<&'s str>>>(
        self,
        needle: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn does_not_contain<'s, C: Into<Option<&'s str>>>(self, needle: C) -> Result<Self>;

    fn does_not_contain_using<'s, C: Into<Option<&'s str>>>(
        self,
        needle: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn is_equal_to<'s, C: Into<Option<&'s str>>>(self, other: C) -> Result<Self>;

    fn is_equal_to_using<'s, C: Into<Option<&'s str>>>(
        self,
        other: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    fn is_not_equal_to<'s, C: Into<Option<&'s str>>>(self, other: C) -> Result<Self>;

    fn is_not_equal_to_using<'s, C: Into<Option<&'s str>>>(
        self,
        other: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self>;

    /// Null fails with a null-argument error, empty with an invalid-argument error
    fn is_not_null_or_empty(self) -> Result<Self>;

    fn is_not_null_or_empty_described(self, description: &str) -> Result<Self>;
}

impl<T: StringSubject> StringChecks for Validator<'_, T> {
    fn starts_with<'s, C: Into<Option<&'s str>>>(self, prefix: C) -> Result<Self> {
        self.starts_with_using(prefix, &StringComparison::Ordinal, None)
    }

    fn starts_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        prefix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let prefix = prefix.into();
        self.check(description, |value| {
            relation_outcome(value.as_subject(), Relation::StartsWith, false, prefix, comparison)
        })
    }

    fn does_not_start_with<'s, C: Into<Option<&'s str>>>(self, prefix: C) -> Result<Self> {
        self.does_not_start_with_using(prefix, &StringComparison::Ordinal, None)
    }

    fn does_not_start_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        prefix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let prefix = prefix.into();
        self.check(description, |value| {
            relation_outcome(value.as_subject(), Relation::StartsWith, true, prefix, comparison)
        })
    }

    fn ends_with<'s, C: Into<Option<&'s str>>>(self, suffix: C) -> Result<Self> {
        self.ends_with_using(suffix, &StringComparison::Ordinal, None)
    }

    fn ends_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        suffix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let suffix = suffix.into();
        self.check(description, |value| {
            relation_outcome(value.as_subject(), Relation::EndsWith, false, suffix, comparison)
        })
    }

    fn does_not_end_with<'s, C: Into<Option<&'s str>>>(self, suffix: C) -> Result<Self> {
        self.does_not_end_with_using(suffix, &StringComparison::Ordinal, None)
    }

    fn does_not_end_with_using<'s, C: Into<Option<&'s str>>>(
        self,
        suffix: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let suffix = suffix.into();
        self.check(description, |value| {
            relation_outcome(value.as_subject(), Relation::EndsWith, true, suffix, comparison)
        })
    }

    fn contains<'s, C: Into<Option<&'s str>>>(self, needle: C) -> Result<Self> {
        self.contains_using(needle, &StringComparison::Ordinal, None)
    }

    fn contains_using<'s, C: Into<Option<&'s str>>>(
        self,
        needle: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let needle = needle.into();
        self.check(description, |value| {
            relation_outcome(value.as_subject(), Relation::Contains, false, needle, comparison)
        })
    }

    fn does_not_contain<'s, C: Into<Option<&'s str>>>(self, needle: C) -> Result<Self> {
        self.does_not_contain_using(needle, &StringComparison::Ordinal, None)
    }

    fn does_not_contain_using<'s, C: Into<Option<&'s str>>>(
        self,
        needle: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let needle = needle.into();
        self.check(description, |value| {
            relation_outcome(value.as_subject(), Relation::Contains, true, needle, comparison)
        })
    }

    fn is_equal_to<'s, C: Into<Option<&'s str>>>(self, other: C) -> Result<Self> {
        self.is_equal_to_using(other, &StringComparison::Ordinal, None)
    }

    fn is_equal_to_using<'s, C: Into<Option<&'s str>>>(
        self,
        other: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let other = other.into();
        self.check(description, |value| {
            equality_outcome(value.as_subject(), false, other, comparison)
        })
    }

    fn is_not_equal_to<'s, C: Into<Option<&'s str>>>(self, other: C) -> Result<Self> {
        self.is_not_equal_to_using(other, &StringComparison::Ordinal, None)
    }

    fn is_not_equal_to_using<'s, C: Into<Option<&'s str>>>(
        self,
        other: C,
        comparison: &StringComparison,
        description: Option<&str>,
    ) -> Result<Self> {
        let other = other.into();
        self.check(description, |value| {
            equality_outcome(value.as_subject(), true, other, comparison)
        })
    }

    fn is_not_null_or_empty(self) -> Result<Self> {
        check_not_null_or_empty(self, None)
    }

    fn is_not_null_or_empty_described(self, description: &str) -> Result<Self> {
        check_not_null_or_empty(self, Some(description))
    }
}

fn predicate(relation: Relation, negated: bool, comparand: Option<&str>) -> String {
    format!(
        "{}{} {}",
        if negated { "not " } else { "" },
        relation.verb(),
        MessageFormatter::quote(comparand)
    )
}

fn relation_outcome(
    subject: Option<&str>,
    relation: Relation,
    negated: bool,
    comparand: Option<&str>,
    comparison: &StringComparison,
) -> CheckOutcome {
    if comparand.is_none() {
        return CheckOutcome::failed(
            FailureReason::ArgumentNull,
            predicate(relation, negated, comparand),
        );
    }

    if comparison.relates(relation, subject, comparand) != negated {
        CheckOutcome::Passed
    } else if subject.is_none() {
        CheckOutcome::failed(
            FailureReason::ArgumentNull,
            predicate(relation, negated, comparand),
        )
    } else {
        CheckOutcome::failed(
            FailureReason::ArgumentInvalid,
            predicate(relation, negated, comparand),
        )
    }
}

fn equality_outcome(
    subject: Option<&str>,
    negated: bool,
    other: Option<&str>,
    comparison: &StringComparison,
) -> CheckOutcome {
    CheckOutcome::when(comparison.equals(subject, other) != negated, || {
        conditions_core::Failure {
            reason: FailureReason::ArgumentInvalid,
            predicate: predicate(Relation::Equals, negated, other),
        }
    })
}

fn check_not_null_or_empty<'a, T: StringSubject>(
    validator: Validator<'a, T>,
    description: Option<&str>,
) -> Result<Validator<'a, T>> {
    validator.check(description, |value| match value.as_subject() {
        None => CheckOutcome::failed(FailureReason::ArgumentNull, "not be null or empty"),
        Some("") => CheckOutcome::failed(FailureReason::ArgumentInvalid, "not be null or empty"),
        Some(_) => CheckOutcome::Passed,
    })
}
