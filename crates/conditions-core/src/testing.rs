//! Test support: validators that evaluate checks without failing
//!
//! Only compiled for this crate's own tests or with the `testing` feature.
//! Production builds have no way to construct a suppressed validator.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::validator::Validator;

/// Return `validator` with failures swallowed
///
/// Every check on the returned validator evaluates its predicate and then
/// hands the validator back, passed or not. A malformed condition description
/// is still reported since it is a usage error, not a check failure.
pub fn suppress_exceptions_for_test<T>(validator: Validator<'_, T>) -> Validator<'_, T> {
    validator.suppressed()
}
