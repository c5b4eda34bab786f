//! Conditions - fluent precondition and postcondition checks
//!
//! Wrap a value with [`requires`] (an incoming argument) or [`ensures`] (a
//! result or invariant) and chain checks. A failed check returns a
//! [`ConditionError`] whose variant tells what kind of contract was broken and
//! whose message reads `"<argument> should <rule>."`.
//!
//! ## Quick Start
//!
//! ```rust
//! use conditions::prelude::*;
//!
//! fn rename(file_name: &str) -> conditions::Result<()> {
//!     requires_named(file_name, "file_name")
//!         .is_not_null_or_empty()?
//!         .does_not_end_with(".tmp")?;
//!     Ok(())
//! }
//!
//! assert!(rename("report.txt").is_ok());
//!
//! let err = rename("report.tmp").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidArgument);
//! assert_eq!(err.param_name(), Some("file_name"));
//! assert_eq!(err.message(), "file_name should not end with '.tmp'.");
//! ```
//!
//! ## Error kinds
//!
//! - **NullArgument**: a precondition met a null value or comparand
//! - **InvalidArgument**: a precondition rejected the value itself
//! - **ArgumentOutOfRange**: a precondition bound was violated
//! - **PostconditionViolated**: any check failed under [`ensures`]
//!
//! ## Custom messages
//!
//! Every check family has variants taking a condition description, a template
//! with at most one `{0}` placeholder for the argument name:
//!
//! ```rust
//! use conditions::prelude::*;
//!
//! let value: Option<u32> = None;
//! let err = requires_named(value, "port")
//!     .is_not_null_described("a {0} must be configured")
//!     .unwrap_err();
//! assert_eq!(err.message(), "a port must be configured");
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod checks;

pub use checks::{
    EvaluationChecks, NullChecks, Nullable, OrderingChecks, StringChecks, StringOrderingChecks,
    StringSubject,
};
pub use conditions_core::{
    ensures, ensures_named, requires, requires_named, CheckOutcome, ConditionDescription,
    ConditionError, ConditionsConfig, CultureInfo, ErrorKind, Failure, FailureReason, Result,
    StringComparison, ValidationMode, Validator,
};

/// Test support for exercising check logic without failing
#[cfg(feature = "testing")]
pub use conditions_core::testing;

/// Everything needed to write checks
pub mod prelude {
    pub use crate::checks::{
        EvaluationChecks, NullChecks, OrderingChecks, StringChecks, StringOrderingChecks,
    };
    pub use conditions_core::{
        ensures, ensures_named, requires, requires_named, ConditionError, ErrorKind,
        StringComparison,
    };
}
