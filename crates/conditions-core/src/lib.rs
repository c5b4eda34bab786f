//! Conditions Core - validation engine for fluent contract checks
//!
//! This crate provides the engine behind the `conditions` check catalog:
//! - **Validator**: wraps a value, its argument name and the validation mode
//! - **Check dispatch**: [`Validator::check`] runs one predicate and either
//!   returns the validator for chaining or the classified error
//! - **Messages**: `"<argument> should <predicate>."` or a caller-supplied
//!   condition description with a `{0}` placeholder for the argument name
//! - **Classification**: mode and failure reason select the error kind
//! - **Comparison**: explicit ordinal or culture-sensitive string comparison
//!
//! # Example
//!
//! ```rust
//! use conditions_core::{requires_named, CheckOutcome, ErrorKind, FailureReason};
//!
//! let name: Option<&str> = None;
//! let err = requires_named(name, "name")
//!     .check(None, |value| {
//!         CheckOutcome::when(value.is_some(), || conditions_core::Failure {
//!             reason: FailureReason::ArgumentNull,
//!             predicate: "not be null".to_string(),
//!         })
//!     })
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::NullArgument);
//! assert_eq!(err.param_name(), Some("name"));
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod classify;
pub mod comparison;
pub mod config;
pub mod error;
pub mod factory;
pub mod message;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod validator;

// Re-export main types for convenience
pub use classify::ExceptionClassifier;
pub use comparison::{CaseMapping, CultureInfo, Relation, StringComparison};
pub use config::{ConditionsConfig, ConfigError};
pub use error::{ConditionError, ErrorKind, FailureReason, Result};
pub use factory::{ensures, ensures_named, requires, requires_named};
pub use message::{ConditionDescription, MessageFormatter};
pub use validator::{CheckOutcome, Failure, ValidationMode, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
