//! Entry points that construct validators
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::validator::{ValidationMode, Validator};

/// Start precondition checks on an unnamed argument
pub fn requires<T>(value: T) -> Validator<'static, T> {
    Validator::new(value, None, ValidationMode::Precondition)
}

/// Start precondition checks on the argument called `name`
pub fn requires_named<'a, T>(value: T, name: &'a str) -> Validator<'a, T> {
    Validator::new(value, Some(name), ValidationMode::Precondition)
}

/// Start postcondition checks on an unnamed value
pub fn ensures<T>(value: T) -> Validator<'static, T> {
    Validator::new(value, None, ValidationMode::Postcondition)
}

/// Start postcondition checks on the value called `name`
pub fn ensures_named<'a, T>(value: T, name: &'a str) -> Validator<'a, T> {
    Validator::new(value, Some(name), ValidationMode::Postcondition)
}
