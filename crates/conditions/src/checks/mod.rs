//! Check catalog
//!
//! Each family is a trait implemented for [`Validator`](conditions_core::Validator)
//! whenever the value has the matching capability (`Nullable`, `StringSubject`,
//! `PartialOrd + Display`). String ordering goes through
//! [`StringOrderingChecks`] with an explicit comparison. Bring the traits into
//! scope through [`crate::prelude`].
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod evaluate;
pub mod null;
pub mod ordering;
pub mod string;

pub use evaluate::EvaluationChecks;
pub use null::{NullChecks, Nullable};
pub use ordering::{OrderingChecks, StringOrderingChecks};
pub use string::{StringChecks, StringSubject};
