//! String comparison policy
//!
//! Checks that compare text take an explicit [`StringComparison`]. Ordinal
//! modes are culture-invariant; culture modes carry the [`CultureInfo`] whose
//! case mapping applies, so no ambient locale state is consulted.
//!
//! Null handling follows one rule for every relation: a null operand never
//! relates to a non-null one, and two nulls relate only to each other.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod culture;

pub use culture::{CaseMapping, CultureInfo};

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// How two strings are compared
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringComparison {
    /// Compare code points exactly
    #[default]
    Ordinal,
    /// Compare code points after culture-invariant lowercasing
    OrdinalIgnoreCase,
    /// Culture-sensitive, case-sensitive comparison
    Culture(CultureInfo),
    /// Culture-sensitive comparison using the culture's case mapping
    CultureIgnoreCase(CultureInfo),
}

/// A relation between a subject string and a comparand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Equals,
    StartsWith,
    EndsWith,
    Contains,
}

impl Relation {
    /// Verb phrase used in failure messages ("end with")
    pub fn verb(&self) -> &'static str {
        match self {
            Relation::Equals => "be equal to",
            Relation::StartsWith => "start with",
            Relation::EndsWith => "end with",
            Relation::Contains => "contain",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl StringComparison {
    /// Culture-sensitive comparison, ignoring case or not
    pub fn culture<C: Into<CultureInfo>>(culture: C, ignore_case: bool) -> Self {
        if ignore_case {
            StringComparison::CultureIgnoreCase(culture.into())
        } else {
            StringComparison::Culture(culture.into())
        }
    }

    pub fn ignores_case(&self) -> bool {
        matches!(
            self,
            StringComparison::OrdinalIgnoreCase | StringComparison::CultureIgnoreCase(_)
        )
    }

    /// Culture this comparison follows, if it is culture-sensitive
    pub fn culture_info(&self) -> Option<&CultureInfo> {
        match self {
            StringComparison::Culture(culture) | StringComparison::CultureIgnoreCase(culture) => {
                Some(culture)
            }
            StringComparison::Ordinal | StringComparison::OrdinalIgnoreCase => None,
        }
    }

    /// Whether `subject` stands in `relation` to `comparand`
    pub fn relates(
        &self,
        relation: Relation,
        subject: Option<&str>,
        comparand: Option<&str>,
    ) -> bool {
        let (subject, comparand) = match (subject, comparand) {
            (Some(subject), Some(comparand)) => (subject, comparand),
            (None, None) => return true,
            _ => return false,
        };

        let subject = self.fold(subject);
        let comparand = self.fold(comparand);
        match relation {
            Relation::Equals => subject == comparand,
            Relation::StartsWith => subject.starts_with(comparand.as_ref()),
            Relation::EndsWith => subject.ends_with(comparand.as_ref()),
            Relation::Contains => subject.contains(comparand.as_ref()),
        }
    }

    pub fn equals(&self, subject: Option<&str>, other: Option<&str>) -> bool {
        self.relates(Relation::Equals, subject, other)
    }

    pub fn starts_with(&self, subject: Option<&str>, prefix: Option<&str>) -> bool {
        self.relates(Relation::StartsWith, subject, prefix)
    }

    pub fn ends_with(&self, subject: Option<&str>, suffix: Option<&str>) -> bool {
        self.relates(Relation::EndsWith, subject, suffix)
    }

    pub fn contains(&self, subject: Option<&str>, needle: Option<&str>) -> bool {
        self.relates(Relation::Contains, subject, needle)
    }

    /// Order two strings
    ///
    /// Ordinal mode orders by code point. Case-insensitive modes order the
    /// folded text only. Case-sensitive culture mode orders the lowercased
    /// text first and breaks ties ordinally.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            StringComparison::Ordinal => a.cmp(b),
            StringComparison::OrdinalIgnoreCase | StringComparison::CultureIgnoreCase(_) => {
                self.fold(a).cmp(&self.fold(b))
            }
            StringComparison::Culture(culture) => culture
                .to_lowercase(a)
                .cmp(&culture.to_lowercase(b))
                .then_with(|| a.cmp(b)),
        }
    }

    fn fold<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self {
            StringComparison::Ordinal | StringComparison::Culture(_) => Cow::Borrowed(text),
            StringComparison::OrdinalIgnoreCase => CultureInfo::invariant().to_lowercase(text),
            StringComparison::CultureIgnoreCase(culture) => culture.to_lowercase(text),
        }
    }
}

impl fmt::Display for StringComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringComparison::Ordinal => write!(f, "ordinal"),
            StringComparison::OrdinalIgnoreCase => write!(f, "ordinal, ignoring case"),
            StringComparison::Culture(culture) => write!(f, "culture {}", culture),
            StringComparison::CultureIgnoreCase(culture) => {
                write!(f, "culture {}, ignoring case", culture)
            }
        }
    }
}
