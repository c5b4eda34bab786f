//! Culture selection and case mapping
//!
//! A [`CultureInfo`] is identified by a locale tag. Only the language subtag
//! matters for comparisons: it selects the case mapping used when a
//! culture-sensitive comparison ignores case.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Case mapping rules selected by a culture's language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseMapping {
    /// Unicode default case mapping
    Default,
    /// Turkish and Azerbaijani: dotted and dotless I are distinct letters
    Turkic,
}

/// A named culture used by culture-sensitive string comparisons
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CultureInfo {
    name: String,
    case_mapping: CaseMapping,
}

impl CultureInfo {
    /// Create a culture from a locale tag such as `tr-TR`, `en_US.UTF-8` or `az`
    ///
    /// An empty tag, `C`, `POSIX` and `invariant` select the invariant culture.
    pub fn new<S: AsRef<str>>(tag: S) -> Self {
        let name = normalize_tag(tag.as_ref());
        let language = name.split('-').next().unwrap_or_default();
        let case_mapping = match language {
            "tr" | "az" => CaseMapping::Turkic,
            _ => CaseMapping::Default,
        };

        Self { name, case_mapping }
    }

    /// The invariant culture
    pub fn invariant() -> Self {
        Self {
            name: String::new(),
            case_mapping: CaseMapping::Default,
        }
    }

    /// Normalized culture name; empty for the invariant culture
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    pub fn case_mapping(&self) -> CaseMapping {
        self.case_mapping
    }

    /// Lowercase `text` following this culture's case mapping
    ///
    /// Each character maps on its own, without regard to its neighbours, so a
    /// letter folds the same way wherever it appears in the text.
    pub fn to_lowercase<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mapping = self.case_mapping;
        if !text.chars().any(|c| mapping.changes(c)) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.chars().flat_map(|c| mapping.lowercase(c)).collect())
    }
}

impl CaseMapping {
    fn lowercase(self, c: char) -> std::char::ToLowercase {
        let c = match (self, c) {
            (CaseMapping::Turkic, 'I') => '\u{131}',
            (CaseMapping::Turkic, '\u{130}') => 'i',
            (_, other) => other,
        };
        c.to_lowercase()
    }

    fn changes(self, c: char) -> bool {
        self.lowercase(c).ne(std::iter::once(c))
    }
}

impl Default for CultureInfo {
    fn default() -> Self {
        Self::invariant()
    }
}

impl From<String> for CultureInfo {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl From<&str> for CultureInfo {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<CultureInfo> for String {
    fn from(culture: CultureInfo) -> Self {
        culture.name
    }
}

impl fmt::Display for CultureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Turn `tr_TR.UTF-8@euro` into `tr-TR`, keeping only language and region
fn normalize_tag(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or_default();

    if tag.is_empty()
        || tag.eq_ignore_ascii_case("c")
        || tag.eq_ignore_ascii_case("posix")
        || tag.eq_ignore_ascii_case("invariant")
    {
        return String::new();
    }

    let mut parts = tag.split(['-', '_']).filter(|part| !part.is_empty());
    let mut name = parts.next().unwrap_or_default().to_ascii_lowercase();
    for part in parts {
        name.push('-');
        if part.len() == 2 {
            name.push_str(&part.to_ascii_uppercase());
        } else {
            name.push_str(part);
        }
    }
    name
}
