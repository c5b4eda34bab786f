//! Failure message formatting
//!
//! Default messages follow one shape, `"<argument> should <predicate>."`, where
//! the predicate is the verb phrase a check reports ("not end with 'test'").
//! A caller-supplied [`ConditionDescription`] replaces the default entirely.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod description;

pub use description::ConditionDescription;

/// Builds human-readable failure messages
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the message for a failed check
    ///
    /// An absent argument name renders as the empty string in both the
    /// default message and a description's placeholder.
    pub fn format(
        predicate: &str,
        description: Option<&ConditionDescription>,
        argument_name: Option<&str>,
    ) -> String {
        match description {
            Some(description) => description.render(argument_name),
            None => Self::default_message(predicate, argument_name),
        }
    }

    /// The stock `"<argument> should <predicate>."` message
    pub fn default_message(predicate: &str, argument_name: Option<&str>) -> String {
        format!("{} should {}.", argument_name.unwrap_or_default(), predicate)
    }

    /// Quote a comparand the way default messages show it
    pub fn quote(value: Option<&str>) -> String {
        match value {
            Some(value) => format!("'{}'", value),
            None => "null".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_message_shape() {
        assert_eq!(
            MessageFormatter::format("not end with 'test'", None, Some("a")),
            "a should not end with 'test'."
        );
    }

    #[test]
    fn test_default_message_without_name() {
        assert_eq!(
            MessageFormatter::format("not be null", None, None),
            " should not be null."
        );
    }

    #[test]
    fn test_description_overrides_default() {
        let description = ConditionDescription::parse("qwe {0} xyz").unwrap();
        assert_eq!(
            MessageFormatter::format("not be null", Some(&description), Some("o")),
            "qwe o xyz"
        );
        assert_eq!(
            MessageFormatter::format("not be null", Some(&description), None),
            "qwe  xyz"
        );
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let description = ConditionDescription::parse("{0} is bad").unwrap();
        let first = MessageFormatter::format("be good", Some(&description), Some("x"));
        let second = MessageFormatter::format("be good", Some(&description), Some("x"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_predicate_braces_are_not_placeholders() {
        assert_eq!(
            MessageFormatter::format("not contain '{0}'", None, Some("s")),
            "s should not contain '{0}'."
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(MessageFormatter::quote(Some("test")), "'test'");
        assert_eq!(MessageFormatter::quote(None), "null");
    }
}
