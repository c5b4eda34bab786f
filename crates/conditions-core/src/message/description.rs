//! Caller-supplied condition descriptions
//!
//! A description is a message template with at most one `{0}` placeholder for
//! the argument name. `{{` and `}}` render literal braces. Anything else inside
//! braces is rejected when the description is parsed.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{ConditionError, Result};

/// A parsed condition description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionDescription {
    /// Text before the placeholder, or the whole text when there is none
    head: String,
    /// Text after the placeholder; `None` when the template has no placeholder
    tail: Option<String>,
}

impl ConditionDescription {
    /// Parse a description template
    pub fn parse(template: &str) -> Result<Self> {
        let mut head = String::with_capacity(template.len());
        let mut tail: Option<String> = None;
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            let out = tail.as_mut().unwrap_or(&mut head);
            match c {
                '{' if chars.peek().map(|&(_, next)| next) == Some('{') => {
                    chars.next();
                    out.push('{');
                }
                '{' => {
                    let mut inner = String::new();
                    let mut closed = false;
                    for (_, next) in chars.by_ref() {
                        if next == '}' {
                            closed = true;
                            break;
                        }
                        inner.push(next);
                    }

                    if !closed {
                        return Err(ConditionError::malformed_description(
                            template,
                            format!("unclosed '{{' at position {}", position),
                        ));
                    }
                    if inner != "0" {
                        return Err(ConditionError::malformed_description(
                            template,
                            format!(
                                "unsupported placeholder '{{{}}}'; only {{0}} is allowed",
                                inner
                            ),
                        ));
                    }
                    if tail.is_some() {
                        return Err(ConditionError::malformed_description(
                            template,
                            "the {0} placeholder may appear at most once",
                        ));
                    }
                    tail = Some(String::new());
                }
                '}' if chars.peek().map(|&(_, next)| next) == Some('}') => {
                    chars.next();
                    out.push('}');
                }
                '}' => {
                    return Err(ConditionError::malformed_description(
                        template,
                        format!("unmatched '}}' at position {}", position),
                    ));
                }
                other => out.push(other),
            }
        }

        Ok(Self { head, tail })
    }

    pub fn has_placeholder(&self) -> bool {
        self.tail.is_some()
    }

    /// Render with the argument name substituted; an absent name renders empty
    pub fn render(&self, argument_name: Option<&str>) -> String {
        match &self.tail {
            Some(tail) => {
                let name = argument_name.unwrap_or_default();
                let mut rendered =
                    String::with_capacity(self.head.len() + name.len() + tail.len());
                rendered.push_str(&self.head);
                rendered.push_str(name);
                rendered.push_str(tail);
                rendered
            }
            None => self.head.clone(),
        }
    }
}
