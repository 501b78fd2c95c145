//! Text-based transformations using regex patterns.

use super::Transform;
use crate::error::Result;
use regex::Regex;

/// Text-based transformation using regex replacement.
pub struct TextTransform {
    kind: TextTransformKind,
}

enum TextTransformKind {
    Replace { pattern: Regex, replacement: String },
    ReplaceUntilStable { pattern: Regex, replacement: String },
    ReplaceLiteral { needle: String, replacement: String },
}

impl TextTransform {
    /// Creates a regex replacement transform.
    ///
    /// The replacement uses `regex` template syntax (`$1`, `${name}`).
    pub fn replace(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self::replace_regex(Regex::new(pattern)?, replacement))
    }

    /// Creates a replacement transform from a pre-compiled regex.
    pub fn replace_regex(pattern: Regex, replacement: impl Into<String>) -> Self {
        Self {
            kind: TextTransformKind::Replace {
                pattern,
                replacement: replacement.into(),
            },
        }
    }

    /// Creates a regex replacement that repeats until the text stops changing.
    ///
    /// Matches that share a delimiter with a neighbour are skipped by a single
    /// `replace_all` pass; repeating picks them up. The replacement must not
    /// reintroduce a match, or the loop never ends.
    pub fn replace_until_stable(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            kind: TextTransformKind::ReplaceUntilStable {
                pattern: Regex::new(pattern)?,
                replacement: replacement.to_string(),
            },
        })
    }

    /// Creates a literal string replacement transform.
    pub fn replace_literal(needle: &str, replacement: &str) -> Self {
        Self {
            kind: TextTransformKind::ReplaceLiteral {
                needle: needle.to_string(),
                replacement: replacement.to_string(),
            },
        }
    }
}

impl Transform for TextTransform {
    fn apply(&self, source: &str) -> String {
        match &self.kind {
            TextTransformKind::Replace {
                pattern,
                replacement,
            } => pattern
                .replace_all(source, replacement.as_str())
                .into_owned(),
            TextTransformKind::ReplaceUntilStable {
                pattern,
                replacement,
            } => {
                let mut result = source.to_string();
                loop {
                    let next = pattern.replace_all(&result, replacement.as_str());
                    if next == result {
                        return result;
                    }
                    result = next.into_owned();
                }
            }
            TextTransformKind::ReplaceLiteral {
                needle,
                replacement,
            } => source.replace(needle, replacement),
        }
    }

    fn describe(&self) -> String {
        match &self.kind {
            TextTransformKind::Replace {
                pattern,
                replacement,
            }
            | TextTransformKind::ReplaceUntilStable {
                pattern,
                replacement,
            } => {
                format!(
                    "Replace pattern '{}' with '{}'",
                    pattern.as_str(),
                    replacement
                )
            }
            TextTransformKind::ReplaceLiteral {
                needle,
                replacement,
            } => {
                format!("Replace literal '{}' with '{}'", needle, replacement)
            }
        }
    }
}
