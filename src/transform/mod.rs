//! Ordered text transformations applied to whole source files.

pub mod text;

pub use text::TextTransform;

use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

/// A code transformation that can be applied to source text.
pub trait Transform: Send + Sync {
    /// Applies the transformation to the given source code.
    ///
    /// A transformation that finds nothing to rewrite returns the input unchanged.
    fn apply(&self, source: &str) -> String;

    /// Returns a description of the transformation.
    fn describe(&self) -> String;
}

/// An ordered list of transformations.
///
/// Each transformation sees the output of the ones before it.
#[derive(Default)]
pub struct TransformBuilder {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformBuilder {
    /// Creates a new transform builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a regex replacement.
    pub fn replace_pattern(mut self, pattern: &str, replacement: &str) -> Result<Self> {
        self.transforms
            .push(Box::new(TextTransform::replace(pattern, replacement)?));
        Ok(self)
    }

    /// Adds a literal string replacement.
    pub fn replace_literal(mut self, needle: &str, replacement: &str) -> Self {
        self.transforms
            .push(Box::new(TextTransform::replace_literal(needle, replacement)));
        self
    }

    /// Adds a regex replacement that is repeated until it finds nothing more.
    pub fn replace_pattern_until_stable(mut self, pattern: &str, replacement: &str) -> Result<Self> {
        self.transforms
            .push(Box::new(TextTransform::replace_until_stable(pattern, replacement)?));
        Ok(self)
    }

    /// Applies all transformations to the source code in order.
    pub fn apply(&self, source: &str) -> String {
        self.apply_tracked(source).0
    }

    /// Applies all transformations and reports whether the result differs from `source`.
    pub fn apply_tracked(&self, source: &str) -> (String, bool) {
        let mut result = source.to_string();
        for transform in &self.transforms {
            let next = transform.apply(&result);
            if next != result {
                debug!(rule = %transform.describe(), "rule rewrote content");
                result = next;
            }
        }
        let changed = result != source;
        (result, changed)
    }

    /// Returns descriptions of all transformations.
    pub fn describe(&self) -> Vec<String> {
        self.transforms.iter().map(|t| t.describe()).collect()
    }
}

/// Represents a change to be applied to a file.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub original: String,
    pub transformed: String,
}

impl FileChange {
    /// Returns true if the content was modified.
    pub fn is_modified(&self) -> bool {
        self.original != self.transformed
    }

    /// Writes the transformed content to disk.
    ///
    /// Unmodified files are not touched. Returns whether a write happened.
    pub fn apply(&self) -> Result<bool> {
        if !self.is_modified() {
            return Ok(false);
        }
        std::fs::write(&self.path, &self.transformed)?;
        Ok(true)
    }
}
