//! Native file discovery by name suffix.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Predicates for picking candidate test files in a project.
#[derive(Default, Clone)]
pub struct FileMatcher {
    suffix: String,
    exclude_globs: Vec<String>,
}

impl FileMatcher {
    /// Creates a matcher for file names ending in `suffix`.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            exclude_globs: Vec::new(),
        }
    }

    /// Excludes files matching any of the glob patterns.
    pub fn excludes(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude_globs.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Collects all matching files under `root`, sorted by path.
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let exclude_set = self.build_glob_set()?;

        let mut matched: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| self.is_candidate(root, path, &exclude_set))
            .collect();

        matched.sort();
        Ok(matched)
    }

    /// Keeps the paths from an external listing that pass the predicates.
    pub fn filter(&self, root: &Path, paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
        let exclude_set = self.build_glob_set()?;
        Ok(paths
            .into_iter()
            .filter(|path| self.is_candidate(root, path, &exclude_set))
            .collect())
    }

    fn is_candidate(&self, root: &Path, path: &Path, exclude_set: &GlobSet) -> bool {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !name.ends_with(&self.suffix) {
            return false;
        }

        let rel_path = path.strip_prefix(root).unwrap_or(path);
        self.exclude_globs.is_empty() || !exclude_set.is_match(rel_path)
    }

    fn build_glob_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_globs {
            builder.add(Glob::new(pattern)?);
        }
        Ok(builder.build()?)
    }
}
