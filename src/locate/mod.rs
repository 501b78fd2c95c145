//! Locating the test files a migration should visit.

pub mod file;
pub mod find;

pub use file::FileMatcher;
pub use find::{find_files, split_listing};

use crate::config::MigrationConfig;
use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
enum Strategy {
    Walk,
    FindCommand,
    Single(PathBuf),
}

/// Produces the ordered list of candidate files.
#[derive(Debug, Clone)]
pub struct Locator {
    root: PathBuf,
    suffix: String,
    exclude: Vec<String>,
    strategy: Strategy,
}

impl Locator {
    /// Walks `root` natively, keeping files whose name ends in `suffix`.
    pub fn walk(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
            exclude: Vec::new(),
            strategy: Strategy::Walk,
        }
    }

    /// Lists files with an external `find` run under `root`.
    pub fn find_command(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::FindCommand,
            ..Self::walk(root, suffix)
        }
    }

    /// Yields exactly `path`, without any filtering.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            root: path.clone(),
            suffix: String::new(),
            exclude: Vec::new(),
            strategy: Strategy::Single(path),
        }
    }

    /// Builds a walking locator from a config.
    pub fn from_config(config: &MigrationConfig) -> Self {
        Self::walk(&config.root, &config.suffix).excludes(config.exclude.iter().cloned())
    }

    /// Skips files matching the glob pattern, relative to the root.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Skips files matching any of the glob patterns.
    pub fn excludes(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Chooses between walking and `find`. Single-path locators are unaffected.
    pub fn use_find(mut self, enabled: bool) -> Self {
        if matches!(self.strategy, Strategy::Walk | Strategy::FindCommand) {
            self.strategy = if enabled {
                Strategy::FindCommand
            } else {
                Strategy::Walk
            };
        }
        self
    }

    /// Lists the candidate files in processing order.
    pub fn locate(&self) -> Result<Vec<PathBuf>> {
        let matcher = FileMatcher::new(&self.suffix).excludes(self.exclude.iter().cloned());

        let files = match &self.strategy {
            Strategy::Walk => matcher.collect(&self.root)?,
            Strategy::FindCommand => {
                matcher.filter(&self.root, find_files(&self.root, &self.suffix))?
            }
            Strategy::Single(path) => vec![path.clone()],
        };

        debug!(root = %self.root.display(), count = files.len(), "located files");
        Ok(files)
    }
}
