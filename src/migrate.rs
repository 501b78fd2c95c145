//! Batch driver: read each located file, run the rule families, write back.

use crate::config::MigrationConfig;
use crate::diff::{DiffSummary, colorized_diff, unified_diff};
use crate::error::{MigrateError, Result};
use crate::locate::Locator;
use crate::rules::{ConstructorRules, CustomRules, ExpectationRules, RuleSet};
use crate::transform::{FileChange, TransformBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// A file is about to be read.
    Processing(&'a Path),
    /// A rule family changed the file's content.
    Updated { family: &'a str, path: &'a Path },
}

/// The result of a batch run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Every file visited, changed or not.
    pub processed: Vec<PathBuf>,
    /// Files whose content changed, with before and after text.
    pub changes: Vec<FileChange>,
    pub summary: DiffSummary,
}

impl RunSummary {
    /// Returns the number of files visited.
    pub fn files_processed(&self) -> usize {
        self.processed.len()
    }

    /// Returns the number of files that were modified.
    pub fn files_modified(&self) -> usize {
        self.changes.len()
    }

    /// Generates a unified diff of all changes.
    pub fn diff(&self) -> String {
        self.changes
            .iter()
            .map(|c| unified_diff(&c.original, &c.transformed, &c.path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generates a colorized diff for terminal display.
    pub fn colorized_diff(&self) -> String {
        self.changes
            .iter()
            .map(|c| colorized_diff(&c.original, &c.transformed, &c.path))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct Family {
    name: String,
    description: String,
    transform: TransformBuilder,
}

impl Family {
    fn build(rules: &dyn RuleSet) -> Result<Self> {
        Ok(Self {
            name: rules.name().to_string(),
            description: rules.description().to_string(),
            transform: rules.transform()?,
        })
    }
}

/// A pegomock to gomock conversion.
///
/// # Example
///
/// ```rust,no_run
/// use mock_migrate::prelude::*;
///
/// let migration = Migration::new()?;
/// let summary = migration.run_located(&Locator::walk("server", "_test.go"), |_| {})?;
/// println!("Processed {} files", summary.files_processed());
/// # Ok::<(), mock_migrate::error::MigrateError>(())
/// ```
pub struct Migration {
    constructors: Family,
    expectations: Family,
    custom: Option<Family>,
    dry_run: bool,
}

impl Migration {
    /// Creates a migration with the default controller and mock catalog.
    pub fn new() -> Result<Self> {
        Self::from_config(&MigrationConfig::default())
    }

    /// Creates a migration from a config.
    pub fn from_config(config: &MigrationConfig) -> Result<Self> {
        let constructors = ConstructorRules::new()
            .controller(&config.controller)
            .mock_types(config.mock_types.iter().cloned());
        let custom = CustomRules::new(config.transforms.clone());

        Ok(Self {
            constructors: Family::build(&constructors)?,
            expectations: Family::build(&ExpectationRules)?,
            custom: if custom.is_empty() {
                None
            } else {
                Some(Family::build(&custom)?)
            },
            dry_run: false,
        })
    }

    /// Enables dry-run mode (compute changes without writing).
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Describes each rule family as `(name, description, rules)`.
    pub fn describe(&self) -> Vec<(String, String, Vec<String>)> {
        self.families()
            .map(|f| (f.name.clone(), f.description.clone(), f.transform.describe()))
            .collect()
    }

    fn families(&self) -> impl Iterator<Item = &Family> {
        [&self.constructors, &self.expectations]
            .into_iter()
            .chain(self.custom.as_ref())
    }

    /// Converts every file the locator finds.
    pub fn run_located<F>(&self, locator: &Locator, progress: F) -> Result<RunSummary>
    where
        F: FnMut(Progress<'_>),
    {
        self.run(locator.locate()?, progress)
    }

    /// Converts each path in order, skipping blank entries.
    ///
    /// A file is written only when some rule changed it. The first unreadable
    /// file aborts the run; files already written stay converted.
    pub fn run<I, F>(&self, paths: I, mut progress: F) -> Result<RunSummary>
    where
        I: IntoIterator<Item = PathBuf>,
        F: FnMut(Progress<'_>),
    {
        let mut result = RunSummary::default();

        for path in paths {
            if path.as_os_str().is_empty() {
                continue;
            }
            progress(Progress::Processing(&path));

            let original = read_source(&path)?;
            let mut transformed = original.clone();
            for family in self.families() {
                let (next, changed) = family.transform.apply_tracked(&transformed);
                if changed {
                    progress(Progress::Updated {
                        family: &family.name,
                        path: &path,
                    });
                    transformed = next;
                }
            }

            let change = FileChange {
                path: path.clone(),
                original,
                transformed,
            };
            self.finish(&change)?;
            if change.is_modified() {
                result
                    .summary
                    .merge(&DiffSummary::from_diff(&change.original, &change.transformed));
                result.changes.push(change);
            }
            result.processed.push(path);
        }

        info!(
            processed = result.files_processed(),
            modified = result.files_modified(),
            "migration finished"
        );
        Ok(result)
    }

    /// Converts a single file with the expectation rules only.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<FileChange> {
        let path = path.as_ref();
        let original = read_source(path)?;
        let transformed = self.expectations.transform.apply(&original);

        let change = FileChange {
            path: path.to_path_buf(),
            original,
            transformed,
        };
        self.finish(&change)?;
        Ok(change)
    }

    fn finish(&self, change: &FileChange) -> Result<()> {
        if self.dry_run {
            debug!(path = %change.path.display(), modified = change.is_modified(), "dry run");
            return Ok(());
        }
        if change.apply()? {
            info!(path = %change.path.display(), "wrote converted file");
        }
        Ok(())
    }
}

fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MigrateError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}
