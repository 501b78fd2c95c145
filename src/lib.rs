//! # Mock Migrate
//!
//! Rewrites Go test files from the pegomock mocking idiom to gomock by
//! ordered regex substitution.
//!
//! The crate provides:
//! - Locating test files by name suffix (native walk, external `find`, or a single path)
//! - Rule families for mock constructors and for stubbing/verification calls
//! - A batch driver that writes a file only when a rule changed it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mock_migrate::prelude::*;
//!
//! let locator = Locator::walk("./server", "_test.go").exclude("vendor/**");
//! let summary = Migration::new()?.run_located(&locator, |progress| {
//!     if let Progress::Updated { family, path } = progress {
//!         println!("Updated {family} in {}", path.display());
//!     }
//! })?;
//!
//! println!("Processed {} files", summary.files_processed());
//! # Ok::<(), mock_migrate::error::MigrateError>(())
//! ```
//!
//! ## What gets rewritten
//!
//! | pegomock | gomock |
//! |---|---|
//! | `NewMockClient()` | `NewMockClient(ctrl)` |
//! | `When(m.Get(a)).ThenReturn(x)` | `m.EXPECT().Get(a).Return(x)` |
//! | `Any[T]()`, `AnyString()` | `gomock.Any()` |
//! | `Eq(x)` | `gomock.Eq(x)` |
//! | `m.VerifyWasCalled(Never()).Get(a)` | `// TODO(gomock): m.EXPECT().Get(a).Times(0)` |
//! | `When(m.Get(a)).ThenPanic(v)` | `// TODO(gomock): panic with v from .Do(): m.EXPECT().Get(a)` |
//!
//! Verifications are left as `TODO(gomock)` comments for a human to finish.

pub mod config;
pub mod diff;
pub mod error;
pub mod locate;
pub mod logging;
pub mod migrate;
pub mod rules;
pub mod transform;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{MigrationConfig, TransformSpec};
    pub use crate::diff::DiffSummary;
    pub use crate::error::{MigrateError, Result};
    pub use crate::locate::{FileMatcher, Locator};
    pub use crate::migrate::{Migration, Progress, RunSummary};
    pub use crate::rules::{ConstructorRules, CustomRules, ExpectationRules, RuleSet};
    pub use crate::transform::{FileChange, TextTransform, Transform, TransformBuilder};
}

pub use prelude::*;
