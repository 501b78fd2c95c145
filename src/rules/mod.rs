//! Rewrite rule families for moving Go tests from pegomock to gomock.
//!
//! A conversion runs two families over every file:
//!
//! - [`ConstructorRules`] threads the gomock controller into mock constructors
//!   (`NewMockClient()` becomes `NewMockClient(ctrl)`).
//! - [`ExpectationRules`] rewrites stubbing, argument matchers and
//!   verifications (`When(m.Get(x)).ThenReturn(y)` becomes
//!   `m.EXPECT().Get(x).Return(y)`).
//!
//! Verifications that need argument capture or call counting cannot be
//! expressed by a text substitution, so they are replaced by a
//! `// TODO(gomock): ...` line holding the suggested expectation.
//!
//! # Example
//!
//! ```rust
//! use mock_migrate::rules::{ExpectationRules, RuleSet};
//!
//! let rules = ExpectationRules.transform()?;
//! let out = rules.apply("When(m.Get(Any[string]())).ThenReturn(1, nil)");
//! assert_eq!(out, "m.EXPECT().Get(gomock.Any()).Return(1, nil)");
//! # Ok::<(), mock_migrate::error::MigrateError>(())
//! ```

mod constructor;
mod custom;
mod expectation;

pub use constructor::{ConstructorRules, DEFAULT_CONTROLLER, DEFAULT_MOCK_TYPES};
pub use custom::CustomRules;
pub use expectation::ExpectationRules;

use crate::error::Result;
use crate::transform::TransformBuilder;

/// A named, ordered family of rewrite rules.
pub trait RuleSet: Send + Sync {
    /// Unique name for this family.
    fn name(&self) -> &str;

    /// Human-readable description of what this family rewrites.
    fn description(&self) -> &str;

    /// Builds the ordered transformations for this family.
    fn transform(&self) -> Result<TransformBuilder>;
}
