//! User-supplied rules loaded from a configuration file.

use super::RuleSet;
use crate::config::TransformSpec;
use crate::error::Result;
use crate::transform::TransformBuilder;

/// Extra rewrites that run after the built-in families.
#[derive(Debug, Clone, Default)]
pub struct CustomRules {
    specs: Vec<TransformSpec>,
}

impl CustomRules {
    pub fn new(specs: Vec<TransformSpec>) -> Self {
        Self { specs }
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl RuleSet for CustomRules {
    fn name(&self) -> &str {
        "custom"
    }

    fn description(&self) -> &str {
        "User-defined rewrites from the configuration file"
    }

    fn transform(&self) -> Result<TransformBuilder> {
        let mut builder = TransformBuilder::new();
        for spec in &self.specs {
            builder = match spec {
                TransformSpec::ReplaceLiteral { from, to } => builder.replace_literal(from, to),
                TransformSpec::ReplacePattern {
                    pattern,
                    replacement,
                } => builder.replace_pattern(pattern, replacement)?,
            };
        }
        Ok(builder)
    }
}
