//! Controller injection for generated mock constructors.

use super::RuleSet;
use crate::error::{MigrateError, Result};
use crate::transform::TransformBuilder;
use regex::Regex;
use std::sync::LazyLock;

/// Identifier of the gomock controller in converted tests.
pub const DEFAULT_CONTROLLER: &str = "ctrl";

/// Mock types rewritten explicitly, before the generic fallback.
pub const DEFAULT_MOCK_TYPES: &[&str] = &[
    "Client",
    "Locker",
    "LegacyBackend",
    "EnhancedBackend",
    "Backend",
    "WorkingDir",
    "WorkingDirLocker",
    "ProjectCommandOutputHandler",
    "Downloader",
    "Storage",
    "RemediationService",
    "StepsRunner",
    "PreWorkflowHooksCommandRunner",
    "PostWorkflowHooksCommandRunner",
    "PreWorkflowHookRunner",
    "WebhooksSender",
    "EventParsing",
    "CommentParsing",
    "CommitStatusUpdater",
    "VCSStatusUpdater",
    "PullCleaner",
    "ProjectCommandRunner",
    "ProjectCommandBuilder",
    "CommandRunner",
    "StaleCommandChecker",
    "ProjectLocker",
];

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

/// Rewrites `NewMockT()` to `NewMockT(ctrl)`.
///
/// Each catalogued type gets its own rule. The fallback then covers any other
/// `NewMock<Name>()` whose name starts with an uppercase letter. Calls that
/// already pass an argument never match.
#[derive(Debug, Clone)]
pub struct ConstructorRules {
    controller: String,
    mock_types: Vec<String>,
    fallback: bool,
}

impl Default for ConstructorRules {
    fn default() -> Self {
        Self {
            controller: DEFAULT_CONTROLLER.to_string(),
            mock_types: DEFAULT_MOCK_TYPES.iter().map(|t| t.to_string()).collect(),
            fallback: true,
        }
    }
}

impl ConstructorRules {
    /// Creates the rules with the default controller and catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the controller identifier threaded into each constructor.
    pub fn controller(mut self, name: impl Into<String>) -> Self {
        self.controller = name.into();
        self
    }

    /// Replaces the catalog of explicitly rewritten mock types.
    pub fn mock_types(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.mock_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Enables or disables the generic `NewMock<Name>()` fallback.
    pub fn fallback(mut self, enabled: bool) -> Self {
        self.fallback = enabled;
        self
    }

    fn validate(&self) -> Result<()> {
        if !IDENTIFIER.is_match(&self.controller) {
            return Err(MigrateError::InvalidConfig(format!(
                "controller '{}' is not a Go identifier",
                self.controller
            )));
        }
        if let Some(bad) = self.mock_types.iter().find(|t| !IDENTIFIER.is_match(t)) {
            return Err(MigrateError::InvalidConfig(format!(
                "mock type '{bad}' is not a Go identifier"
            )));
        }
        Ok(())
    }
}

impl RuleSet for ConstructorRules {
    fn name(&self) -> &str {
        "constructors"
    }

    fn description(&self) -> &str {
        "Pass the gomock controller to NewMock constructors"
    }

    fn transform(&self) -> Result<TransformBuilder> {
        self.validate()?;

        let mut builder = TransformBuilder::new();
        for ty in &self.mock_types {
            builder = builder.replace_pattern(
                &format!(r"\bNewMock{ty}\(\)"),
                &format!("NewMock{ty}({})", self.controller),
            )?;
        }
        if self.fallback {
            builder = builder.replace_pattern(
                r"\bNewMock([A-Z]\w*)\(\)",
                &format!("NewMock${{1}}({})", self.controller),
            )?;
        }
        Ok(builder)
    }
}
