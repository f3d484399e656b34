//! Missing health-check rule

use anyhow::Result;

use crate::cancel::CancelToken;
use crate::rules::constants::RULE_MISSING_HEALTH;
use crate::rules::engine::Rule;
use crate::rules::results::{Finding, Severity};
use crate::scanner::{FileSet, Role};

pub struct MissingHealthCheck;

#[async_trait::async_trait]
impl Rule for MissingHealthCheck {
    fn name(&self) -> &'static str {
        "health"
    }

    fn summary(&self) -> &'static str {
        "a plugin should ship a health-check module (lua/<plugin>/health.lua)"
    }

    async fn evaluate(&self, files: &FileSet, _cancel: &CancelToken) -> Result<Vec<Finding>> {
        if files.has_role(Role::HealthModule) {
            return Ok(Vec::new());
        }

        // Project-level finding: no path, exactly one regardless of tree size
        Ok(vec![Finding::new(
            RULE_MISSING_HEALTH,
            Severity::Warn,
            "no health-check module found; add lua/<plugin>/health.lua with a check() function",
        )])
    }
}
