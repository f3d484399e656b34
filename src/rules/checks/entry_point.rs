//! Entry-point minimality rule
//!
//! Entry-point scripts run at every editor startup, whether or not the
//! plugin is used in the session. They should register commands and
//! mappings and defer the actual module load into a callback.

use anyhow::Result;

use crate::cancel::CancelToken;
use crate::rules::constants::RULE_EAGER_REQUIRE;
use crate::rules::engine::Rule;
use crate::rules::patterns::lua;
use crate::rules::results::{Finding, Severity};
use crate::scanner::{FileSet, Role};

pub struct EntryPointMinimality;

#[async_trait::async_trait]
impl Rule for EntryPointMinimality {
    fn name(&self) -> &'static str {
        "lazy"
    }

    fn summary(&self) -> &'static str {
        "entry-point files must defer module loading into callbacks"
    }

    async fn evaluate(&self, files: &FileSet, cancel: &CancelToken) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for record in files.with_role(Role::EntryPoint) {
            if cancel.is_cancelled() {
                break;
            }

            // `require` is a Lua concept; Vimscript entry files have no
            // equivalent eager module load to flag
            if !record.path.ends_with(".lua") {
                continue;
            }

            let Some(content) = record.content() else {
                continue;
            };

            // One finding per file, at the first offending line
            if let Some(line) = lua::first_top_level_require(content) {
                findings.push(
                    Finding::new(
                        RULE_EAGER_REQUIRE,
                        Severity::Warn,
                        "module required at load time; defer the require into the command or autocmd callback",
                    )
                    .with_path(record.path.as_str())
                    .with_line(line),
                );
            }
        }

        Ok(findings)
    }
}
