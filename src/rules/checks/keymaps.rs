//! Direct leader-keymap rule
//!
//! A plugin should expose `<Plug>(name)` indirection targets and leave the
//! actual key sequence to the user. Hard-coding `<leader>` claims a key the
//! user never agreed to give up.

use anyhow::Result;

use crate::cancel::CancelToken;
use crate::rules::constants::RULE_LEADER_MAPPING;
use crate::rules::engine::Rule;
use crate::rules::patterns::lua;
use crate::rules::results::{Finding, Severity};
use crate::scanner::{FileSet, Role};

/// Roles whose files can register mappings. Help documents mention
/// `<leader>` legitimately and are excluded.
const SCRIPT_ROLES: [Role; 4] = [
    Role::EntryPoint,
    Role::LazyModule,
    Role::FiletypeScript,
    Role::HealthModule,
];

pub struct DirectLeaderKeymap;

#[async_trait::async_trait]
impl Rule for DirectLeaderKeymap {
    fn name(&self) -> &'static str {
        "keymaps"
    }

    fn summary(&self) -> &'static str {
        "key mappings must go through <Plug> targets, not literal <leader> sequences"
    }

    async fn evaluate(&self, files: &FileSet, cancel: &CancelToken) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        for role in SCRIPT_ROLES {
            for record in files.with_role(role) {
                if cancel.is_cancelled() {
                    return Ok(findings);
                }

                let Some(content) = record.content() else {
                    continue;
                };

                for line in lua::leader_mapping_lines(content) {
                    findings.push(
                        Finding::new(
                            RULE_LEADER_MAPPING,
                            Severity::Warn,
                            "mapping uses a literal <leader> sequence; expose a <Plug>(...) target instead",
                        )
                        .with_path(record.path.as_str())
                        .with_line(line),
                    );
                }
            }
        }

        Ok(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::FileRecord;

    fn file_set(files: &[(&str, Role, &str)]) -> FileSet {
        FileSet::from_records(
            "/tmp/demo",
            files
                .iter()
                .map(|(path, role, content)| FileRecord {
                    path: path.to_string(),
                    role: *role,
                    content: Some(content.to_string()),
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_leader_mapping_is_flagged_with_line() {
        let files = file_set(&[(
            "plugin/demo.lua",
            Role::EntryPoint,
            "vim.keymap.set('n', '<Plug>(demo-run)', function() end)\nvim.keymap.set('n', '<leader>dr', '<Plug>(demo-run)')\n",
        )]);

        let findings = DirectLeaderKeymap
            .evaluate(&files, &CancelToken::new())
            .await
            .unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, RULE_LEADER_MAPPING);
        assert_eq!(findings[0].line, Some(2));
    }

    #[tokio::test]
    async fn test_plug_targets_are_clean() {
        let files = file_set(&[(
            "plugin/demo.lua",
            Role::EntryPoint,
            "vim.keymap.set('n', '<Plug>(demo-run)', function() end)\n",
        )]);

        let findings = DirectLeaderKeymap
            .evaluate(&files, &CancelToken::new())
            .await
            .unwrap();
        assert!(findings.is_empty());
    }

    #[tokio::test]
    async fn test_lazy_modules_are_checked_too() {
        let files = file_set(&[(
            "lua/demo/mappings.lua",
            Role::LazyModule,
            "vim.api.nvim_set_keymap('n', '<leader>x', ':Demo<CR>', {})\n",
        )]);

        let findings = DirectLeaderKeymap
            .evaluate(&files, &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path.as_deref(), Some("lua/demo/mappings.lua"));
    }

    #[tokio::test]
    async fn test_help_docs_are_not_checked() {
        let files = file_set(&[(
            "doc/demo.txt",
            Role::HelpDoc,
            "Map your own key: >\n    nmap <leader>dr <Plug>(demo-run)\n<\n",
        )]);

        let findings = DirectLeaderKeymap
            .evaluate(&files, &CancelToken::new())
            .await
            .unwrap();
        assert!(findings.is_empty());
    }

    #[tokio::test]
    async fn test_multiple_offending_lines_yield_multiple_findings() {
        let files = file_set(&[(
            "plugin/demo.vim",
            Role::EntryPoint,
            "nmap <leader>a <Plug>(demo-a)\nnmap <leader>b <Plug>(demo-b)\n",
        )]);

        let findings = DirectLeaderKeymap
            .evaluate(&files, &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(findings.len(), 2);
    }
}
