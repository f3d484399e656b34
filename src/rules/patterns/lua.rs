//! Lua and Vimscript source patterns
//!
//! These helpers are line-oriented heuristics, not a Lua parser: block depth
//! is tracked through keyword tokens and comments are stripped, but string
//! contents are not interpreted.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tokens that open or close a Lua block, plus `require` itself
    static ref LUA_TOKENS: Regex =
        Regex::new(r"\b(function|do|then|elseif|repeat|end|until|require)\b").unwrap();

    /// Calls and commands that register a key mapping
    static ref KEYMAP_REGISTRATION: Regex = Regex::new(
        r"(?x)
        vim\.keymap\.set\s*\(
        | vim\.api\.nvim_set_keymap\s*\(
        | vim\.api\.nvim_buf_set_keymap\s*\(
        | ^\s*[nvxsoilct]?(?:nore)?map!?\s
        ",
    )
    .unwrap();

    /// A literal leader-key sequence
    static ref LEADER_SEQUENCE: Regex = Regex::new(r"(?i)<(?:local)?leader>").unwrap();
}

/// Find the first line (1-based) where a `require(...)` call runs at the top
/// level of the chunk, outside any function or callback body.
///
/// Requires inside `vim.defer_fn(function() ... end)`, autocmd callbacks, or
/// any other function body do not count: the `function` token raises the
/// block depth before `require` is seen.
pub fn first_top_level_require(source: &str) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut in_block_comment = false;
    // elseif's `then` continues an existing block instead of opening one
    let mut pending_elseif = false;

    for (idx, raw_line) in source.lines().enumerate() {
        let line = match strip_comments(raw_line, &mut in_block_comment) {
            Some(code) => code,
            None => continue,
        };

        for token in LUA_TOKENS.find_iter(&line) {
            match token.as_str() {
                "function" | "do" | "repeat" => depth += 1,
                "elseif" => pending_elseif = true,
                "then" => {
                    if pending_elseif {
                        pending_elseif = false;
                    } else {
                        depth += 1;
                    }
                }
                "end" | "until" => depth = (depth - 1).max(0),
                "require" => {
                    if depth == 0 {
                        return Some(idx + 1);
                    }
                }
                _ => {}
            }
        }
    }

    None
}

/// Lines (1-based) that register a key mapping with a literal `<leader>`
/// sequence instead of exposing a `<Plug>` target.
pub fn leader_mapping_lines(source: &str) -> Vec<usize> {
    let mut in_block_comment = false;
    let mut lines = Vec::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let line = match strip_comments(raw_line, &mut in_block_comment) {
            Some(code) => code,
            None => continue,
        };

        if KEYMAP_REGISTRATION.is_match(&line) && LEADER_SEQUENCE.is_match(&line) {
            lines.push(idx + 1);
        }
    }

    lines
}

/// Strip Lua comments from a line, tracking `--[[ ... ]]` blocks across
/// lines. Returns `None` when the whole line is comment.
fn strip_comments(raw_line: &str, in_block_comment: &mut bool) -> Option<String> {
    let mut code = String::new();
    let mut rest = raw_line;

    loop {
        if *in_block_comment {
            match rest.find("]]") {
                Some(pos) => {
                    *in_block_comment = false;
                    rest = &rest[pos + 2..];
                }
                None => break,
            }
        }

        match rest.find("--") {
            Some(pos) => {
                code.push_str(&rest[..pos]);
                let after = &rest[pos + 2..];
                if after.starts_with("[[") {
                    *in_block_comment = true;
                    rest = &after[2..];
                } else {
                    // line comment: the remainder is dead
                    break;
                }
            }
            None => {
                code.push_str(rest);
                break;
            }
        }
    }

    if code.trim().is_empty() {
        None
    } else {
        Some(code)
    }
}
