//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::PluglintError;
use crate::rules::results::Report;

/// Trait for rendering report output
pub trait ReportRenderer {
    fn render_report(&self, report: &Report) -> Result<String, PluglintError>;
}
