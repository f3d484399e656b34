//! Pluglint Library
//!
//! This crate provides the core functionality for linting Neovim/Vim plugin
//! source trees: scanning the tree into classified file records, evaluating
//! structural convention rules over them, and rendering the findings.

pub mod cancel;
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod scanner;

pub use error::PluglintError;
