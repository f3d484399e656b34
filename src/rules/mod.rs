//! Rules module - convention rules and evaluation engine

pub mod checks;
pub mod constants;
pub mod engine;
pub mod patterns;
pub mod results;

pub use results::{Finding, Report, Severity};
