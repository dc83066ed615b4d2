//! Markup (HTML) diagnostics
//!
//! A line-oriented tag lexer plus the rule engine that drives structure,
//! deprecation, accessibility, and tag-balance checks.

pub mod engine;
pub mod lexer;

pub use engine::validate_markup;
pub use lexer::{TagToken, scan_tags};
