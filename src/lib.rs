//! weblint
//!
//! A heuristic, multi-language static-diagnostics engine for HTML, CSS,
//! and JavaScript source text.
//!
//! This library provides:
//! - Per-language rule engines emitting ordered, severity-tagged findings
//! - Template-profile validation across the full three-language snapshot
//! - Aggregation of language and template diagnostics per editor tab
//! - Static completion vocabularies and a fail-soft formatter seam
//!
//! Everything is line-local and best-effort by design: no AST, no scope
//! resolution, no guarantee of exhaustive syntax validation. The contract
//! is determinism and stable diagnostic shape, not completeness.

pub mod completion;
pub mod compose;
pub mod config;
pub mod core;
pub mod format;
pub mod markup;
pub mod script;
pub mod style;
pub mod template;

// Re-exports for clean public API
pub use completion::{CompletionCategory, CompletionItem, suggest};
pub use config::Config;
pub use core::{Diagnostic, DiagnosticList, Language, Severity, Snapshot};
pub use format::{Formatter, IdentityFormatter, format_code};
pub use markup::validate_markup;
pub use script::validate_script;
pub use style::validate_style;
pub use template::validate_template;

/// The stateless diagnostics engine.
///
/// Carries no state between calls: every validation re-derives its full
/// diagnostic list from scratch, so a single instance is freely shareable
/// across callers. Construction is free; so is copying.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagnosticsEngine;

impl DiagnosticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate one buffer with the engine matching its language.
    /// Total: never fails, never panics on any input text.
    pub fn validate(&self, language: Language, source: &str) -> Vec<Diagnostic> {
        match language {
            Language::Markup => markup::validate_markup(source),
            Language::Style => style::validate_style(source),
            Language::Script => script::validate_script(source),
        }
    }

    /// Run the template profile selected by `template_id` over the full
    /// three-language snapshot.
    pub fn validate_template(&self, template_id: &str, snapshot: &Snapshot) -> Vec<Diagnostic> {
        template::validate_template(template_id, snapshot)
    }
}
