//! Diagnostic model
//!
//! The shared result type and severity vocabulary used by every engine.
//! Diagnostics are immutable once produced; output order is significant
//! and matches the order rules are evaluated.

use serde::Serialize;

/// Severity of a diagnostic, used for display grouping only.
///
/// Engines never branch on severity; it is carried through to consumers
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured finding: location, message, severity, and the
/// namespaced source tag of the rule family that produced it
/// (e.g. "css-syntax", "template-form").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    /// 1-based column number
    pub column: usize,
    pub message: String,
    pub severity: Severity,
    pub source: &'static str,
}

/// Ordered collection of diagnostics produced by one validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticList {
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticList {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn error(&mut self, line: usize, column: usize, message: String, source: &'static str) {
        self.push(line, column, message, Severity::Error, source);
    }

    pub fn warning(&mut self, line: usize, column: usize, message: String, source: &'static str) {
        self.push(line, column, message, Severity::Warning, source);
    }

    pub fn info(&mut self, line: usize, column: usize, message: String, source: &'static str) {
        self.push(line, column, message, Severity::Info, source);
    }

    fn push(
        &mut self,
        line: usize,
        column: usize,
        message: String,
        severity: Severity,
        source: &'static str,
    ) {
        self.diagnostics.push(Diagnostic {
            line,
            column,
            message,
            severity,
            source,
        });
    }

    /// True when no error-severity diagnostic was recorded.
    /// Warnings and infos do not make a run unclean.
    pub fn is_clean(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
