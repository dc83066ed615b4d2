//! Core types shared by every rule engine.

pub mod diagnostics;
pub mod snapshot;

pub use diagnostics::{Diagnostic, DiagnosticList, Severity};
pub use snapshot::{Language, Snapshot};
