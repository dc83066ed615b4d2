//! Script (JavaScript) diagnostics
//!
//! A best-effort syntax probe plus line heuristics and a whole-buffer
//! unused-identifier approximation.

pub mod engine;
pub mod probe;

pub use engine::validate_script;
pub use probe::{ProbeError, probe_syntax};
