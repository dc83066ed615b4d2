//! Style (CSS) diagnostics.

pub mod engine;

pub use engine::validate_style;
