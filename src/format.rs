//! Formatter collaborator seam
//!
//! The engine does not format code itself; a collaborator does. The one
//! contract callers rely on is fail-soft: on any formatter failure the
//! original text comes back unchanged, never an error.

use anyhow::Result;
use log::warn;

use crate::core::Language;

/// A code formatting collaborator.
pub trait Formatter {
    fn format(&self, source: &str, language: Language) -> Result<String>;
}

/// Default collaborator: returns the input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityFormatter;

impl Formatter for IdentityFormatter {
    fn format(&self, source: &str, _language: Language) -> Result<String> {
        Ok(source.to_string())
    }
}

/// Format `source`, returning the original text untouched if the
/// formatter fails for any reason.
pub fn format_code<F: Formatter>(formatter: &F, source: &str, language: Language) -> String {
    match formatter.format(source, language) {
        Ok(formatted) => formatted,
        Err(error) => {
            warn!("formatting {language} failed, returning original text: {error}");
            source.to_string()
        }
    }
}
