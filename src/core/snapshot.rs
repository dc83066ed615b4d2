//! Language tags and the three-buffer snapshot handed to the template
//! validator.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three source languages the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// HTML buffers
    Markup,
    /// CSS buffers
    Style,
    /// Script buffers
    Script,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Markup => "markup",
            Language::Style => "style",
            Language::Script => "script",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full three-language view of a project, consumed read-only by the
/// template profile validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub html: String,
    pub css: String,
    pub script: String,
}

impl Snapshot {
    pub fn new(html: impl Into<String>, css: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            script: script.into(),
        }
    }

    /// Buffer text for one language tab.
    pub fn buffer(&self, language: Language) -> &str {
        match language {
            Language::Markup => &self.html,
            Language::Style => &self.css,
            Language::Script => &self.script,
        }
    }
}
