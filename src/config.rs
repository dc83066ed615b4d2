//! Configuration management for the weblint CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Loading the three-language snapshot from disk

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::core::{Language, Snapshot};

/// Command-line arguments for weblint
#[derive(Debug, Parser)]
#[command(name = "weblint")]
#[command(about = "Heuristic diagnostics for HTML, CSS, and JavaScript buffers")]
#[command(version)]
pub struct Args {
    /// HTML buffer to validate
    #[arg(long, help = "Path to the HTML buffer")]
    pub html: Option<PathBuf>,

    /// CSS buffer to validate
    #[arg(long, help = "Path to the CSS buffer")]
    pub css: Option<PathBuf>,

    /// Script buffer to validate
    #[arg(long, help = "Path to the script buffer")]
    pub js: Option<PathBuf>,

    /// Template profile to layer over all three buffers
    #[arg(
        long,
        help = "Template profile id (e.g., 'flexbox-layout', 'interactive-form', 'blank')"
    )]
    pub template: Option<String>,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Log level for the linter
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How diagnostics are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file:line:col: severity: message [source]` lines
    Text,
    /// One JSON array of diagnostics
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub html: Option<PathBuf>,
    pub css: Option<PathBuf>,
    pub js: Option<PathBuf>,
    pub template: Option<String>,
    pub output: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from the process command line
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            html: args.html,
            css: args.css,
            js: args.js,
            template: args.template,
            output: args.output,
            log_level: args.log_level,
        })
    }

    /// The buffers that were actually provided, with their languages,
    /// in tab order.
    pub fn buffers(&self) -> Vec<(Language, &Path)> {
        let mut buffers = Vec::new();
        if let Some(path) = &self.html {
            buffers.push((Language::Markup, path.as_path()));
        }
        if let Some(path) = &self.css {
            buffers.push((Language::Style, path.as_path()));
        }
        if let Some(path) = &self.js {
            buffers.push((Language::Script, path.as_path()));
        }
        buffers
    }

    /// Read the provided files into a snapshot. Missing arguments load
    /// as empty buffers; unreadable files are errors.
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            html: read_buffer(self.html.as_deref())?,
            css: read_buffer(self.css.as_deref())?,
            script: read_buffer(self.js.as_deref())?,
        })
    }
}

fn read_buffer(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => Ok(String::new()),
    }
}
