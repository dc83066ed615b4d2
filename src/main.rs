use anyhow::Result;
use log::{LevelFilter, warn};
use serde::Serialize;

use weblint::config::{Config, OutputFormat};
use weblint::{Diagnostic, DiagnosticsEngine, Severity, compose};

/// A diagnostic tagged with the file it came from, for JSON output.
#[derive(Serialize)]
struct FileDiagnostic<'a> {
    file: &'a str,
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
}

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    let engine = DiagnosticsEngine::new();
    let snapshot = config.load_snapshot()?;

    // Cross-cutting template diagnostics, computed once and filtered per
    // buffer language below
    let template_diagnostics = match &config.template {
        Some(id) => engine.validate_template(id, &snapshot),
        None => Vec::new(),
    };

    let buffers = config.buffers();
    if buffers.is_empty() {
        warn!("no input buffers given; pass --html, --css, or --js");
    }

    let mut report: Vec<(String, Vec<Diagnostic>)> = Vec::new();
    for (language, path) in buffers {
        let own = engine.validate(language, snapshot.buffer(language));
        let merged = compose::merge(language, own, &template_diagnostics);
        report.push((path.display().to_string(), merged));
    }

    let had_errors = report
        .iter()
        .flat_map(|(_, diags)| diags)
        .any(|d| d.severity == Severity::Error);

    match config.output {
        OutputFormat::Text => {
            for (file, diagnostics) in &report {
                for d in diagnostics {
                    println!(
                        "{file}:{}:{}: {}: {} [{}]",
                        d.line, d.column, d.severity, d.message, d.source
                    );
                }
            }
        }
        OutputFormat::Json => {
            let flat: Vec<FileDiagnostic> = report
                .iter()
                .flat_map(|(file, diagnostics)| {
                    diagnostics.iter().map(move |diagnostic| FileDiagnostic {
                        file: file.as_str(),
                        diagnostic,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&flat)?);
        }
    }

    if had_errors {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter: LevelFilter = level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::from_default_env()
        .filter_level(filter)
        .init();
}
