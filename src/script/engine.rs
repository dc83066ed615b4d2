//! Script rule engine
//!
//! Three passes over the same immutable buffer, appending to one output
//! list: a best-effort syntax probe, a battery of per-line heuristics,
//! and a whole-buffer unused-identifier approximation. Several of the
//! heuristics are known-imprecise (global-variable detection, bare
//! assignments, usage counting inside strings and comments); their
//! behavior is contractual and is kept as-is.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::core::{Diagnostic, DiagnosticList};
use crate::script::probe::probe_syntax;

static DECLARATION_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(let|const|var)\s+[a-zA-Z_$][a-zA-Z0-9_$]*\s*=").expect("valid regex")
});

static BARE_ASSIGNMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z_$][a-zA-Z0-9_$]*)\s*=").expect("valid regex"));

static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(let|const|var)\s+([a-zA-Z_$][a-zA-Z0-9_$]*)").expect("valid regex")
});

static LINE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"line (\d+)").expect("valid regex"));

/// Validate a script buffer.
pub fn validate_script(code: &str) -> Vec<Diagnostic> {
    let mut result = DiagnosticList::new();
    let lines: Vec<&str> = code.lines().collect();

    // Pass 1: syntax probe, one diagnostic at most
    if let Err(error) = probe_syntax(code) {
        let message = error.to_string();
        let line = LINE_NUMBER_RE
            .captures(&message)
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(1);
        result.error(line, 1, message, "js-syntax");
    }

    // Whole-buffer facts the line heuristics key off
    let has_function = code.contains("function");
    let has_block = code.contains('{');
    let has_error_handling = code.contains(".catch(") || code.contains("try");
    let get_element_count = lines
        .iter()
        .filter(|l| l.contains("document.getElementById"))
        .count();

    // Pass 2: per-line heuristics, all that match are emitted
    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with("/*") {
            continue;
        }

        if trimmed.contains("var ") {
            let column = line.find("var ").unwrap_or(0) + 1;
            result.warning(
                line_no,
                column,
                "Use \"let\" or \"const\" instead of \"var\" for better scoping".to_string(),
                "js-best-practices",
            );
        }

        if trimmed.contains("==") && !trimmed.contains("===") && !trimmed.contains("!==") {
            if let Some(eq_idx) = line.find("==") {
                let bytes = line.as_bytes();
                let not_negation = eq_idx == 0 || bytes[eq_idx - 1] != b'!';
                let not_strict = eq_idx + 2 >= bytes.len() || bytes[eq_idx + 2] != b'=';
                if not_negation && not_strict {
                    result.warning(
                        line_no,
                        eq_idx + 1,
                        "Use \"===\" for strict equality comparison".to_string(),
                        "js-best-practices",
                    );
                }
            }
        }

        if trimmed.contains("console.log") {
            let column = line.find("console.log").unwrap_or(0) + 1;
            result.info(
                line_no,
                column,
                "Remove console.log statements before production".to_string(),
                "js-production",
            );
        }

        if trimmed.contains("eval(") {
            let column = line.find("eval(").unwrap_or(0) + 1;
            result.error(
                line_no,
                column,
                "Avoid using eval() - it poses security risks".to_string(),
                "js-security",
            );
        }

        // Coarse whole-program scope proxy: a top-level declaration only
        // counts as "global" when the buffer has no function and no block
        if DECLARATION_START_RE.is_match(trimmed) && !has_function && !has_block {
            result.warning(
                line_no,
                1,
                "Avoid global variables - use modules or IIFE".to_string(),
                "js-best-practices",
            );
        }

        if !trimmed.ends_with(';')
            && !trimmed.ends_with('{')
            && !trimmed.ends_with('}')
            && !trimmed.starts_with("if")
            && !trimmed.starts_with("for")
            && !trimmed.starts_with("while")
            && !trimmed.starts_with("function")
            && !trimmed.starts_with("class")
            && !trimmed.contains("//")
            && trimmed.contains('=')
        {
            result.warning(
                line_no,
                line.len(),
                "Missing semicolon".to_string(),
                "js-syntax",
            );
        }

        if trimmed.starts_with("function ") {
            result.info(
                line_no,
                1,
                "Consider using arrow functions or const function expressions".to_string(),
                "js-modern",
            );
        }

        if trimmed.contains('$') || trimmed.contains("jQuery") {
            let column = line
                .find('$')
                .or_else(|| line.find("jQuery"))
                .map(|idx| idx + 1)
                .unwrap_or(1);
            result.info(
                line_no,
                column,
                "Consider using modern DOM APIs instead of jQuery".to_string(),
                "js-modern",
            );
        }

        if trimmed.contains(".innerHTML =") {
            let column = line.find(".innerHTML").unwrap_or(0) + 1;
            result.warning(
                line_no,
                column,
                "Consider using textContent or modern DOM methods for security".to_string(),
                "js-security",
            );
        }

        if (trimmed.contains("fetch(") || trimmed.contains(".then(")) && !has_error_handling {
            result.warning(
                line_no,
                1,
                "Add error handling for async operations".to_string(),
                "js-error-handling",
            );
        }

        if trimmed.contains("document.getElementById") && get_element_count > 3 {
            let column = line.find("document.getElementById").unwrap_or(0) + 1;
            result.info(
                line_no,
                column,
                "Consider caching DOM queries for better performance".to_string(),
                "js-performance",
            );
        }

        if trimmed.contains(".onclick =") || trimmed.contains("onclick=") {
            result.warning(
                line_no,
                1,
                "Use addEventListener instead of onclick for better accessibility".to_string(),
                "js-accessibility",
            );
        }

        if let Some(caps) = BARE_ASSIGNMENT_RE.captures(trimmed) {
            let name = &caps[1];
            if !trimmed.contains("let ")
                && !trimmed.contains("const ")
                && !trimmed.contains("var ")
                && !trimmed.contains('.')
            {
                result.error(
                    line_no,
                    1,
                    format!("Variable \"{name}\" should be declared with let, const, or var"),
                    "js-variables",
                );
            }
        }
    }

    // Pass 3: unused-identifier approximation. Word-boundary counting
    // over the raw text, strings and comments included.
    for caps in DECLARATION_RE.captures_iter(code) {
        let declaration = &caps[0];
        let name = &caps[2];

        let Ok(usage_re) = Regex::new(&format!(r"\b{}\b", regex::escape(name))) else {
            continue;
        };
        let usage_count = usage_re.find_iter(code).count();

        if usage_count == 1 {
            if let Some(line_idx) = lines.iter().position(|l| l.contains(declaration)) {
                result.warning(
                    line_idx + 1,
                    1,
                    format!("Unused variable: {name}"),
                    "js-unused",
                );
            }
        }
    }

    debug!("script validation produced {} diagnostics", result.len());
    result.into_vec()
}
