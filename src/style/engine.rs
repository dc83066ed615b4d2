//! Style rule engine
//!
//! A brace-depth state machine driving property/value and selector-level
//! checks. The depth counter is a textual brace count, not a parse tree:
//! braces inside strings or comments skew it. That approximation is part
//! of the contract.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::core::{Diagnostic, DiagnosticList};

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));

static VENDOR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\w+-").expect("valid regex"));

const DEPRECATED_PROPERTIES: &[&str] = &["filter", "-webkit-filter", "-moz-filter"];

const VENDOR_PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-"];

/// Properties exempt from the bare-number unit check, matched by
/// substring (so `flex-grow` is exempt via `flex`).
const UNITLESS_PROPERTIES: &[&str] = &["0", "z-index", "opacity", "font-weight", "line-height", "flex"];

/// Validate a CSS buffer.
pub fn validate_style(css: &str) -> Vec<Diagnostic> {
    let mut result = DiagnosticList::new();
    let lines: Vec<&str> = css.lines().collect();

    let mut brace_depth: i32 = 0;
    let mut in_selector = false;

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        // Skip blank lines and block-comment openers
        if trimmed.is_empty() || trimmed.starts_with("/*") {
            continue;
        }

        // CSS has no line comments
        if trimmed.contains("//") {
            let column = line.find("//").unwrap_or(0) + 1;
            result.error(
                line_no,
                column,
                "Use /* */ for CSS comments, not //".to_string(),
                "css-syntax",
            );
        }

        let open_braces = line.matches('{').count() as i32;
        let close_braces = line.matches('}').count() as i32;
        brace_depth += open_braces - close_braces;

        if brace_depth > 0 && !in_selector {
            if let Some(colon_idx) = trimmed.find(':') {
                check_declaration(line, trimmed, colon_idx, line_no, &lines, &mut result);
            }
        }

        // Top-level selector line
        if trimmed.ends_with('{') && brace_depth == 1 {
            check_selector(trimmed, line_no, &mut result);
        }

        if open_braces > 0 {
            in_selector = false;
        }
        if close_braces > 0 {
            in_selector = true;
        }
    }

    if brace_depth != 0 {
        result.error(
            lines.len().max(1),
            1,
            "Unmatched braces in CSS".to_string(),
            "css-validator",
        );
    }

    if !css.contains("box-sizing") && !css.contains("margin: 0") && !css.contains("padding: 0") {
        result.info(
            1,
            1,
            "Consider adding CSS reset or normalize.css for cross-browser consistency".to_string(),
            "css-best-practices",
        );
    }

    debug!("style validation produced {} diagnostics", result.len());
    result.into_vec()
}

fn check_declaration(
    line: &str,
    trimmed: &str,
    colon_idx: usize,
    line_no: usize,
    lines: &[&str],
    result: &mut DiagnosticList,
) {
    let property = trimmed[..colon_idx].trim();
    let value = trimmed[colon_idx + 1..].replacen(';', "", 1);
    let value = value.trim();

    if !trimmed.ends_with(';') && !trimmed.ends_with('{') && !trimmed.ends_with('}') {
        result.warning(
            line_no,
            line.len(),
            "Missing semicolon".to_string(),
            "css-syntax",
        );
    }

    if DEPRECATED_PROPERTIES.contains(&property) {
        result.warning(
            line_no,
            1,
            format!("Property '{property}' is deprecated"),
            "css-deprecated",
        );
    }

    if VENDOR_PREFIXES.iter().any(|p| property.starts_with(p)) {
        let standard = VENDOR_PREFIX_RE.replace(property, "");
        // Plain substring scan; the prefixed declaration itself can
        // satisfy it, which is the accepted behavior
        let has_standard = lines.iter().any(|l| l.contains(&format!("{standard}:")));
        if !has_standard {
            result.info(
                line_no,
                1,
                format!("Consider adding standard property '{standard}' after vendor prefix"),
                "css-best-practices",
            );
        }
    }

    if value.is_empty() {
        return;
    }

    if (property.contains("color") || property.contains("background"))
        && value.starts_with('#')
        && !HEX_COLOR_RE.is_match(value)
    {
        result.error(
            line_no,
            colon_idx + 2,
            "Invalid hex color format".to_string(),
            "css-validator",
        );
    }

    let is_bare_number = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    if is_bare_number && !UNITLESS_PROPERTIES.iter().any(|p| property.contains(p)) {
        result.warning(
            line_no,
            colon_idx + 2,
            "Numeric value should include a unit (px, em, %, etc.)".to_string(),
            "css-best-practices",
        );
    }

    if property == "position" && value == "absolute" {
        result.info(
            line_no,
            1,
            "Consider using flexbox or grid instead of absolute positioning when possible"
                .to_string(),
            "css-performance",
        );
    }

    if property == "font-size" && value.contains("px") {
        if let Some(size) = leading_integer(value) {
            if size < 12 {
                result.warning(
                    line_no,
                    colon_idx + 2,
                    "Font size below 12px may cause accessibility issues".to_string(),
                    "css-accessibility",
                );
            }
        }
    }
}

fn check_selector(trimmed: &str, line_no: usize, result: &mut DiagnosticList) {
    let selector = trimmed.replacen('{', "", 1);
    let selector = selector.trim();

    let complexity = selector
        .chars()
        .filter(|c| matches!(c, ' ' | '>' | '+' | '~'))
        .count();
    if complexity > 3 {
        result.info(
            line_no,
            1,
            "Overly complex selector - consider simplifying".to_string(),
            "css-best-practices",
        );
    }

    if let Some(star_idx) = selector.find('*') {
        result.info(
            line_no,
            star_idx + 1,
            "Universal selector (*) can impact performance".to_string(),
            "css-performance",
        );
    }

    if let Some(imp_idx) = selector.find("!important") {
        result.warning(
            line_no,
            imp_idx + 1,
            "Avoid using !important - restructure CSS instead".to_string(),
            "css-best-practices",
        );
    }
}

/// Leading integer of a value like "10px" or "-5px", if any.
fn leading_integer(value: &str) -> Option<i64> {
    let rest = value.strip_prefix('-').unwrap_or(value);
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let n: i64 = digits.parse().ok()?;
    Some(if value.starts_with('-') { -n } else { n })
}
