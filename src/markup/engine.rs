//! Markup rule engine
//!
//! Whole-buffer structure checks, per-line attribute heuristics, and a
//! tag-stack balance matcher. Pure function of the input text; never
//! fails.

use log::debug;

use crate::core::{Diagnostic, DiagnosticList};
use crate::markup::lexer::scan_tags;

/// Elements that never take a closing tag.
const SELF_CLOSING_TAGS: &[&str] = &[
    "img", "br", "hr", "input", "meta", "link", "area", "base", "col", "embed", "source", "track",
    "wbr",
];

/// Elements flagged as deprecated in favor of modern alternatives.
const DEPRECATED_TAGS: &[&str] = &["center", "font", "marquee", "blink", "big", "small", "tt"];

/// Attributes an opening tag must carry, per element.
const REQUIRED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("img", &["src", "alt"]),
    ("a", &["href"]),
    ("input", &["type"]),
    ("label", &["for"]),
    ("form", &["action"]),
];

/// One open element tracked during a single validation run.
#[derive(Debug)]
struct TagStackEntry {
    name: String,
    line: usize,
}

/// Validate an HTML buffer.
///
/// Diagnostics come out in rule-evaluation order: whole-buffer structure
/// checks first, then per-line checks top to bottom, then one unclosed-tag
/// error per element still open at end of input (innermost first).
pub fn validate_markup(html: &str) -> Vec<Diagnostic> {
    let mut result = DiagnosticList::new();

    check_document_structure(html, &mut result);

    let mut tag_stack: Vec<TagStackEntry> = Vec::new();

    for (idx, line) in html.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();

        if trimmed.contains("style=") {
            let column = line.find("style=").unwrap_or(0) + 1;
            result.info(
                line_no,
                column,
                "Consider using CSS classes instead of inline styles".to_string(),
                "html-best-practices",
            );
        }

        if trimmed.contains("align=") || trimmed.contains("bgcolor=") || trimmed.contains("border=")
        {
            result.warning(
                line_no,
                1,
                "Deprecated HTML attribute detected - use CSS instead".to_string(),
                "html-deprecated",
            );
        }

        for tag in scan_tags(line) {
            let column = tag.start + 1;

            if DEPRECATED_TAGS.contains(&tag.name.as_str()) {
                result.warning(
                    line_no,
                    column,
                    format!(
                        "Deprecated HTML tag <{}> - consider modern alternatives",
                        tag.name
                    ),
                    "html-deprecated",
                );
            }

            if !tag.closing {
                if let Some((_, required)) = REQUIRED_ATTRIBUTES
                    .iter()
                    .find(|(name, _)| *name == tag.name)
                {
                    for attr in *required {
                        if !tag.raw.contains(&format!("{attr}=")) {
                            result.error(
                                line_no,
                                column,
                                format!(
                                    "Missing required attribute '{}' for <{}> tag",
                                    attr, tag.name
                                ),
                                "html-accessibility",
                            );
                        }
                    }
                }
            }

            if tag.closing {
                // A mismatched close leaves the stack popped
                let matched = tag_stack
                    .pop()
                    .is_some_and(|open| open.name == tag.name);
                if !matched {
                    result.error(
                        line_no,
                        column,
                        format!("Unexpected closing tag </{}>", tag.name),
                        "html-validator",
                    );
                }
            } else if !SELF_CLOSING_TAGS.contains(&tag.name.as_str()) && !tag.self_terminated() {
                tag_stack.push(TagStackEntry {
                    name: tag.name,
                    line: line_no,
                });
            }
        }

        if trimmed.contains("<img") && !trimmed.contains("alt=") {
            let column = line.find("<img").unwrap_or(0) + 1;
            result.warning(
                line_no,
                column,
                "Image missing alt attribute for accessibility".to_string(),
                "html-accessibility",
            );
        }

        if trimmed.contains("<a") && !trimmed.contains("href=") {
            let column = line.find("<a").unwrap_or(0) + 1;
            result.warning(
                line_no,
                column,
                "Link missing href attribute".to_string(),
                "html-accessibility",
            );
        }
    }

    // Report unclosed tags innermost-first
    while let Some(open) = tag_stack.pop() {
        result.error(
            open.line,
            1,
            format!("Unclosed tag <{}>", open.name),
            "html-validator",
        );
    }

    debug!("markup validation produced {} diagnostics", result.len());
    result.into_vec()
}

fn check_document_structure(html: &str, result: &mut DiagnosticList) {
    if !html.contains("<!DOCTYPE html>") {
        result.warning(
            1,
            1,
            "Missing DOCTYPE declaration - add <!DOCTYPE html>".to_string(),
            "html-validator",
        );
    }

    if !html.contains("<html") {
        result.error(1, 1, "Missing <html> element".to_string(), "html-structure");
    }
    if !html.contains("<head") {
        result.error(1, 1, "Missing <head> element".to_string(), "html-structure");
    }
    if !html.contains("<body") {
        result.error(1, 1, "Missing <body> element".to_string(), "html-structure");
    }

    if !html.contains("name=\"viewport\"") {
        result.info(
            1,
            1,
            "Missing viewport meta tag for mobile responsiveness".to_string(),
            "html-best-practices",
        );
    }

    if !html.contains("charset=") {
        result.warning(
            1,
            1,
            "Missing charset declaration".to_string(),
            "html-best-practices",
        );
    }

    if !html.contains("<title>") {
        result.warning(1, 1, "Missing <title> element".to_string(), "html-seo");
    }
}
