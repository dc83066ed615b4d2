//! Template profile rule sets
//!
//! Each profile assesses buffer-wide properties of the three-language
//! snapshot, so every diagnostic is fixed at line 1, column 1.

use crate::core::{Diagnostic, DiagnosticList, Snapshot};

/// Flexbox layout template: the stylesheet should actually use flexbox
/// and respond to viewport changes.
pub fn validate_layout(snapshot: &Snapshot) -> Vec<Diagnostic> {
    let mut result = DiagnosticList::new();
    let css = &snapshot.css;

    if !css.contains("display: flex") && !css.contains("display:flex") {
        result.warning(
            1,
            1,
            "Flexbox template should use \"display: flex\"".to_string(),
            "template-flexbox",
        );
    }

    if !css.contains("@media") {
        result.info(
            1,
            1,
            "Consider adding media queries for responsive design".to_string(),
            "template-responsive",
        );
    }

    let flex_properties = ["justify-content", "align-items", "flex-direction", "flex-wrap"];
    let missing: Vec<&str> = flex_properties
        .iter()
        .filter(|prop| !css.contains(*prop))
        .copied()
        .collect();
    if !missing.is_empty() {
        result.info(
            1,
            1,
            format!("Consider using flexbox properties: {}", missing.join(", ")),
            "template-flexbox",
        );
    }

    result.into_vec()
}

/// Interactive form template: a form element, script-side validation,
/// and accessible inputs.
pub fn validate_form(snapshot: &Snapshot) -> Vec<Diagnostic> {
    let mut result = DiagnosticList::new();

    if !snapshot.html.contains("<form") {
        result.error(
            1,
            1,
            "Form template should contain a <form> element".to_string(),
            "template-form",
        );
    }

    if !snapshot.script.contains("addEventListener") && !snapshot.script.contains("onsubmit") {
        result.warning(
            1,
            1,
            "Form should have JavaScript validation".to_string(),
            "template-form",
        );
    }

    if snapshot.html.contains("<input") && !snapshot.html.contains("<label") {
        result.warning(
            1,
            1,
            "Form inputs should have associated labels for accessibility".to_string(),
            "template-accessibility",
        );
    }

    if snapshot.html.contains("<input") && !snapshot.html.contains("required") {
        result.info(
            1,
            1,
            "Consider adding \"required\" attribute to mandatory form fields".to_string(),
            "template-form",
        );
    }

    result.into_vec()
}

/// Blank template: nudge toward a minimal well-formed starting point.
pub fn validate_blank(snapshot: &Snapshot) -> Vec<Diagnostic> {
    let mut result = DiagnosticList::new();

    if !snapshot.html.contains("<!DOCTYPE html>") {
        result.warning(
            1,
            1,
            "Add HTML5 DOCTYPE declaration".to_string(),
            "template-structure",
        );
    }

    if !snapshot.html.contains("viewport") {
        result.info(
            1,
            1,
            "Add viewport meta tag for mobile responsiveness".to_string(),
            "template-mobile",
        );
    }

    if snapshot.css.trim().len() < 50 {
        result.info(
            1,
            1,
            "Consider adding CSS reset (margin: 0, padding: 0, box-sizing: border-box)"
                .to_string(),
            "template-css",
        );
    }

    result.into_vec()
}

/// Fallback profile for unrecognized template ids.
pub fn validate_generic(snapshot: &Snapshot) -> Vec<Diagnostic> {
    let mut result = DiagnosticList::new();

    if !snapshot.html.contains("<title>") || snapshot.html.contains("<title></title>") {
        result.warning(
            1,
            1,
            "Add a descriptive title for SEO".to_string(),
            "template-seo",
        );
    }

    if snapshot.css.len() > 5000 {
        result.info(
            1,
            1,
            "Large CSS file - consider splitting or minifying".to_string(),
            "template-performance",
        );
    }

    if snapshot.script.len() > 10000 {
        result.info(
            1,
            1,
            "Large JavaScript file - consider modularization".to_string(),
            "template-performance",
        );
    }

    if !snapshot.html.contains("lang=") {
        result.warning(
            1,
            1,
            "Add lang attribute to html element for accessibility".to_string(),
            "template-accessibility",
        );
    }

    result.into_vec()
}
