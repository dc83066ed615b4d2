//! Diagnostic aggregation
//!
//! Template diagnostics are cross-cutting; each editor tab only shows the
//! ones relevant to its language. The mapping from active language to
//! allowed source-tag substrings lives here as an explicit table so the
//! filter is testable in one place.

use crate::core::{Diagnostic, Language};

/// Source-tag substrings admitted on every tab.
pub const UNIVERSAL_TEMPLATE_SOURCES: &[&str] = &["template-accessibility", "template-seo"];

/// Source-tag substrings admitted on the given language's tab, in
/// addition to [`UNIVERSAL_TEMPLATE_SOURCES`].
pub fn allowed_template_sources(language: Language) -> &'static [&'static str] {
    match language {
        Language::Markup => &["template"],
        Language::Style => &["flexbox", "css", "responsive"],
        Language::Script => &["form", "validation"],
    }
}

/// Filter template diagnostics down to the ones the given tab shows.
pub fn template_diagnostics_for(
    language: Language,
    template_diagnostics: &[Diagnostic],
) -> Vec<Diagnostic> {
    template_diagnostics
        .iter()
        .filter(|d| is_relevant(language, d.source))
        .cloned()
        .collect()
}

/// Merge one language's own diagnostics with the template diagnostics
/// relevant to that tab. Language diagnostics come first; relative order
/// is preserved on both sides.
pub fn merge(
    language: Language,
    language_diagnostics: Vec<Diagnostic>,
    template_diagnostics: &[Diagnostic],
) -> Vec<Diagnostic> {
    let mut merged = language_diagnostics;
    merged.extend(template_diagnostics_for(language, template_diagnostics));
    merged
}

fn is_relevant(language: Language, source: &str) -> bool {
    allowed_template_sources(language)
        .iter()
        .chain(UNIVERSAL_TEMPLATE_SOURCES)
        .any(|tag| source.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    fn diag(source: &'static str) -> Diagnostic {
        Diagnostic {
            line: 1,
            column: 1,
            message: source.to_string(),
            severity: Severity::Info,
            source,
        }
    }

    #[test]
    fn test_markup_tab_shows_all_template_sources() {
        let diags = [diag("template-flexbox"), diag("template-form")];
        let shown = template_diagnostics_for(Language::Markup, &diags);
        assert_eq!(shown.len(), 2);
    }

    #[test]
    fn test_style_tab_filter() {
        let diags = [
            diag("template-flexbox"),
            diag("template-responsive"),
            diag("template-css"),
            diag("template-form"),
        ];
        let shown = template_diagnostics_for(Language::Style, &diags);

        let sources: Vec<&str> = shown.iter().map(|d| d.source).collect();
        assert_eq!(
            sources,
            vec!["template-flexbox", "template-responsive", "template-css"]
        );
    }

    #[test]
    fn test_script_tab_filter() {
        let diags = [diag("template-form"), diag("template-flexbox")];
        let shown = template_diagnostics_for(Language::Script, &diags);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].source, "template-form");
    }

    #[test]
    fn test_accessibility_and_seo_shown_everywhere() {
        let diags = [diag("template-accessibility"), diag("template-seo")];
        for language in [Language::Markup, Language::Style, Language::Script] {
            let shown = template_diagnostics_for(language, &diags);
            assert_eq!(shown.len(), 2, "{language} tab");
        }
    }

    #[test]
    fn test_merge_keeps_language_diagnostics_first() {
        let own = vec![diag("css-syntax"), diag("css-validator")];
        let template = [diag("template-flexbox")];
        let merged = merge(Language::Style, own, &template);

        let sources: Vec<&str> = merged.iter().map(|d| d.source).collect();
        assert_eq!(sources, vec!["css-syntax", "css-validator", "template-flexbox"]);
    }
}
