//! Static completion provider
//!
//! Curated per-language vocabularies, not context-sensitive: the
//! `context` argument is accepted for forward compatibility but does not
//! filter results yet.

use serde::Serialize;

use crate::core::Language;

/// Category of a completion item, used by consumers for icon grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionCategory {
    Element,
    Property,
    Keyword,
}

/// One completion suggestion with an insertable snippet (`$0` marks the
/// final cursor position).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    pub label: &'static str,
    pub insert_text: String,
    pub category: CompletionCategory,
    pub documentation: String,
}

const HTML_TAGS: &[&str] = &[
    "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6", "header", "nav", "main", "section",
    "article", "aside", "footer", "ul", "ol", "li", "dl", "dt", "dd", "table", "thead", "tbody",
    "tr", "th", "td", "form", "input", "textarea", "select", "option", "button", "label", "img",
    "figure", "figcaption", "picture", "source", "a", "strong", "em", "mark", "small", "del",
    "ins", "sub", "sup",
];

const CSS_PROPERTIES: &[&str] = &[
    "display", "position", "top", "right", "bottom", "left", "width", "height", "max-width",
    "min-width", "max-height", "min-height", "margin", "padding", "border", "border-radius",
    "background", "background-color", "background-image", "background-size", "color",
    "font-family", "font-size", "font-weight", "line-height", "text-align", "text-decoration",
    "text-transform", "flex", "flex-direction", "justify-content", "align-items", "gap", "grid",
    "grid-template-columns", "grid-template-rows", "grid-gap", "transition", "transform",
    "animation", "opacity", "z-index",
];

const JS_KEYWORDS: &[&str] = &[
    "console.log", "document.getElementById", "document.querySelector",
    "document.querySelectorAll", "addEventListener", "removeEventListener", "setTimeout",
    "setInterval", "clearTimeout", "clearInterval", "fetch", "async", "await", "Promise",
    "Array", "Object", "function", "const", "let", "var", "if", "else", "for", "while", "switch",
];

/// Completion suggestions for one language.
pub fn suggest(language: Language, _context: &str) -> Vec<CompletionItem> {
    match language {
        Language::Markup => HTML_TAGS
            .iter()
            .map(|tag| CompletionItem {
                label: tag,
                insert_text: format!("<{tag}>$0</{tag}>"),
                category: CompletionCategory::Element,
                documentation: format!("HTML {tag} element"),
            })
            .collect(),
        Language::Style => CSS_PROPERTIES
            .iter()
            .map(|property| CompletionItem {
                label: property,
                insert_text: format!("{property}: $0;"),
                category: CompletionCategory::Property,
                documentation: format!("CSS {property} property"),
            })
            .collect(),
        Language::Script => JS_KEYWORDS
            .iter()
            .map(|keyword| CompletionItem {
                label: keyword,
                insert_text: if keyword.contains('(') {
                    format!("{keyword}($0)")
                } else {
                    keyword.to_string()
                },
                category: CompletionCategory::Keyword,
                documentation: format!("JavaScript {keyword}"),
            })
            .collect(),
    }
}
