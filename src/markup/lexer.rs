//! HTML tag lexer
//!
//! Fast, simple extraction of tag tokens from a line of markup.
//! Focus: find every `<name ...>` / `</name>` occurrence with its byte
//! position, with minimal allocations. This is a line scanner, not an
//! HTML parser: it does not understand comments, CDATA, or quoted `>`
//! characters inside attribute values.

/// One tag occurrence on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct TagToken<'a> {
    /// Tag name, lowercased
    pub name: String,
    /// Byte offset of the `<` within the line
    pub start: usize,
    /// True for `</name ...>` tokens
    pub closing: bool,
    /// Full token text, `<` through `>` inclusive
    pub raw: &'a str,
}

impl TagToken<'_> {
    /// True for tokens written with a `/>` terminator.
    pub fn self_terminated(&self) -> bool {
        self.raw.ends_with("/>")
    }
}

/// Scan one line for tag tokens.
///
/// A token starts at `<`, takes an optional `/`, then an ASCII-alphabetic
/// name character followed by alphanumerics, then runs to the first `>`.
/// A `<` with no matching `>` on the line yields no token.
pub fn scan_tags(line: &str) -> Vec<TagToken<'_>> {
    let mut tokens = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        let start = i;
        let mut pos = i + 1;

        let closing = pos < bytes.len() && bytes[pos] == b'/';
        if closing {
            pos += 1;
        }

        // Name must start with a letter
        if pos >= bytes.len() || !bytes[pos].is_ascii_alphabetic() {
            i = start + 1;
            continue;
        }

        let name_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
            pos += 1;
        }
        let name_end = pos;

        // Everything up to the first `>` belongs to the token
        while pos < bytes.len() && bytes[pos] != b'>' {
            pos += 1;
        }
        if pos >= bytes.len() {
            // No terminator on this line
            i = start + 1;
            continue;
        }
        pos += 1; // include the `>`

        tokens.push(TagToken {
            name: line[name_start..name_end].to_lowercase(),
            start,
            closing,
            raw: &line[start..pos],
        });
        i = pos;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_open_tag() {
        let tokens = scan_tags("<div class=\"box\">");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "div");
        assert_eq!(tokens[0].start, 0);
        assert!(!tokens[0].closing);
        assert_eq!(tokens[0].raw, "<div class=\"box\">");
    }

    #[test]
    fn test_scan_close_tag() {
        let tokens = scan_tags("  </div>");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "div");
        assert_eq!(tokens[0].start, 2);
        assert!(tokens[0].closing);
    }

    #[test]
    fn test_scan_multiple_tags() {
        let tokens = scan_tags("<p><em>hi</em></p>");

        let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["p", "em", "em", "p"]);
        assert!(tokens[2].closing);
    }

    #[test]
    fn test_scan_self_terminated() {
        let tokens = scan_tags("<img src=\"a.png\" alt=\"a\"/>");

        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].self_terminated());
    }

    #[test]
    fn test_scan_lowercases_name() {
        let tokens = scan_tags("<DIV><Span></Span></DIV>");

        assert_eq!(tokens[0].name, "div");
        assert_eq!(tokens[1].name, "span");
    }

    #[test]
    fn test_doctype_is_not_a_tag() {
        let tokens = scan_tags("<!DOCTYPE html>");
        assert_eq!(tokens.len(), 0);
    }

    #[test]
    fn test_unterminated_tag_yields_nothing() {
        let tokens = scan_tags("<div class=");
        assert_eq!(tokens.len(), 0);
    }

    #[test]
    fn test_stray_angle_then_tag() {
        let tokens = scan_tags("<<a>");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "a");
        assert_eq!(tokens[0].start, 1);
    }

    #[test]
    fn test_token_runs_to_first_gt() {
        // An inner `<` before the terminator is part of the same token
        let tokens = scan_tags("<a <b>");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "a");
        assert_eq!(tokens[0].raw, "<a <b>");
    }
}
