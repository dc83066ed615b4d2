//! Best-effort syntax probe
//!
//! A minimal character scanner that surfaces gross syntax breakage in a
//! script buffer: mismatched brackets, unterminated strings, templates,
//! and block comments. It is not a parser and is intentionally
//! non-exhaustive — regex literals, semicolon insertion, and template
//! expression nesting are out of scope. The first problem found wins.
//!
//! Every rendered message names a line as `line N` so the caller can
//! place the resulting diagnostic.

/// A gross syntax problem found by the probe.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeError {
    pub message: String,
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

fn err(message: String) -> Result<(), ProbeError> {
    Err(ProbeError { message })
}

/// Scan a script buffer for gross syntax breakage.
pub fn probe_syntax(source: &str) -> Result<(), ProbeError> {
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut line = 1;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,

            '/' => match chars.peek() {
                Some('/') => {
                    // Line comment: skip to end of line
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let start_line = line;
                    let mut closed = false;
                    let mut prev = '\0';
                    for ch in chars.by_ref() {
                        if ch == '\n' {
                            line += 1;
                        }
                        if prev == '*' && ch == '/' {
                            closed = true;
                            break;
                        }
                        prev = ch;
                    }
                    if !closed {
                        return err(format!(
                            "Unterminated block comment starting on line {start_line}"
                        ));
                    }
                }
                _ => {}
            },

            '\'' | '"' => {
                let quote = c;
                let start_line = line;
                loop {
                    match chars.next() {
                        None => {
                            return err(format!(
                                "Unterminated string literal on line {start_line}"
                            ));
                        }
                        Some('\\') => {
                            // Escaped character, including line continuations
                            if let Some('\n') = chars.next() {
                                line += 1;
                            }
                        }
                        Some('\n') => {
                            return err(format!(
                                "Unterminated string literal on line {start_line}"
                            ));
                        }
                        Some(ch) if ch == quote => break,
                        Some(_) => {}
                    }
                }
            }

            '`' => {
                let start_line = line;
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    match ch {
                        '\n' => line += 1,
                        '\\' => {
                            if let Some('\n') = chars.next() {
                                line += 1;
                            }
                        }
                        '`' => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return err(format!(
                        "Unterminated template literal starting on line {start_line}"
                    ));
                }
            }

            '(' | '[' | '{' => stack.push((c, line)),

            ')' | ']' | '}' => {
                let expected = opening_for(c);
                match stack.pop() {
                    None => return err(format!("Unexpected '{c}' on line {line}")),
                    Some((open, open_line)) if open != expected => {
                        return err(format!(
                            "Mismatched '{c}' on line {line}, expected match for '{open}' opened on line {open_line}"
                        ));
                    }
                    Some(_) => {}
                }
            }

            _ => {}
        }
    }

    if let Some((open, open_line)) = stack.pop() {
        return err(format!(
            "Missing closing bracket for '{open}' opened on line {open_line}"
        ));
    }

    Ok(())
}

fn opening_for(close: char) -> char {
    match close {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}
