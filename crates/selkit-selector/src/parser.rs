//! Low-level scanning helpers shared by the selector parsers.
//!
//! Selectors are scanned with a `Peekable<Chars>` cursor; the helpers here
//! consume identifiers, quoted strings and balanced parentheses, and locate
//! structural characters that sit outside brackets, parentheses and quotes.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Result, SelectorError};

pub(crate) type Cursor<'a> = Peekable<Chars<'a>>;

/// Check if a character can start an identifier.
/// [§ 4.3.10 ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
pub(crate) const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// Check if a character can continue an identifier.
/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
pub(crate) const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

pub(crate) fn skip_whitespace(chars: &mut Cursor<'_>) {
    while chars.peek().is_some_and(char::is_ascii_whitespace) {
        let _ = chars.next();
    }
}

/// Consume an identifier.
///
/// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
/// Escapes are kept verbatim (`sm\:flex` stays `sm\:flex`) so the identifier
/// renders back exactly as written.
pub(crate) fn take_ident(chars: &mut Cursor<'_>) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if c == '\\' {
            let _ = chars.next();
            ident.push(c);
            if let Some(escaped) = chars.next() {
                ident.push(escaped);
            }
        } else if is_ident_char(c) {
            ident.push(c);
            let _ = chars.next();
        } else {
            break;
        }
    }
    ident
}

/// Parse an attribute value inside `[attr=value]`.
/// Handles both quoted (`"val"`, `'val'`) and unquoted ident values.
/// Returns `None` for an unterminated string or a missing value.
pub(crate) fn parse_attr_value(chars: &mut Cursor<'_>) -> Option<String> {
    skip_whitespace(chars);

    match chars.peek() {
        Some(&q @ ('"' | '\'')) => {
            let _ = chars.next();
            let mut val = String::new();
            while let Some(ch) = chars.next() {
                if ch == '\\' {
                    val.push(chars.next()?);
                } else if ch == q {
                    return Some(val);
                } else {
                    val.push(ch);
                }
            }
            None
        }
        Some(_) => {
            let mut val = String::new();
            while let Some(&ch) = chars.peek() {
                if !(is_ident_char(ch) || ch == '.') {
                    break;
                }
                val.push(ch);
                let _ = chars.next();
            }
            if val.is_empty() { None } else { Some(val) }
        }
        None => None,
    }
}

/// Consume the contents of a parenthesized group whose `(` was already
/// consumed, up to and including the matching `)`.
pub(crate) fn take_parenthesized(chars: &mut Cursor<'_>, source: &str) -> Result<String> {
    let mut depth = 1u32;
    let mut inner = String::new();
    for ch in chars.by_ref() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(inner);
                }
            }
            _ => {}
        }
        inner.push(ch);
    }
    Err(SelectorError::UnbalancedParentheses(source.to_string()))
}

/// A structural character found at nesting depth zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TopLevel {
    /// Byte offset of the character.
    pub index: usize,
}

/// Find the first character matching `predicate` that is not inside
/// brackets, parentheses or quotes, and not escaped.
pub(crate) fn find_top_level(
    text: &str,
    mut predicate: impl FnMut(usize, char) -> bool,
) -> Option<TopLevel> {
    let mut depth = 0u32;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && predicate(index, ch) => return Some(TopLevel { index }),
            _ => {}
        }
    }
    None
}
