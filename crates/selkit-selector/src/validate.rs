//! Validation of selector text typed by the user.
//!
//! Validation normalizes before it classifies: the returned text is what the
//! caller must use, not the raw input.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::{Tag, is_known_attribute};

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("selector validation pattern must compile")
}

/// `[name` or `[name]` with a plain lowercase name.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\[[a-z-]*\]?$"));
/// `[data-*` or `[data-*]`.
static DATA_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^\[data-[_a-zA-Z][_a-zA-Z0-9-]*\]?$"));
/// Custom element name; the caller also requires a hyphen.
static CUSTOM_TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-z-]*[a-z]$"));
/// HTML element name (`h1` to `h6` carry a digit).
static TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-z][a-z0-9]*$"));
static CLASS: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\.-?[_a-z][_a-z0-9-]*$"));
static ID: LazyLock<Regex> = LazyLock::new(|| pattern(r"^#-?[_a-z][_a-z0-9-]*$"));

/// Characters that would form a combinator; those are picked from a separate
/// control, never typed inline.
const fn is_combinator_char(c: char) -> bool {
    matches!(c, ' ' | '>' | '+' | '~')
}

/// Normalize and classify typed selector text.
///
/// Returns the normalized selector text when it is acceptable, `None`
/// otherwise:
/// 1. empty text and `*` are returned unchanged
/// 2. the text is lowercased and combinator characters become `-`
/// 3. text starting with a digit or `-` is rejected
/// 4. a known attribute (`[href`) or a `data-*` attribute is accepted and
///    its closing bracket added if missing
/// 5. a hyphenated bare word is a custom element name
/// 6. a bare word from the tag catalog is a type selector
/// 7. `.name` is a class, `#name` an ID
///
/// Accepted text validates to itself again.
#[must_use]
pub fn validate(input: &str) -> Option<String> {
    if input.is_empty() || input == "*" {
        return Some(input.to_string());
    }

    let normalized: String = input
        .to_lowercase()
        .chars()
        .map(|c| if is_combinator_char(c) { '-' } else { c })
        .collect();

    if normalized.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return None;
    }

    let is_attribute = ATTRIBUTE.is_match(&normalized) && {
        let name = normalized.trim_start_matches('[').trim_end_matches(']');
        is_known_attribute(name)
    };
    if is_attribute || DATA_ATTRIBUTE.is_match(&normalized) {
        return Some(close_bracket(normalized));
    }

    let accepted = (normalized.contains('-') && CUSTOM_TAG.is_match(&normalized))
        || (TAG.is_match(&normalized) && Tag::from_name(&normalized).is_some())
        || CLASS.is_match(&normalized)
        || ID.is_match(&normalized);
    accepted.then_some(normalized)
}

fn close_bracket(mut attribute: String) -> String {
    if !attribute.ends_with(']') {
        attribute.push(']');
    }
    attribute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinators_become_hyphens() {
        assert_eq!(validate("My Card").as_deref(), Some("my-card"));
        assert_eq!(validate(".a>b").as_deref(), Some(".a-b"));
    }

    #[test]
    fn known_attribute_auto_closes() {
        assert_eq!(validate("[href").as_deref(), Some("[href]"));
        assert_eq!(validate("[aria-label]").as_deref(), Some("[aria-label]"));
        assert_eq!(validate("[made-up"), None);
    }

    #[test]
    fn headings_are_tags() {
        assert_eq!(validate("h2").as_deref(), Some("h2"));
        assert_eq!(validate("spam"), None);
    }
}
