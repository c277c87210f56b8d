//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."
//!
//! The editor's compound selector also carries at most one trailing
//! pseudo-class.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Tag;
use crate::error::{Result, SelectorError};
use crate::parser::{
    Cursor, find_top_level, is_ident_start_char, parse_attr_value, skip_whitespace, take_ident,
};
use crate::pseudo_class::PseudoClass;
use crate::simple::{
    AttributeMatch, AttributeOperator, AttributeSelector, SimpleSelector, SimpleSelectorKind,
    SimpleSelectorType,
};
use crate::specificity::Specificity;

/// Simple selectors plus an optional pseudo-class, all describing one element.
///
/// Only active selectors are rendered and counted; inactive ones are kept
/// so the editor can switch them back on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompoundSelector {
    /// The simple selectors, in the order they were added or parsed.
    pub selectors: Vec<SimpleSelector>,
    /// Trailing pseudo-class, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pseudo_class: Option<PseudoClass>,
}

impl CompoundSelector {
    /// A compound selector without pseudo-class.
    #[must_use]
    pub const fn new(selectors: Vec<SimpleSelector>) -> Self {
        Self {
            selectors,
            pseudo_class: None,
        }
    }

    /// The same compound with `pseudo_class` attached.
    #[must_use]
    pub fn with_pseudo_class(mut self, pseudo_class: impl Into<PseudoClass>) -> Self {
        self.pseudo_class = Some(pseudo_class.into());
        self
    }

    /// Selectors that are switched on.
    pub fn active_selectors(&self) -> impl Iterator<Item = &SimpleSelector> {
        self.selectors.iter().filter(|selector| selector.active)
    }

    /// Whether nothing would be rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_selectors().next().is_none() && self.pseudo_class.is_none()
    }

    /// The stored selector with the same identity as `selector`.
    #[must_use]
    pub fn find(&self, selector: &SimpleSelector) -> Option<&SimpleSelector> {
        self.selectors
            .iter()
            .find(|candidate| candidate.is_same_selector(selector))
    }

    /// Add `selector`, or replace the entry with the same identity (taking
    /// the new `active` flag).
    #[must_use]
    pub fn with_selector(&self, selector: SimpleSelector) -> Self {
        let mut next = self.clone();
        match next
            .selectors
            .iter_mut()
            .find(|candidate| candidate.is_same_selector(&selector))
        {
            Some(existing) => *existing = selector,
            None => next.selectors.push(selector),
        }
        next
    }

    /// Flip the `active` flag of the entry with the same identity as
    /// `selector`. Unknown selectors leave the compound unchanged.
    #[must_use]
    pub fn toggled(&self, selector: &SimpleSelector) -> Self {
        let mut next = self.clone();
        for candidate in &mut next.selectors {
            if candidate.is_same_selector(selector) {
                candidate.active = !candidate.active;
            }
        }
        next
    }

    /// Drop the entry with the same identity as `selector`.
    #[must_use]
    pub fn without_selector(&self, selector: &SimpleSelector) -> Self {
        Self {
            selectors: self
                .selectors
                .iter()
                .filter(|candidate| !candidate.is_same_selector(selector))
                .cloned()
                .collect(),
            pseudo_class: self.pseudo_class.clone(),
        }
    }

    /// Render as CSS.
    ///
    /// Active selectors are ordered element name, ID, classes, attributes
    /// (stable within a type), followed by the pseudo-class.
    ///
    /// # Errors
    ///
    /// [`SelectorError::UniversalNotAlone`] if an active universal selector
    /// sits alongside any other active selector. Inactive entries are not
    /// rendered and do not count.
    pub fn to_css(&self) -> Result<String> {
        let mut active: Vec<&SimpleSelector> = self.active_selectors().collect();
        let has_universal = active
            .iter()
            .any(|selector| selector.selector_type() == SimpleSelectorType::Universal);
        if has_universal && active.len() > 1 {
            return Err(SelectorError::UniversalNotAlone);
        }

        active.sort_by_key(|selector| selector.selector_type().render_priority());

        let mut css: String = active.iter().map(ToString::to_string).collect();
        if let Some(pseudo_class) = &self.pseudo_class {
            css.push_str(&pseudo_class.to_string());
        }
        Ok(css)
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Sum over the active selectors; a pseudo-class counts as a class.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let selectors: Specificity = self.active_selectors().map(SimpleSelector::specificity).sum();
        if self.pseudo_class.is_some() {
            selectors + Specificity::CLASS
        } else {
            selectors
        }
    }
}

impl FromStr for CompoundSelector {
    type Err = SelectorError;

    /// Parse `tag#id.class[attr="v"]:pseudo(arg)`.
    ///
    /// Everything before the first unescaped top-level `:` is simple
    /// selectors, kept in source order and all active; the remainder must be
    /// a catalog pseudo-class.
    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (simple_part, pseudo_part) = match find_top_level(trimmed, |_, c| c == ':') {
            Some(found) => (&trimmed[..found.index], Some(&trimmed[found.index..])),
            None => (trimmed, None),
        };

        Ok(Self {
            selectors: parse_simple_selectors(simple_part)?,
            pseudo_class: pseudo_part.map(str::parse::<PseudoClass>).transpose()?,
        })
    }
}

fn parse_simple_selectors(text: &str) -> Result<Vec<SimpleSelector>> {
    let invalid = || SelectorError::InvalidSimpleSelector(text.to_string());
    let mut selectors = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            // [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
            '.' => {
                let _ = chars.next();
                let name = take_ident(&mut chars);
                if name.is_empty() {
                    return Err(invalid());
                }
                selectors.push(SimpleSelector::class(name));
            }

            // [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
            '#' => {
                let _ = chars.next();
                let name = take_ident(&mut chars);
                if name.is_empty() {
                    return Err(invalid());
                }
                selectors.push(SimpleSelector::id(name));
            }

            // [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
            '*' => {
                let _ = chars.next();
                selectors.push(SimpleSelector::universal());
            }

            // [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
            '[' => {
                let _ = chars.next();
                selectors.push(parse_attribute(&mut chars, text)?);
            }

            // [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
            // Only allowed as the first selector of the compound.
            _ if selectors.is_empty() && (is_ident_start_char(c) || c == '-') => {
                let name = take_ident(&mut chars);
                selectors.push(type_selector(&name).ok_or_else(invalid)?);
            }

            _ => return Err(invalid()),
        }
    }

    Ok(selectors)
}

/// Known HTML names become [`SimpleSelectorKind::Tag`], hyphenated names
/// custom elements. Type selectors are case-insensitive.
fn type_selector(name: &str) -> Option<SimpleSelector> {
    let lower = name.to_ascii_lowercase();
    if let Some(tag) = Tag::from_name(&lower) {
        Some(SimpleSelector::tag(tag))
    } else if lower.contains('-') {
        Some(SimpleSelector::custom_tag(lower))
    } else {
        None
    }
}

/// Parse the body of an attribute selector; the `[` is already consumed.
fn parse_attribute(chars: &mut Cursor<'_>, source: &str) -> Result<SimpleSelector> {
    let unterminated = || SelectorError::UnterminatedAttribute(source.to_string());

    skip_whitespace(chars);
    // HTML attribute names are case-insensitive
    let name = take_ident(chars).to_ascii_lowercase();
    if name.is_empty() {
        return Err(SelectorError::InvalidSimpleSelector(source.to_string()));
    }
    skip_whitespace(chars);

    // Check what follows: ']', '=', '~=', '|=', '^=', '$=', '*='
    let operator = match chars.next() {
        Some(']') => {
            return Ok(SimpleSelector::new(SimpleSelectorKind::Attribute(
                AttributeSelector {
                    name,
                    matcher: None,
                },
            )));
        }
        Some('=') => AttributeOperator::Equals,
        Some(prefix) => {
            if chars.next() != Some('=') {
                return Err(SelectorError::InvalidSimpleSelector(source.to_string()));
            }
            AttributeOperator::from_prefix(Some(prefix))
                .ok_or_else(|| SelectorError::InvalidSimpleSelector(source.to_string()))?
        }
        None => return Err(unterminated()),
    };

    let value = parse_attr_value(chars).ok_or_else(unterminated)?;
    skip_whitespace(chars);
    if chars.next() != Some(']') {
        return Err(unterminated());
    }

    Ok(SimpleSelector::new(SimpleSelectorKind::Attribute(
        AttributeSelector {
            name,
            matcher: Some(AttributeMatch { operator, value }),
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_selector_classification() {
        assert_eq!(type_selector("DIV"), Some(SimpleSelector::tag(Tag::Div)));
        assert_eq!(
            type_selector("my-card"),
            Some(SimpleSelector::custom_tag("my-card"))
        );
        assert_eq!(type_selector("widget"), None);
    }

    #[test]
    fn attribute_operators() {
        let parsed: CompoundSelector = r#"[lang|="en"][href^=https][data-x]"#.parse().unwrap();
        assert_eq!(
            parsed.selectors,
            vec![
                SimpleSelector::attribute_with("lang", AttributeOperator::DashMatch, "en"),
                SimpleSelector::attribute_with("href", AttributeOperator::PrefixMatch, "https"),
                SimpleSelector::attribute("data-x"),
            ]
        );
    }

    #[test]
    fn attribute_errors() {
        assert!(matches!(
            "[href".parse::<CompoundSelector>(),
            Err(SelectorError::UnterminatedAttribute(_))
        ));
        assert!(matches!(
            "[href=\"x]".parse::<CompoundSelector>(),
            Err(SelectorError::UnterminatedAttribute(_))
        ));
        assert!(matches!(
            "[=x]".parse::<CompoundSelector>(),
            Err(SelectorError::InvalidSimpleSelector(_))
        ));
        assert!(matches!(
            "[a!=x]".parse::<CompoundSelector>(),
            Err(SelectorError::InvalidSimpleSelector(_))
        ));
    }
}
