//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
//!
//! The editor's complex selector is one hop: a main compound (the element
//! being styled), an optional operator and an optional related compound.
//!
//! ```text
//! .list > .item        related = .list, operator = Child, main = .item
//! .card:has(img)       main = .card, operator = Has, related = img
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compound::CompoundSelector;
use crate::error::{Result, SelectorError};
use crate::operator::Operator;
use crate::parser::{find_top_level, take_parenthesized};
use crate::specificity::Specificity;

/// A compound selector optionally related to a second one by an operator,
/// inside an optional at-rule context.
///
/// Values are never mutated in place: every edit returns a new selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplexSelector {
    /// The compound describing the styled element. For combinators it is the
    /// right-hand side; for relational pseudo-classes it is rendered first.
    pub main_selector: CompoundSelector,
    /// How `related_selector` relates to `main_selector`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
    /// Left operand of a combinator, or argument of a relational pseudo-class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_selector: Option<CompoundSelector>,
    /// Enclosing at-rule (e.g. a media query), stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_rule: Option<String>,
}

impl ComplexSelector {
    /// A selector made of a single compound.
    #[must_use]
    pub const fn new(main_selector: CompoundSelector) -> Self {
        Self {
            main_selector,
            operator: None,
            related_selector: None,
            at_rule: None,
        }
    }

    /// The same selector with `operator` and `related_selector` set.
    #[must_use]
    pub fn with_related(mut self, operator: Operator, related_selector: CompoundSelector) -> Self {
        self.operator = Some(operator);
        self.related_selector = Some(related_selector);
        self
    }

    /// The same selector inside `at_rule`.
    #[must_use]
    pub fn with_at_rule(mut self, at_rule: impl Into<String>) -> Self {
        self.at_rule = Some(at_rule.into());
        self
    }

    /// Whether neither compound would render anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main_selector.is_empty()
            && self
                .related_selector
                .as_ref()
                .is_none_or(CompoundSelector::is_empty)
    }

    /// Render as CSS.
    ///
    /// - no operator: the main compound
    /// - relational pseudo-class: `main:has(related)`
    /// - combinator: `related > main`; when the related compound renders
    ///   nothing the combinator is dropped and only the main compound remains
    ///
    /// # Errors
    ///
    /// [`SelectorError::UniversalNotAlone`] if either compound breaks the
    /// universal selector rule.
    pub fn to_css(&self) -> Result<String> {
        let main = &self.main_selector;
        match self.operator {
            None => main.to_css(),
            Some(operator) if !operator.is_combinator() => {
                let operand = operator.render(self.related_selector.as_ref())?;
                Ok(main.to_css()? + &operand)
            }
            Some(operator) => {
                let related = self
                    .related_selector
                    .as_ref()
                    .map(CompoundSelector::to_css)
                    .transpose()?
                    .unwrap_or_default();
                if related.is_empty() {
                    return main.to_css();
                }
                let css = related + &operator.render(Some(main))?;
                Ok(css.trim_end().to_string())
            }
        }
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Main plus related compound.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.main_selector.specificity()
            + self
                .related_selector
                .as_ref()
                .map_or(Specificity::ZERO, CompoundSelector::specificity)
    }

    /// Parse `text` and attach `at_rule` verbatim.
    ///
    /// The text is split on its first top-level operator:
    /// - a combinator (`>`, `+`, `~` or whitespace): the left side is the
    ///   related compound, the right side the main one
    /// - a relational pseudo-class (`:has(`, `:not(`, `:is(`, `:where(`): the
    ///   text before it is the main compound, its argument the related one
    ///
    /// Without an operator the whole text is the main compound.
    ///
    /// # Errors
    ///
    /// Any error from parsing the compounds, [`SelectorError::UnbalancedParentheses`]
    /// for an unclosed relational argument and [`SelectorError::TrailingInput`]
    /// for text after it.
    pub fn parse(text: &str, at_rule: Option<&str>) -> Result<Self> {
        let trimmed = text.trim();
        let relational = find_top_level(trimmed, |index, c| {
            c == ':' && relational_at(&trimmed[index + 1..]).is_some()
        });
        let combinator = find_top_level(trimmed, |_, c| Operator::from_combinator_char(c).is_some());

        let mut selector = match (relational, combinator) {
            (Some(found), Some(other)) if found.index < other.index => {
                parse_relational(trimmed, found.index)?
            }
            (Some(found), None) => parse_relational(trimmed, found.index)?,
            (_, Some(found)) => parse_combinator(trimmed, found.index)?,
            (None, None) => Self::new(trimmed.parse()?),
        };
        selector.at_rule = at_rule.map(str::to_string);
        Ok(selector)
    }
}

impl FromStr for ComplexSelector {
    type Err = SelectorError;

    /// Parse without at-rule context.
    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text, None)
    }
}

/// The relational operator named at the start of `rest` (the text after a
/// `:`), if it is immediately followed by `(`.
fn relational_at(rest: &str) -> Option<Operator> {
    let name_len = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    if !rest[name_len..].starts_with('(') {
        return None;
    }
    Operator::from_relational_name(&rest[..name_len])
}

/// `main:op(related)` with the `:` at byte `index`.
fn parse_relational(text: &str, index: usize) -> Result<ComplexSelector> {
    let after_colon = &text[index + 1..];
    let operator =
        relational_at(after_colon).ok_or_else(|| SelectorError::UnknownOperator(text.to_string()))?;

    let mut chars = after_colon.chars().peekable();
    // Skip the name and the opening parenthesis
    while chars.next().is_some_and(|c| c != '(') {}
    let inner = take_parenthesized(&mut chars, text)?;

    let trailing: String = chars.collect();
    if !trailing.trim().is_empty() {
        return Err(SelectorError::TrailingInput(trailing));
    }

    Ok(ComplexSelector::new(text[..index].parse()?).with_related(operator, inner.parse()?))
}

/// `related OP main` with the first combinator character at byte `index`.
fn parse_combinator(text: &str, index: usize) -> Result<ComplexSelector> {
    let left = text[..index].trim_end();
    let mut right = text[index..].trim_start();

    let operator = match right.chars().next().and_then(Operator::from_combinator_char) {
        Some(operator) if operator != Operator::Descendant => {
            right = right[1..].trim_start();
            operator
        }
        _ => Operator::Descendant,
    };

    let mut selector = ComplexSelector::new(right.parse()?);
    selector.operator = Some(operator);
    if !left.is_empty() {
        selector.related_selector = Some(left.parse()?);
    }
    Ok(selector)
}
