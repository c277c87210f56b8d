//! Operators relating a compound selector to a second one.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators) place the
//! related compound to the left of the main one (`related > main`).
//! [§ 4.5 Relational pseudo-class](https://www.w3.org/TR/selectors-4/#relational)
//! and the [§ 4 logical combinations](https://www.w3.org/TR/selectors-4/#logical-combination)
//! wrap the related compound in parentheses after the main one
//! (`main:has(related)`).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

use crate::compound::CompoundSelector;
use crate::error::{Result, SelectorError};

/// The operator catalog, in lookup order.
///
/// Descendant comes last: its token is a single space, which also occurs
/// around every other combinator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Operator {
    /// [§ 4.5 :has()](https://www.w3.org/TR/selectors-4/#relational)
    /// "represents an element if any of the relative selectors would match"
    Has,
    /// [§ 4.3 :not()](https://www.w3.org/TR/selectors-4/#negation)
    /// "represents an element that is not represented by its argument"
    Not,
    /// [§ 4.2 :is()](https://www.w3.org/TR/selectors-4/#matches)
    /// "represents any element that is represented by its argument"
    Is,
    /// [§ 4.4 :where()](https://www.w3.org/TR/selectors-4/#zero-matches)
    /// Same as `:is()` but contributes no specificity in browsers.
    Where,
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    Child,
    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A."
    Adjacent,
    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately)."
    GeneralSibling,
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    Descendant,
}

impl Operator {
    /// Iterate over the whole catalog in lookup order.
    pub fn catalog() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// The CSS text identifying the operator.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Has => ":has",
            Self::Not => ":not",
            Self::Is => ":is",
            Self::Where => ":where",
            Self::Child => ">",
            Self::Adjacent => "+",
            Self::GeneralSibling => "~",
            Self::Descendant => " ",
        }
    }

    /// Structural combinator (true) or relational pseudo-class (false).
    #[must_use]
    pub const fn is_combinator(self) -> bool {
        matches!(
            self,
            Self::Child | Self::Adjacent | Self::GeneralSibling | Self::Descendant
        )
    }

    /// Relational pseudo-classes take their operand as a parenthesized argument.
    #[must_use]
    pub const fn has_param(self) -> bool {
        !self.is_combinator()
    }

    /// Combinator for a single character, if it is one.
    #[must_use]
    pub const fn from_combinator_char(ch: char) -> Option<Self> {
        match ch {
            '>' => Some(Self::Child),
            '+' => Some(Self::Adjacent),
            '~' => Some(Self::GeneralSibling),
            c if c.is_ascii_whitespace() => Some(Self::Descendant),
            _ => None,
        }
    }

    /// Relational pseudo-class by name (`has`, `not`, `is`, `where`).
    #[must_use]
    pub fn from_relational_name(name: &str) -> Option<Self> {
        Self::iter().find(|op| !op.is_combinator() && op.token()[1..].eq_ignore_ascii_case(name))
    }

    /// Label for the operator picker.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Has => "Has",
            Self::Not => "Not",
            Self::Is => "Is",
            Self::Where => "Where",
            Self::Child => "Child of",
            Self::Adjacent => "Right after",
            Self::GeneralSibling => "After",
            Self::Descendant => "Inside",
        }
    }

    /// Sentence fragment linking the main selector to the related one.
    #[must_use]
    pub const fn sentence_pre(self) -> &'static str {
        match self {
            Self::Has => "which contains",
            Self::Not => "which is not",
            Self::Is => "which is",
            Self::Where => "which is (without specificity)",
            Self::Child => "which is a direct child of",
            Self::Adjacent => "which comes right after",
            Self::GeneralSibling => "which comes after",
            Self::Descendant => "which is inside",
        }
    }

    /// Reference documentation for the operator.
    #[must_use]
    pub const fn help_link(self) -> &'static str {
        match self {
            Self::Has => "https://developer.mozilla.org/en-US/docs/Web/CSS/:has",
            Self::Not => "https://developer.mozilla.org/en-US/docs/Web/CSS/:not",
            Self::Is => "https://developer.mozilla.org/en-US/docs/Web/CSS/:is",
            Self::Where => "https://developer.mozilla.org/en-US/docs/Web/CSS/:where",
            Self::Child => "https://developer.mozilla.org/en-US/docs/Web/CSS/Child_combinator",
            Self::Adjacent => {
                "https://developer.mozilla.org/en-US/docs/Web/CSS/Next-sibling_combinator"
            }
            Self::GeneralSibling => {
                "https://developer.mozilla.org/en-US/docs/Web/CSS/Subsequent-sibling_combinator"
            }
            Self::Descendant => {
                "https://developer.mozilla.org/en-US/docs/Web/CSS/Descendant_combinator"
            }
        }
    }

    /// Render the operator applied to `operand`.
    ///
    /// - relational: `:has(operand)`
    /// - descendant: ` operand` (whitespace only, no glyph)
    /// - other combinators: ` > operand`
    ///
    /// A missing operand renders as empty text.
    ///
    /// # Errors
    ///
    /// Propagates [`SelectorError::UniversalNotAlone`] from rendering the operand.
    pub fn render(self, operand: Option<&CompoundSelector>) -> Result<String> {
        let operand = operand.map(CompoundSelector::to_css).transpose()?.unwrap_or_default();
        Ok(match self {
            Self::Has | Self::Not | Self::Is | Self::Where => {
                format!("{}({operand})", self.token())
            }
            Self::Descendant => format!(" {operand}"),
            Self::Child | Self::Adjacent | Self::GeneralSibling => {
                format!(" {} {operand}", self.token())
            }
        })
    }
}

impl FromStr for Operator {
    type Err = SelectorError;

    /// The first catalog entry whose token occurs anywhere in `text`.
    ///
    /// The caller makes sure the text holds a single operator.
    fn from_str(text: &str) -> Result<Self> {
        Self::iter()
            .find(|op| text.contains(op.token()))
            .ok_or_else(|| SelectorError::UnknownOperator(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple::SimpleSelector;

    fn class(name: &str) -> CompoundSelector {
        CompoundSelector::new(vec![SimpleSelector::class(name)])
    }

    #[test]
    fn catalog_has_four_of_each() {
        assert_eq!(Operator::catalog().count(), 8);
        assert_eq!(Operator::catalog().filter(|op| op.is_combinator()).count(), 4);
    }

    #[test]
    fn renders_each_family() {
        let operand = class("child");
        assert_eq!(Operator::Has.render(Some(&operand)).unwrap(), ":has(.child)");
        assert_eq!(Operator::Not.render(None).unwrap(), ":not()");
        assert_eq!(Operator::Child.render(Some(&operand)).unwrap(), " > .child");
        assert_eq!(Operator::Adjacent.render(Some(&operand)).unwrap(), " + .child");
        assert_eq!(Operator::GeneralSibling.render(None).unwrap(), " ~ ");
        assert_eq!(Operator::Descendant.render(Some(&operand)).unwrap(), " .child");
    }

    #[test]
    fn parses_first_matching_token() {
        assert_eq!(" > ".parse::<Operator>(), Ok(Operator::Child));
        assert_eq!(":where(.a)".parse::<Operator>(), Ok(Operator::Where));
        assert_eq!(" ".parse::<Operator>(), Ok(Operator::Descendant));
        assert_eq!(
            "".parse::<Operator>(),
            Err(SelectorError::UnknownOperator(String::new()))
        );
    }

    #[test]
    fn relational_names() {
        assert_eq!(Operator::from_relational_name("HAS"), Some(Operator::Has));
        assert_eq!(Operator::from_relational_name("child"), None);
        assert_eq!(Operator::from_combinator_char('~'), Some(Operator::GeneralSibling));
        assert_eq!(Operator::from_combinator_char('.'), None);
    }
}
