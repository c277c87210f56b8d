//! [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
//!
//! The pseudo-classes a compound selector may end with. The catalog is
//! closed: parsing a name that is not listed here is an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{Result, SelectorError};
use crate::parser::{take_ident, take_parenthesized};

/// Every pseudo-class the editor supports.
///
/// The CSS name is the kebab-case variant name (`FirstChild` is
/// `first-child`).
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PseudoClassKind {
    // User action
    Hover,
    Active,
    Focus,
    FocusWithin,
    FocusVisible,
    // Location
    Link,
    Visited,
    Target,
    // Input
    Checked,
    Disabled,
    Enabled,
    Required,
    Optional,
    Valid,
    Invalid,
    InRange,
    OutOfRange,
    ReadOnly,
    ReadWrite,
    PlaceholderShown,
    // Tree-structural
    Root,
    Empty,
    FirstChild,
    LastChild,
    OnlyChild,
    FirstOfType,
    LastOfType,
    OnlyOfType,
    NthChild,
    NthLastChild,
    NthOfType,
    NthLastOfType,
    // Linguistic
    Lang,
    Dir,
}

/// UI strings for one catalog entry.
struct Labels {
    display_name: &'static str,
    sentence_pre: &'static str,
    sentence_post: &'static str,
}

const fn labels(
    display_name: &'static str,
    sentence_pre: &'static str,
    sentence_post: &'static str,
) -> Labels {
    Labels {
        display_name,
        sentence_pre,
        sentence_post,
    }
}

impl PseudoClassKind {
    /// Iterate over the whole catalog in declaration order.
    pub fn catalog() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Whether the pseudo-class takes an argument (`:nth-child(2n)`).
    #[must_use]
    pub const fn has_param(self) -> bool {
        matches!(
            self,
            Self::NthChild
                | Self::NthLastChild
                | Self::NthOfType
                | Self::NthLastOfType
                | Self::Lang
                | Self::Dir
        )
    }

    const fn labels(self) -> Labels {
        match self {
            Self::Hover => labels("Hover", "when the mouse is over", ""),
            Self::Active => labels("Active", "while", "is being pressed"),
            Self::Focus => labels("Focus", "when", "has the focus"),
            Self::FocusWithin => labels("Focus within", "when", "or a descendant has the focus"),
            Self::FocusVisible => labels("Focus visible", "when", "shows a focus ring"),
            Self::Link => labels("Link", "when", "is an unvisited link"),
            Self::Visited => labels("Visited", "when", "is a visited link"),
            Self::Target => labels("Target", "when", "is the URL fragment target"),
            Self::Checked => labels("Checked", "when", "is checked"),
            Self::Disabled => labels("Disabled", "when", "is disabled"),
            Self::Enabled => labels("Enabled", "when", "is enabled"),
            Self::Required => labels("Required", "when", "is required"),
            Self::Optional => labels("Optional", "when", "is optional"),
            Self::Valid => labels("Valid", "when", "holds a valid value"),
            Self::Invalid => labels("Invalid", "when", "holds an invalid value"),
            Self::InRange => labels("In range", "when", "holds a value in range"),
            Self::OutOfRange => labels("Out of range", "when", "holds a value out of range"),
            Self::ReadOnly => labels("Read only", "when", "is read only"),
            Self::ReadWrite => labels("Read write", "when", "is editable"),
            Self::PlaceholderShown => labels("Placeholder shown", "when", "shows its placeholder"),
            Self::Root => labels("Root", "when", "is the document root"),
            Self::Empty => labels("Empty", "when", "has no children"),
            Self::FirstChild => labels("First child", "when", "is the first child"),
            Self::LastChild => labels("Last child", "when", "is the last child"),
            Self::OnlyChild => labels("Only child", "when", "is an only child"),
            Self::FirstOfType => labels("First of type", "when", "is the first of its type"),
            Self::LastOfType => labels("Last of type", "when", "is the last of its type"),
            Self::OnlyOfType => labels("Only of type", "when", "is the only one of its type"),
            Self::NthChild => labels("Nth child", "when", "is child number"),
            Self::NthLastChild => labels("Nth last child", "when", "is child number, counting from the end,"),
            Self::NthOfType => labels("Nth of type", "when", "is number"),
            Self::NthLastOfType => labels("Nth last of type", "when", "is number, counting from the end,"),
            Self::Lang => labels("Language", "when", "is in language"),
            Self::Dir => labels("Direction", "when", "has text direction"),
        }
    }

    /// Human label for the pseudo-class picker.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.labels().display_name
    }

    /// Sentence fragment shown before the element description.
    #[must_use]
    pub const fn sentence_pre(self) -> &'static str {
        self.labels().sentence_pre
    }

    /// Sentence fragment shown after the element description.
    #[must_use]
    pub const fn sentence_post(self) -> &'static str {
        self.labels().sentence_post
    }
}

/// A pseudo-class attached to a compound selector, with its argument if the
/// catalog entry takes one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PseudoClass {
    /// Which catalog entry.
    pub kind: PseudoClassKind,
    /// Argument text, only meaningful when [`PseudoClassKind::has_param`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl PseudoClass {
    /// A pseudo-class without argument.
    #[must_use]
    pub const fn new(kind: PseudoClassKind) -> Self {
        Self { kind, param: None }
    }

    /// A pseudo-class with an argument (`:nth-child(2n + 1)`).
    #[must_use]
    pub fn with_param(kind: PseudoClassKind, param: impl Into<String>) -> Self {
        Self {
            kind,
            param: Some(param.into()),
        }
    }

    /// Whether the pseudo-class takes an argument.
    #[must_use]
    pub const fn has_param(&self) -> bool {
        self.kind.has_param()
    }

    /// Human label for the pseudo-class picker.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}

impl From<PseudoClassKind> for PseudoClass {
    fn from(kind: PseudoClassKind) -> Self {
        Self::new(kind)
    }
}

/// `:name` without argument, `:name(param)` otherwise; a missing argument
/// renders as `:name()`.
impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_param() {
            write!(f, ":{}({})", self.kind, self.param.as_deref().unwrap_or_default())
        } else {
            write!(f, ":{}", self.kind)
        }
    }
}

impl FromStr for PseudoClass {
    type Err = SelectorError;

    /// Parse `:name` or `:name(param)`.
    ///
    /// A parenthesized argument on an entry that takes none is dropped.
    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let mut chars = trimmed.chars().peekable();
        if chars.next() != Some(':') {
            return Err(SelectorError::UnknownPseudoClass(trimmed.to_string()));
        }
        let name = take_ident(&mut chars);
        if name.is_empty() {
            // `::before` and friends: report what followed the first colon
            return Err(SelectorError::UnknownPseudoClass(trimmed[1..].to_string()));
        }
        let kind = PseudoClassKind::from_str(&name.to_ascii_lowercase())
            .map_err(|_| SelectorError::UnknownPseudoClass(name.clone()))?;

        let mut param = None;
        if chars.peek() == Some(&'(') {
            let _ = chars.next();
            let inner = take_parenthesized(&mut chars, trimmed)?;
            if kind.has_param() {
                param = Some(inner.trim().to_string());
            }
        }

        let rest: String = chars.collect();
        if !rest.trim().is_empty() {
            return Err(SelectorError::TrailingInput(rest));
        }
        Ok(Self { kind, param })
    }
}
