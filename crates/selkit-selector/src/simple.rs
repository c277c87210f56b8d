//! [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
//! [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
//!
//! Simple selectors as the editor stores them: each one carries an `active`
//! flag so a selector can stay known to a component while switched off.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::catalog::Tag;
use crate::compound::CompoundSelector;
use crate::error::{Result, SelectorError};
use crate::specificity::Specificity;

/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeOperator {
    /// `[attr=value]` "whose value is exactly 'val'"
    #[serde(rename = "=")]
    Equals,
    /// `[attr~=value]` "a whitespace-separated list of words, one of which is exactly 'val'"
    #[serde(rename = "~=")]
    Includes,
    /// `[attr|=value]` "either being exactly 'val' or beginning with 'val' immediately followed by '-'"
    #[serde(rename = "|=")]
    DashMatch,
    /// `[attr^=value]` "begins with the prefix 'val'"
    #[serde(rename = "^=")]
    PrefixMatch,
    /// `[attr$=value]` "ends with the suffix 'val'"
    #[serde(rename = "$=")]
    SuffixMatch,
    /// `[attr*=value]` "contains at least one instance of the substring 'val'"
    #[serde(rename = "*=")]
    SubstringMatch,
}

impl AttributeOperator {
    /// The operator as written in CSS.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::Includes => "~=",
            Self::DashMatch => "|=",
            Self::PrefixMatch => "^=",
            Self::SuffixMatch => "$=",
            Self::SubstringMatch => "*=",
        }
    }

    /// Operator for the character preceding `=` (`None` for a bare `=`).
    #[must_use]
    pub const fn from_prefix(prefix: Option<char>) -> Option<Self> {
        match prefix {
            None => Some(Self::Equals),
            Some('~') => Some(Self::Includes),
            Some('|') => Some(Self::DashMatch),
            Some('^') => Some(Self::PrefixMatch),
            Some('$') => Some(Self::SuffixMatch),
            Some('*') => Some(Self::SubstringMatch),
            Some(_) => None,
        }
    }
}

impl fmt::Display for AttributeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator and value of an attribute test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeMatch {
    /// How the value is compared.
    pub operator: AttributeOperator,
    /// The value compared against (unquoted).
    pub value: String,
}

/// An attribute selector: `[name]` or `[name OP "value"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeSelector {
    /// Attribute name.
    pub name: String,
    /// Operator and value; `None` for a bare presence test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<AttributeMatch>,
}

/// What a simple selector selects, without its activation state.
///
/// Two simple selectors are the same selector exactly when their kinds are
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimpleSelectorKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `h1`
    Tag(Tag),

    /// A custom element name (contains a hyphen).
    ///
    /// Examples: `my-card`, `app-header`
    CustomTag(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[type="text"]`
    Attribute(AttributeSelector),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    ///
    /// Must be alone in its compound selector.
    Universal,
}

/// The discriminant of [`SimpleSelectorKind`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SimpleSelectorType {
    /// Known HTML element name.
    Tag,
    /// Hyphenated custom element name.
    CustomTag,
    /// Class selector.
    Class,
    /// ID selector.
    Id,
    /// Attribute selector.
    Attribute,
    /// The universal selector.
    Universal,
}

impl SimpleSelectorType {
    /// Position when a compound selector is rendered: element names first,
    /// then the ID, then classes, then attributes.
    #[must_use]
    pub const fn render_priority(self) -> u8 {
        match self {
            Self::Tag | Self::CustomTag | Self::Universal => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
        }
    }

    /// Short glyph shown next to a selector in the editor, one per type.
    #[must_use]
    pub const fn display_glyph(self) -> &'static str {
        match self {
            Self::Tag => "<>",
            Self::CustomTag => "<->",
            Self::Class => ".",
            Self::Id => "#",
            Self::Attribute => "[]",
            Self::Universal => "*",
        }
    }
}

impl SimpleSelectorKind {
    /// The discriminant.
    #[must_use]
    pub const fn selector_type(&self) -> SimpleSelectorType {
        match self {
            Self::Tag(_) => SimpleSelectorType::Tag,
            Self::CustomTag(_) => SimpleSelectorType::CustomTag,
            Self::Class(_) => SimpleSelectorType::Class,
            Self::Id(_) => SimpleSelectorType::Id,
            Self::Attribute(_) => SimpleSelectorType::Attribute,
            Self::Universal => SimpleSelectorType::Universal,
        }
    }
}

/// A simple selector together with its activation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleSelector {
    /// What is selected.
    pub kind: SimpleSelectorKind,
    /// Whether the selector is currently switched on. Inactive selectors are
    /// neither rendered nor counted toward specificity.
    pub active: bool,
}

impl SimpleSelector {
    /// An active selector of the given kind.
    #[must_use]
    pub const fn new(kind: SimpleSelectorKind) -> Self {
        Self { kind, active: true }
    }

    /// Active `.name` selector.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(SimpleSelectorKind::Class(name.into()))
    }

    /// Active `#name` selector.
    #[must_use]
    pub fn id(name: impl Into<String>) -> Self {
        Self::new(SimpleSelectorKind::Id(name.into()))
    }

    /// Active type selector.
    #[must_use]
    pub const fn tag(tag: Tag) -> Self {
        Self::new(SimpleSelectorKind::Tag(tag))
    }

    /// Active custom element selector.
    #[must_use]
    pub fn custom_tag(name: impl Into<String>) -> Self {
        Self::new(SimpleSelectorKind::CustomTag(name.into()))
    }

    /// Active `[name]` presence test.
    #[must_use]
    pub fn attribute(name: impl Into<String>) -> Self {
        Self::new(SimpleSelectorKind::Attribute(AttributeSelector {
            name: name.into(),
            matcher: None,
        }))
    }

    /// Active `[name OP "value"]` test.
    #[must_use]
    pub fn attribute_with(
        name: impl Into<String>,
        operator: AttributeOperator,
        value: impl Into<String>,
    ) -> Self {
        Self::new(SimpleSelectorKind::Attribute(AttributeSelector {
            name: name.into(),
            matcher: Some(AttributeMatch {
                operator,
                value: value.into(),
            }),
        }))
    }

    /// Active `*` selector.
    #[must_use]
    pub const fn universal() -> Self {
        Self::new(SimpleSelectorKind::Universal)
    }

    /// The same selector with the given activation state.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The same selector, switched off.
    #[must_use]
    pub fn inactive(self) -> Self {
        self.with_active(false)
    }

    /// The discriminant of this selector.
    #[must_use]
    pub const fn selector_type(&self) -> SimpleSelectorType {
        self.kind.selector_type()
    }

    /// Identity comparison: same type and identifying value (operator and
    /// value too for attributes). The `active` flag is ignored.
    #[must_use]
    pub fn is_same_selector(&self, other: &Self) -> bool {
        self.kind == other.kind
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    ///
    /// Contribution of this selector, regardless of `active`.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        match &self.kind {
            // "count the number of ID selectors in the selector (= A)"
            SimpleSelectorKind::Id(_) => Specificity::ID,
            // "count the number of class selectors, attributes selectors,
            // and pseudo-classes in the selector (= B)"
            SimpleSelectorKind::Class(_) | SimpleSelectorKind::Attribute(_) => Specificity::CLASS,
            // "count the number of type selectors and pseudo-elements
            // in the selector (= C)"
            SimpleSelectorKind::Tag(_) | SimpleSelectorKind::CustomTag(_) => Specificity::TYPE,
            // "ignore the universal selector"
            SimpleSelectorKind::Universal => Specificity::ZERO,
        }
    }

    /// Glyph identifying the selector type in the editor.
    #[must_use]
    pub const fn display_type(&self) -> &'static str {
        self.selector_type().display_glyph()
    }

    /// Human label: the bare name, without sigil or attribute operator/value.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.kind {
            SimpleSelectorKind::Tag(tag) => tag.to_string(),
            SimpleSelectorKind::CustomTag(name)
            | SimpleSelectorKind::Class(name)
            | SimpleSelectorKind::Id(name) => name.clone(),
            SimpleSelectorKind::Attribute(attr) => attr.name.clone(),
            SimpleSelectorKind::Universal => "*".to_string(),
        }
    }

    /// Text placed in the edit field: the CSS form, except that attributes
    /// only ever expose `[name]`.
    #[must_use]
    pub fn editable_name(&self) -> String {
        match &self.kind {
            SimpleSelectorKind::Attribute(attr) => format!("[{}]", attr.name),
            _ => self.to_string(),
        }
    }

    /// Text that suggestion filters are matched against.
    #[must_use]
    pub fn filter_text(&self) -> String {
        self.to_string()
    }
}

/// Free-function form of [`SimpleSelector::is_same_selector`].
#[must_use]
pub fn is_same_selector(a: &SimpleSelector, b: &SimpleSelector) -> bool {
    a.is_same_selector(b)
}

/// CSS text of the selector, regardless of `active`.
impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SimpleSelectorKind::Tag(tag) => write!(f, "{tag}"),
            SimpleSelectorKind::CustomTag(name) => f.write_str(name),
            SimpleSelectorKind::Class(name) => write!(f, ".{name}"),
            SimpleSelectorKind::Id(name) => write!(f, "#{name}"),
            SimpleSelectorKind::Attribute(AttributeSelector {
                name,
                matcher: None,
            }) => write!(f, "[{name}]"),
            SimpleSelectorKind::Attribute(AttributeSelector {
                name,
                matcher: Some(AttributeMatch { operator, value }),
            }) => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "[{name}{operator}\"{escaped}\"]")
            }
            SimpleSelectorKind::Universal => f.write_str("*"),
        }
    }
}

impl FromStr for SimpleSelector {
    type Err = SelectorError;

    /// Parse exactly one simple selector (`div`, `.a`, `#b`, `[c="d"]`, `*`).
    fn from_str(text: &str) -> Result<Self> {
        let compound: CompoundSelector = text.parse()?;
        match (compound.selectors.as_slice(), &compound.pseudo_class) {
            ([single], None) => Ok(single.clone()),
            _ => Err(SelectorError::InvalidSimpleSelector(text.to_string())),
        }
    }
}
