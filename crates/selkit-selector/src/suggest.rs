//! Autocompletion for the selector input.
//!
//! Two lists are offered while the user types: existing selectors whose
//! text matches the filter ([`suggest`]) and, when the text names something
//! that can be created, a single creation entry ([`creation_suggestions`]).

use std::collections::HashMap;

use serde::Serialize;

use crate::simple::{SimpleSelector, SimpleSelectorType};
use crate::validate::validate;

/// Filtered suggestions shown per selector type, so one dominant type does
/// not flood the list.
pub const MAX_SUGGESTIONS_PER_TYPE: usize = 5;

/// One entry of the autocompletion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SimpleSelectorSuggestion {
    /// Onboarding hint: typing should continue after `prefix`.
    KeepEditing {
        /// The type of selector the prefix starts.
        selector_type: SimpleSelectorType,
        /// Text to put in the input.
        prefix: &'static str,
        /// Help text.
        hint: &'static str,
    },
    /// A selector that can be picked right away.
    Select {
        /// The selector to add.
        selector: SimpleSelector,
        /// Whether the selector is new rather than an existing candidate.
        created: bool,
    },
}

impl SimpleSelectorSuggestion {
    const fn keep_editing(
        selector_type: SimpleSelectorType,
        prefix: &'static str,
        hint: &'static str,
    ) -> Self {
        Self::KeepEditing {
            selector_type,
            prefix,
            hint,
        }
    }

    /// Type of the suggested selector.
    #[must_use]
    pub const fn selector_type(&self) -> SimpleSelectorType {
        match self {
            Self::KeepEditing { selector_type, .. } => *selector_type,
            Self::Select { selector, .. } => selector.selector_type(),
        }
    }

    /// The selector to add, unless this is a keep-editing hint.
    #[must_use]
    pub const fn selector(&self) -> Option<&SimpleSelector> {
        match self {
            Self::KeepEditing { .. } => None,
            Self::Select { selector, .. } => Some(selector),
        }
    }

    /// Label for the suggestion list.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::KeepEditing { hint, .. } => (*hint).to_string(),
            Self::Select { selector, created } => {
                if *created {
                    format!("Create {}", selector.editable_name())
                } else {
                    selector.editable_name()
                }
            }
        }
    }
}

/// Hints shown before anything is typed: one per way of starting a
/// selector, plus picking the universal selector directly.
#[must_use]
pub fn onboarding_suggestions() -> Vec<SimpleSelectorSuggestion> {
    use SimpleSelectorType as Type;

    vec![
        SimpleSelectorSuggestion::keep_editing(Type::Class, ".", "Type a class name"),
        SimpleSelectorSuggestion::keep_editing(Type::Id, "#", "Type an ID"),
        SimpleSelectorSuggestion::keep_editing(Type::Attribute, "[", "Type an attribute name"),
        SimpleSelectorSuggestion::keep_editing(
            Type::Attribute,
            "[data-",
            "Type a custom data attribute",
        ),
        SimpleSelectorSuggestion::keep_editing(Type::Tag, "", "Type an HTML tag name"),
        SimpleSelectorSuggestion::keep_editing(
            Type::CustomTag,
            "",
            "Type a custom element name with a hyphen",
        ),
        SimpleSelectorSuggestion::Select {
            selector: SimpleSelector::universal(),
            created: false,
        },
    ]
}

/// Existing selectors matching `filter`.
///
/// - empty filter: the onboarding hints
/// - `*`: nothing (the universal selector is offered by
///   [`creation_suggestions`])
/// - otherwise candidates whose CSS text contains the filter,
///   case-insensitively, at most [`MAX_SUGGESTIONS_PER_TYPE`] per type, in
///   candidate order
#[must_use]
pub fn suggest(filter: &str, candidates: &[SimpleSelector]) -> Vec<SimpleSelectorSuggestion> {
    if filter.is_empty() {
        return onboarding_suggestions();
    }
    if filter == "*" {
        return Vec::new();
    }

    let needle = filter.to_lowercase();
    let mut per_type: HashMap<SimpleSelectorType, usize> = HashMap::new();

    candidates
        .iter()
        .filter(|candidate| candidate.filter_text().to_lowercase().contains(&needle))
        .filter(|candidate| {
            let shown = per_type.entry(candidate.selector_type()).or_insert(0);
            *shown += 1;
            *shown <= MAX_SUGGESTIONS_PER_TYPE
        })
        .map(|candidate| SimpleSelectorSuggestion::Select {
            selector: candidate.clone(),
            created: false,
        })
        .collect()
}

/// The selector `filter` would create, if any.
///
/// The filter is validated first and the type inferred from its sigil:
/// `*` universal, `.` class, `[` attribute (including `[data-`), a
/// hyphenated bare word a custom element. Tag names and IDs are never
/// created, only picked from existing candidates.
#[must_use]
pub fn creation_suggestions(filter: &str) -> Vec<SimpleSelectorSuggestion> {
    let Some(normalized) = validate(filter) else {
        return Vec::new();
    };

    let selector = if normalized == "*" {
        SimpleSelector::universal()
    } else if let Some(name) = normalized.strip_prefix('.') {
        SimpleSelector::class(name)
    } else if let Some(body) = normalized.strip_prefix('[') {
        SimpleSelector::attribute(body.trim_end_matches(']'))
    } else if normalized.contains('-') && normalized.starts_with(|c: char| c.is_ascii_alphabetic())
    {
        SimpleSelector::custom_tag(normalized)
    } else {
        return Vec::new();
    };

    vec![SimpleSelectorSuggestion::Select {
        selector,
        created: true,
    }]
}
