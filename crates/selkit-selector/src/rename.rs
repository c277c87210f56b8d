//! Renaming a simple selector from the edit field.
//!
//! A rename may change the name but never the type of a selector: turning
//! an ID into a class mid-edit would corrupt the editor's state. Rejected
//! renames come back as [`RenameOutcome::Rejected`] with a reason, never as
//! an error; reporting them is up to the caller.

use serde::Serialize;

use crate::simple::{SimpleSelector, SimpleSelectorKind, SimpleSelectorType};
use crate::validate::validate;

/// Result of [`rename_selector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum RenameOutcome {
    /// The renamed selector.
    Renamed {
        /// The selector after the rename.
        selector: SimpleSelector,
    },
    /// The rename was not applied.
    Rejected {
        /// Why, for display.
        reason: String,
    },
}

/// Tag and custom tag are both element names and may be renamed into each
/// other.
fn same_family(a: SimpleSelectorType, b: SimpleSelectorType) -> bool {
    a == b
        || matches!(
            (a, b),
            (
                SimpleSelectorType::Tag | SimpleSelectorType::CustomTag,
                SimpleSelectorType::Tag | SimpleSelectorType::CustomTag
            )
        )
}

const fn reject(reason: String) -> RenameOutcome {
    RenameOutcome::Rejected { reason }
}

/// Rename `selector` to the typed `text`.
///
/// The text goes through [`validate`] first. The result keeps the old
/// `active` flag and, for attributes, the old operator and value (the edit
/// field only ever shows `[name]`).
#[must_use]
pub fn rename_selector(selector: &SimpleSelector, text: &str) -> RenameOutcome {
    let normalized = match validate(text) {
        Some(normalized) if !normalized.is_empty() => normalized,
        _ => return reject(format!("`{text}` is not a valid selector")),
    };

    let renamed: SimpleSelector = match normalized.parse() {
        Ok(renamed) => renamed,
        Err(error) => return reject(error.to_string()),
    };

    let (from, to) = (selector.selector_type(), renamed.selector_type());
    if !same_family(from, to) {
        return reject(format!(
            "cannot rename {from} `{selector}` to {to} `{renamed}`"
        ));
    }

    let kind = match (&selector.kind, renamed.kind) {
        (SimpleSelectorKind::Attribute(old), SimpleSelectorKind::Attribute(mut new)) => {
            new.matcher.clone_from(&old.matcher);
            SimpleSelectorKind::Attribute(new)
        }
        (_, kind) => kind,
    };

    RenameOutcome::Renamed {
        selector: SimpleSelector {
            kind,
            active: selector.active,
        },
    }
}
