//! Reconciling an edited selector with the one stored for a component.
//!
//! When the user edits one facet of a selector (toggles a class, picks an
//! operator), the edited value is merged into the stored one so unrelated
//! selectors the component already knows are not lost, and activation flags
//! are then aligned with what the edit actually contains.
//!
//! `merge` copies `operator`, pseudo-classes and `at_rule` from whichever side
//! has them (the incoming side wins). Callers set those fields explicitly
//! afterwards when they need a specific value.

use crate::complex::ComplexSelector;
use crate::compound::CompoundSelector;
use crate::simple::SimpleSelector;

impl ComplexSelector {
    /// Union of `self` (the stored selector) and `incoming` (the edit).
    ///
    /// For the main compound, and independently for the related compound
    /// when either side has one:
    /// - the stored selectors come first, in their stored order
    /// - a selector present on both sides takes the incoming `active` flag
    /// - selectors only present in `incoming` are appended in their order
    #[must_use]
    pub fn merge(&self, incoming: &Self) -> Self {
        let related_selector = match (&self.related_selector, &incoming.related_selector) {
            (None, None) => None,
            (base, other) => Some(merge_compound(
                base.as_ref().unwrap_or(&CompoundSelector::default()),
                other.as_ref().unwrap_or(&CompoundSelector::default()),
            )),
        };

        Self {
            main_selector: merge_compound(&self.main_selector, &incoming.main_selector),
            operator: incoming.operator.or(self.operator),
            related_selector,
            at_rule: incoming.at_rule.clone().or_else(|| self.at_rule.clone()),
        }
    }

    /// Align activation flags of `self` with `other`.
    ///
    /// Each selector of `self` takes the `active` flag of the selector with
    /// the same identity in `other`; selectors `other` does not mention are
    /// switched off. The related compound follows the same rule against
    /// `other`'s related compound (all switched off when `other` has none).
    /// Operator, pseudo-classes and at-rule come from `self` unchanged.
    #[must_use]
    pub fn activate_selectors(&self, other: &Self) -> Self {
        let other_related = other
            .related_selector
            .as_ref()
            .map_or(&[][..], |related| related.selectors.as_slice());

        Self {
            main_selector: activate_compound(&self.main_selector, &other.main_selector.selectors),
            operator: self.operator,
            related_selector: self
                .related_selector
                .as_ref()
                .map(|related| activate_compound(related, other_related)),
            at_rule: self.at_rule.clone(),
        }
    }
}

/// Free-function form of [`ComplexSelector::merge`].
#[must_use]
pub fn merge(base: &ComplexSelector, incoming: &ComplexSelector) -> ComplexSelector {
    base.merge(incoming)
}

/// Free-function form of [`ComplexSelector::activate_selectors`].
#[must_use]
pub fn activate_selectors(selector: &ComplexSelector, other: &ComplexSelector) -> ComplexSelector {
    selector.activate_selectors(other)
}

fn merge_compound(base: &CompoundSelector, incoming: &CompoundSelector) -> CompoundSelector {
    let mut selectors: Vec<SimpleSelector> = base
        .selectors
        .iter()
        .map(|stored| match incoming.find(stored) {
            Some(edited) => stored.clone().with_active(edited.active),
            None => stored.clone(),
        })
        .collect();

    for edited in &incoming.selectors {
        if !selectors.iter().any(|known| known.is_same_selector(edited)) {
            selectors.push(edited.clone());
        }
    }

    CompoundSelector {
        selectors,
        pseudo_class: incoming
            .pseudo_class
            .clone()
            .or_else(|| base.pseudo_class.clone()),
    }
}

fn activate_compound(compound: &CompoundSelector, other: &[SimpleSelector]) -> CompoundSelector {
    CompoundSelector {
        selectors: compound
            .selectors
            .iter()
            .map(|selector| {
                let active = other
                    .iter()
                    .find(|candidate| candidate.is_same_selector(selector))
                    .is_some_and(|candidate| candidate.active);
                selector.clone().with_active(active)
            })
            .collect(),
        pseudo_class: compound.pseudo_class.clone(),
    }
}
