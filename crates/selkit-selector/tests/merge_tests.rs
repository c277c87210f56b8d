//! Integration tests for merging an edit into a stored selector and
//! aligning activation flags.

use selkit_selector::{
    ComplexSelector, CompoundSelector, Operator, PseudoClassKind, SimpleSelector,
    activate_selectors, merge,
};

fn compound(selectors: Vec<SimpleSelector>) -> CompoundSelector {
    CompoundSelector::new(selectors)
}

fn main_only(selectors: Vec<SimpleSelector>) -> ComplexSelector {
    ComplexSelector::new(compound(selectors))
}

#[test]
fn test_merge_unions_main_selectors() {
    let stored = main_only(vec![
        SimpleSelector::class("a"),
        SimpleSelector::class("b").inactive(),
    ]);
    let edit = main_only(vec![
        SimpleSelector::class("b"),
        SimpleSelector::id("new"),
    ]);

    let merged = merge(&stored, &edit);
    assert_eq!(
        merged.main_selector.selectors,
        vec![
            SimpleSelector::class("a"),
            SimpleSelector::class("b"),
            SimpleSelector::id("new"),
        ]
    );
}

#[test]
fn test_merge_incoming_flag_wins() {
    let stored = main_only(vec![SimpleSelector::class("a")]);
    let edit = main_only(vec![SimpleSelector::class("a").inactive()]);

    let merged = stored.merge(&edit);
    assert_eq!(
        merged.main_selector.selectors,
        vec![SimpleSelector::class("a").inactive()]
    );
    // Inputs are not modified
    assert!(stored.main_selector.selectors[0].active);
}

#[test]
fn test_merge_related_selectors_independently() {
    let stored = main_only(vec![SimpleSelector::class("item")])
        .with_related(Operator::Child, compound(vec![SimpleSelector::class("list")]));
    let edit = main_only(vec![SimpleSelector::class("item")]);

    let merged = stored.merge(&edit);
    assert_eq!(
        merged.related_selector,
        Some(compound(vec![SimpleSelector::class("list")]))
    );
    assert_eq!(merged.operator, Some(Operator::Child));

    let edit = main_only(vec![]).with_related(
        Operator::Descendant,
        compound(vec![SimpleSelector::class("list").inactive(), SimpleSelector::class("grid")]),
    );
    let merged = stored.merge(&edit);
    assert_eq!(
        merged.related_selector,
        Some(compound(vec![
            SimpleSelector::class("list").inactive(),
            SimpleSelector::class("grid"),
        ]))
    );
    assert_eq!(merged.operator, Some(Operator::Descendant));
}

#[test]
fn test_merge_without_related_on_either_side() {
    let merged = main_only(vec![SimpleSelector::class("a")])
        .merge(&main_only(vec![SimpleSelector::class("b")]));
    assert_eq!(merged.related_selector, None);
    assert_eq!(merged.operator, None);
}

#[test]
fn test_merge_copies_fields_from_whichever_side_has_them() {
    let stored = ComplexSelector::new(
        compound(vec![SimpleSelector::class("a")]).with_pseudo_class(PseudoClassKind::Hover),
    )
    .with_at_rule("@media print");
    let edit = main_only(vec![SimpleSelector::class("a")]);

    let merged = stored.merge(&edit);
    assert_eq!(merged.at_rule.as_deref(), Some("@media print"));
    assert_eq!(
        merged.main_selector.pseudo_class.map(|pc| pc.kind),
        Some(PseudoClassKind::Hover)
    );

    let edit = ComplexSelector::new(
        compound(vec![SimpleSelector::class("a")]).with_pseudo_class(PseudoClassKind::Focus),
    )
    .with_at_rule("@media screen");
    let merged = stored.merge(&edit);
    assert_eq!(merged.at_rule.as_deref(), Some("@media screen"));
    assert_eq!(
        merged.main_selector.pseudo_class.map(|pc| pc.kind),
        Some(PseudoClassKind::Focus)
    );
}

#[test]
fn test_activate_deactivates_by_absence() {
    let selector = main_only(vec![SimpleSelector::class("a")]);
    let other = main_only(vec![]);

    let activated = activate_selectors(&selector, &other);
    assert_eq!(
        activated.main_selector.selectors,
        vec![SimpleSelector::class("a").inactive()]
    );
}

#[test]
fn test_activate_copies_flags_by_identity() {
    let selector = main_only(vec![
        SimpleSelector::class("a").inactive(),
        SimpleSelector::class("b"),
        SimpleSelector::id("c"),
    ]);
    let other = main_only(vec![
        SimpleSelector::id("c").inactive(),
        SimpleSelector::class("a"),
        SimpleSelector::class("unrelated"),
    ]);

    let activated = selector.activate_selectors(&other);
    assert_eq!(
        activated.main_selector.selectors,
        vec![
            SimpleSelector::class("a"),
            SimpleSelector::class("b").inactive(),
            SimpleSelector::id("c").inactive(),
        ]
    );
}

#[test]
fn test_activate_related_and_passthrough_fields() {
    let selector = ComplexSelector::new(
        compound(vec![SimpleSelector::class("item")]).with_pseudo_class(PseudoClassKind::Hover),
    )
    .with_related(
        Operator::Child,
        compound(vec![SimpleSelector::class("list"), SimpleSelector::class("grid")]),
    );
    let other = main_only(vec![SimpleSelector::class("item")])
        .with_related(Operator::Has, compound(vec![SimpleSelector::class("grid")]));

    let activated = selector.activate_selectors(&other);
    assert_eq!(activated.operator, Some(Operator::Child));
    assert_eq!(
        activated.main_selector.pseudo_class.as_ref().map(|pc| pc.kind),
        Some(PseudoClassKind::Hover)
    );
    assert_eq!(
        activated.related_selector,
        Some(compound(vec![
            SimpleSelector::class("list").inactive(),
            SimpleSelector::class("grid"),
        ]))
    );
    assert_eq!(activated.to_css().unwrap(), ".grid > .item:hover");

    // No related compound in `other`: everything related is switched off
    let activated = selector.activate_selectors(&main_only(vec![SimpleSelector::class("item")]));
    let related = activated.related_selector.as_ref().unwrap();
    assert!(related.selectors.iter().all(|selector| !selector.active));
    assert_eq!(activated.to_css().unwrap(), ".item:hover");
}

#[test]
fn test_merge_then_activate_keeps_known_selectors() {
    // The component knows `.a` and `.b`; the user's edit only contains `.b`
    let stored = main_only(vec![SimpleSelector::class("a"), SimpleSelector::class("b")]);
    let edit = main_only(vec![SimpleSelector::class("b")]);

    let reconciled = stored.merge(&edit).activate_selectors(&edit);
    assert_eq!(
        reconciled.main_selector.selectors,
        vec![
            SimpleSelector::class("a").inactive(),
            SimpleSelector::class("b"),
        ]
    );
    assert_eq!(reconciled.to_css().unwrap(), ".b");

    // Re-adding `.a` later switches it back on without duplicating it
    let edit = main_only(vec![SimpleSelector::class("a"), SimpleSelector::class("b")]);
    let reconciled = reconciled.merge(&edit).activate_selectors(&edit);
    assert_eq!(reconciled.main_selector.selectors.len(), 2);
    assert_eq!(reconciled.to_css().unwrap(), ".a.b");
}

#[test]
fn test_edit_replacing_universal_still_renders() {
    let stored = main_only(vec![SimpleSelector::universal()]);
    let edit = main_only(vec![SimpleSelector::class("a")]);

    let reconciled = stored.merge(&edit).activate_selectors(&edit);
    assert_eq!(
        reconciled.main_selector.selectors,
        vec![
            SimpleSelector::universal().inactive(),
            SimpleSelector::class("a"),
        ]
    );
    assert_eq!(reconciled.to_css().unwrap(), ".a");

    // Going back to `*` switches the class off instead
    let edit = main_only(vec![SimpleSelector::universal()]);
    let reconciled = reconciled.merge(&edit).activate_selectors(&edit);
    assert_eq!(reconciled.to_css().unwrap(), "*");
}
