//! Integration tests for complex selectors: rendering, specificity and
//! parsing.

use selkit_selector::{
    ComplexSelector, CompoundSelector, Operator, PseudoClass, PseudoClassKind, SelectorError,
    SimpleSelector, Tag,
};

fn compound(selectors: Vec<SimpleSelector>) -> CompoundSelector {
    CompoundSelector::new(selectors)
}

fn test_id() -> CompoundSelector {
    compound(vec![SimpleSelector::id("TEST_ID")])
}

#[test]
fn test_render_main_only() {
    let selector = ComplexSelector::new(test_id());
    assert_eq!(selector.to_css().unwrap(), "#TEST_ID");
}

#[test]
fn test_render_descendant() {
    let selector = ComplexSelector::new(test_id())
        .with_related(Operator::Descendant, compound(vec![SimpleSelector::class("test")]));
    assert_eq!(selector.to_css().unwrap(), ".test #TEST_ID");
}

#[test]
fn test_render_descendant_with_inactive_related() {
    let selector = ComplexSelector::new(test_id()).with_related(
        Operator::Descendant,
        compound(vec![SimpleSelector::class("test").inactive()]),
    );
    assert_eq!(selector.to_css().unwrap(), "#TEST_ID");
}

#[test]
fn test_render_combinators() {
    let related = compound(vec![SimpleSelector::class("list")]);
    let main = compound(vec![SimpleSelector::class("item")]);

    let cases = [
        (Operator::Child, ".list > .item"),
        (Operator::Adjacent, ".list + .item"),
        (Operator::GeneralSibling, ".list ~ .item"),
        (Operator::Descendant, ".list .item"),
    ];
    for (operator, expected) in cases {
        let selector = ComplexSelector::new(main.clone()).with_related(operator, related.clone());
        assert_eq!(selector.to_css().unwrap(), expected);
    }
}

#[test]
fn test_render_relational() {
    let main = compound(vec![SimpleSelector::class("container")]);
    let related = compound(vec![SimpleSelector::class("child")]);

    let has = ComplexSelector::new(main.clone()).with_related(Operator::Has, related.clone());
    assert_eq!(has.to_css().unwrap(), ".container:has(.child)");

    let not = ComplexSelector::new(main).with_related(Operator::Not, related);
    assert_eq!(not.to_css().unwrap(), ".container:not(.child)");
}

#[test]
fn test_render_propagates_universal_error() {
    let selector = ComplexSelector::new(test_id()).with_related(
        Operator::Child,
        compound(vec![SimpleSelector::universal(), SimpleSelector::class("a")]),
    );
    assert_eq!(selector.to_css(), Err(SelectorError::UniversalNotAlone));
}

#[test]
fn test_specificity_sums_both_compounds() {
    let selector: ComplexSelector = "#a.b > div:hover".parse().unwrap();
    assert_eq!(selector.specificity().value(), 110 + 11);
}

#[test]
fn test_parse_child_combinator() {
    let parsed = ComplexSelector::parse("#TEST_ID.test > .child", Some("")).unwrap();
    assert_eq!(
        parsed.main_selector,
        compound(vec![SimpleSelector::class("child")])
    );
    assert_eq!(parsed.operator, Some(Operator::Child));
    assert_eq!(
        parsed.related_selector,
        Some(compound(vec![
            SimpleSelector::id("TEST_ID"),
            SimpleSelector::class("test"),
        ]))
    );
    assert_eq!(parsed.at_rule.as_deref(), Some(""));
}

#[test]
fn test_parse_combinator_spacing() {
    for text in [".a>.b", ".a >.b", ".a> .b", "  .a   >   .b  "] {
        let parsed: ComplexSelector = text.parse().unwrap();
        assert_eq!(parsed.operator, Some(Operator::Child), "{text}");
        assert_eq!(parsed.to_css().unwrap(), ".a > .b", "{text}");
    }

    let parsed: ComplexSelector = "section   p".parse().unwrap();
    assert_eq!(parsed.operator, Some(Operator::Descendant));
    assert_eq!(parsed.to_css().unwrap(), "section p");
}

#[test]
fn test_parse_no_operator() {
    let parsed: ComplexSelector = "div#main.container".parse().unwrap();
    assert_eq!(parsed.operator, None);
    assert_eq!(parsed.related_selector, None);
    assert_eq!(parsed.main_selector.selectors[0], SimpleSelector::tag(Tag::Div));
}

#[test]
fn test_parse_relational() {
    let parsed: ComplexSelector = ".container:has(.child)".parse().unwrap();
    assert_eq!(
        parsed.main_selector,
        compound(vec![SimpleSelector::class("container")])
    );
    assert_eq!(parsed.operator, Some(Operator::Has));
    assert_eq!(
        parsed.related_selector,
        Some(compound(vec![SimpleSelector::class("child")]))
    );
}

#[test]
fn test_parse_relational_after_pseudo_class() {
    let parsed: ComplexSelector = "li:first-child:not([hidden])".parse().unwrap();
    assert_eq!(
        parsed.main_selector.pseudo_class,
        Some(PseudoClass::new(PseudoClassKind::FirstChild))
    );
    assert_eq!(parsed.operator, Some(Operator::Not));
    assert_eq!(parsed.to_css().unwrap(), "li:first-child:not([hidden])");
}

#[test]
fn test_parse_combinators_inside_groups_are_ignored() {
    let parsed = r#"li:nth-child(2n + 1)[title~="a > b"]"#.parse::<ComplexSelector>();
    // The pseudo-class must end the compound
    assert!(matches!(parsed, Err(SelectorError::TrailingInput(_))));

    let parsed: ComplexSelector = r#"li[title~="a > b"]:nth-child(2n + 1)"#.parse().unwrap();
    assert_eq!(parsed.operator, None);
    assert_eq!(
        parsed.main_selector.pseudo_class,
        Some(PseudoClass::with_param(PseudoClassKind::NthChild, "2n + 1"))
    );
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        ".a:has(.b".parse::<ComplexSelector>(),
        Err(SelectorError::UnbalancedParentheses(_))
    ));
    assert!(matches!(
        ".a:has(.b) .c".parse::<ComplexSelector>(),
        Err(SelectorError::TrailingInput(_))
    ));
    assert!(matches!(
        ".a:unknown".parse::<ComplexSelector>(),
        Err(SelectorError::UnknownPseudoClass(_))
    ));
}

#[test]
fn test_round_trip_canonical_selectors() {
    let selectors = [
        ComplexSelector::new(test_id()),
        ComplexSelector::new(compound(vec![
            SimpleSelector::tag(Tag::Div),
            SimpleSelector::id("main"),
            SimpleSelector::class("container"),
        ]))
        .with_at_rule("@media (max-width: 600px)"),
        ComplexSelector::new(compound(vec![SimpleSelector::class("item")]).with_pseudo_class(
            PseudoClass::with_param(PseudoClassKind::NthOfType, "odd"),
        ))
        .with_related(Operator::GeneralSibling, compound(vec![SimpleSelector::custom_tag("x-list")])),
        ComplexSelector::new(compound(vec![SimpleSelector::class("card")]))
            .with_related(Operator::Where, compound(vec![SimpleSelector::attribute("open")])),
        ComplexSelector::new(compound(vec![SimpleSelector::universal()]))
            .with_related(Operator::Child, compound(vec![SimpleSelector::tag(Tag::Ul)])),
    ];

    for selector in selectors {
        let css = selector.to_css().unwrap();
        let parsed = ComplexSelector::parse(&css, selector.at_rule.as_deref()).unwrap();
        assert_eq!(parsed, selector, "{css}");
        assert_eq!(parsed.to_css().unwrap(), css);
    }
}

#[test]
fn test_reserialization_is_stable_with_inactive_noise() {
    let selector = ComplexSelector::new(compound(vec![
        SimpleSelector::class("b").inactive(),
        SimpleSelector::class("a"),
        SimpleSelector::id("x"),
    ]))
    .with_related(
        Operator::Adjacent,
        compound(vec![SimpleSelector::tag(Tag::H2), SimpleSelector::class("z").inactive()]),
    );

    let css = selector.to_css().unwrap();
    assert_eq!(css, "h2 + #x.a");
    let reparsed: ComplexSelector = css.parse().unwrap();
    assert_eq!(reparsed.to_css().unwrap(), css);
}

#[test]
fn test_is_empty() {
    assert!(ComplexSelector::default().is_empty());
    let off = ComplexSelector::new(compound(vec![SimpleSelector::class("a").inactive()]));
    assert!(off.is_empty());
    assert!(!ComplexSelector::new(test_id()).is_empty());
}
