//! HTML attribute names offered for attribute selectors.
//!
//! Only names in this table (plus `data-*` names) are accepted when the user
//! types an attribute selector.

/// Attribute names the editor knows about.
pub const ATTRIBUTES: &[&str] = &[
    "accept",
    "accept-charset",
    "accesskey",
    "action",
    "alt",
    "aria-checked",
    "aria-current",
    "aria-disabled",
    "aria-expanded",
    "aria-hidden",
    "aria-label",
    "aria-selected",
    "autocomplete",
    "autofocus",
    "autoplay",
    "checked",
    "cite",
    "cols",
    "colspan",
    "content",
    "contenteditable",
    "controls",
    "datetime",
    "dir",
    "disabled",
    "download",
    "draggable",
    "enctype",
    "for",
    "form",
    "headers",
    "height",
    "hidden",
    "high",
    "href",
    "hreflang",
    "lang",
    "list",
    "loading",
    "loop",
    "low",
    "max",
    "maxlength",
    "media",
    "method",
    "min",
    "minlength",
    "multiple",
    "muted",
    "name",
    "novalidate",
    "open",
    "optimum",
    "pattern",
    "placeholder",
    "poster",
    "preload",
    "readonly",
    "rel",
    "required",
    "reversed",
    "role",
    "rows",
    "rowspan",
    "sandbox",
    "scope",
    "selected",
    "shape",
    "size",
    "sizes",
    "span",
    "spellcheck",
    "src",
    "srcset",
    "start",
    "step",
    "tabindex",
    "target",
    "title",
    "translate",
    "type",
    "value",
    "width",
    "wrap",
];

/// Whether `name` appears in [`ATTRIBUTES`].
#[must_use]
pub fn is_known_attribute(name: &str) -> bool {
    ATTRIBUTES.contains(&name)
}
