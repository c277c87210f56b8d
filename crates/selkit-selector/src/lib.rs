//! CSS selector model, parser and merge algebra for visual page-builder editors.
//!
//! # Scope
//!
//! This crate implements the data side of a selector editor:
//! - **Selector model** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Simple selectors with an activation flag (type, custom element,
//!     class, ID, attribute, universal)
//!   - Compound selectors with an optional pseudo-class
//!   - One-hop complex selectors: a combinator or a relational
//!     pseudo-class (`:has`, `:not`, `:is`, `:where`)
//!
//! - **Parsing and serialization**
//!   - CSS text to structured selectors and back
//!   - Specificity calculation
//!
//! - **Editing support**
//!   - Validation and normalization of typed text
//!   - Ranked autocompletion and creation suggestions
//!   - Type-preserving rename
//!   - Merge and activation of an edit against a stored selector
//!
//! # Not Supported
//!
//! - Chains of more than one combinator
//! - More than one pseudo-class per compound selector
//! - Selector lists (`a, b`)
//!
//! Everything is a pure function over values: nothing is stored and
//! nothing is shared, so any function may be called from any thread.

/// Static vocabularies: tag names and attribute names.
pub mod catalog;
/// Complex selectors per [§ 4.3](https://www.w3.org/TR/selectors-4/#complex).
pub mod complex;
/// Compound selectors per [§ 4.2](https://www.w3.org/TR/selectors-4/#compound).
pub mod compound;
/// Parse and render errors.
pub mod error;
/// Merge and activation of edited selectors.
pub mod merge;
/// Combinators and relational pseudo-classes.
pub mod operator;
mod parser;
/// Pseudo-classes per [§ 4](https://www.w3.org/TR/selectors-4/#pseudo-classes).
pub mod pseudo_class;
/// Type-preserving rename of simple selectors.
pub mod rename;
/// Simple selectors per [§ 5](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// and [§ 6](https://www.w3.org/TR/selectors-4/#attribute-selectors).
pub mod simple;
/// Specificity per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;
/// Autocompletion for the selector input.
pub mod suggest;
/// Validation of typed selector text.
pub mod validate;

// Re-exports for convenience
pub use catalog::{ATTRIBUTES, Tag};
pub use complex::ComplexSelector;
pub use compound::CompoundSelector;
pub use error::{Result, SelectorError};
pub use merge::{activate_selectors, merge};
pub use operator::Operator;
pub use pseudo_class::{PseudoClass, PseudoClassKind};
pub use rename::{RenameOutcome, rename_selector};
pub use simple::{
    AttributeMatch, AttributeOperator, AttributeSelector, SimpleSelector, SimpleSelectorKind,
    SimpleSelectorType, is_same_selector,
};
pub use specificity::Specificity;
pub use suggest::{SimpleSelectorSuggestion, creation_suggestions, onboarding_suggestions, suggest};
pub use validate::validate;
