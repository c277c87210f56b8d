//! Errors raised by selector parsing and serialization.
//!
//! Validation and suggestion never fail; they report a negative result in
//! their return type instead. Everything here is fatal to the single
//! operation that raised it and is meant to be shown by the caller.

use thiserror::Error;

/// Errors produced while parsing or rendering selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The pseudo-class name is not in the pseudo-class catalog.
    #[error("unknown pseudo-class `{0}`")]
    UnknownPseudoClass(String),

    /// No operator in the operator catalog occurs in the text.
    #[error("no known operator in `{0}`")]
    UnknownOperator(String),

    /// A compound selector holds the universal selector next to other selectors.
    #[error("the universal selector `*` must be the only selector in its compound")]
    UniversalNotAlone,

    /// A token could not be read as a simple selector.
    #[error("invalid simple selector `{0}`")]
    InvalidSimpleSelector(String),

    /// An attribute selector is missing its closing bracket or quote.
    #[error("unterminated attribute selector in `{0}`")]
    UnterminatedAttribute(String),

    /// Parentheses do not balance.
    #[error("unbalanced parentheses in `{0}`")]
    UnbalancedParentheses(String),

    /// Text remains after the last supported component.
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SelectorError>;
