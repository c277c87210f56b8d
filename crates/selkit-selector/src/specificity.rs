//! [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)"
///
/// The selector picker shows the weighted score from [`Specificity::value`]
/// (A × 100 + B × 10 + C) and sorts with it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Zero specificity (universal selector, empty compound).
    pub const ZERO: Self = Self(0, 0, 0);
    /// One ID selector.
    pub const ID: Self = Self(1, 0, 0);
    /// One class, attribute or pseudo-class selector.
    pub const CLASS: Self = Self(0, 1, 0);
    /// One type selector.
    pub const TYPE: Self = Self(0, 0, 1);

    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// The weighted score: id = 100, class/attribute/pseudo-class = 10, type = 1.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 * 100 + self.1 * 10 + self.2
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::Specificity;

    #[test]
    fn weighted_value() {
        assert_eq!(Specificity::new(1, 2, 0).value(), 120);
        assert_eq!((Specificity::ID + Specificity::TYPE).value(), 101);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Specificity(1, 0, 0) > Specificity(0, 99, 99));
    }

    #[test]
    fn sums_components() {
        let total: Specificity = [Specificity::CLASS, Specificity::CLASS, Specificity::TYPE]
            .into_iter()
            .sum();
        assert_eq!(total, Specificity(0, 2, 1));
    }
}
