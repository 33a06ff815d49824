//! Branching factor type.

use std::fmt;

use crate::common::config::MIN_BRANCHING_FACTOR;
use crate::common::{Error, Result};

/// The branching factor `B` of a tree.
///
/// Every node capacity derives from it:
/// - at most `2B - 1` keys (`max_items`)
/// - at most `2B` children (`max_edges`)
/// - at least `B - 1` keys for every non-root node (`min_items`)
///
/// A `BranchingFactor` can only be built through [`BranchingFactor::new`],
/// so holding one means `B >= 2`.
///
/// # Example
/// ```
/// use btreekit::BranchingFactor;
///
/// let b = BranchingFactor::new(3).unwrap();
/// assert_eq!(b.max_items(), 5);
/// assert_eq!(b.max_edges(), 6);
/// assert_eq!(b.min_items(), 2);
/// assert!(BranchingFactor::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchingFactor(usize);

impl BranchingFactor {
    /// Validate and wrap a branching factor.
    ///
    /// # Errors
    /// - `Error::InvalidBranchingFactor` if `b < 2`
    pub fn new(b: usize) -> Result<Self> {
        if b < MIN_BRANCHING_FACTOR {
            return Err(Error::InvalidBranchingFactor(b));
        }
        Ok(BranchingFactor(b))
    }

    /// The raw value of `B`.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Maximum number of keys a node may hold (`2B - 1`).
    #[inline]
    pub fn max_items(&self) -> usize {
        2 * self.0 - 1
    }

    /// Maximum number of children a node may have (`2B`).
    #[inline]
    pub fn max_edges(&self) -> usize {
        2 * self.0
    }

    /// Minimum number of keys for a non-root node (`B - 1`).
    #[inline]
    pub fn min_items(&self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for BranchingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B={}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branching_factor_bounds() {
        let b = BranchingFactor::new(2).unwrap();
        assert_eq!(b.get(), 2);
        assert_eq!(b.max_items(), 3);
        assert_eq!(b.max_edges(), 4);
        assert_eq!(b.min_items(), 1);
    }

    #[test]
    fn test_branching_factor_rejects_small() {
        assert_eq!(
            BranchingFactor::new(0),
            Err(Error::InvalidBranchingFactor(0))
        );
        assert_eq!(
            BranchingFactor::new(1),
            Err(Error::InvalidBranchingFactor(1))
        );
    }

    #[test]
    fn test_branching_factor_display() {
        assert_eq!(format!("{}", BranchingFactor::new(6).unwrap()), "B=6");
    }
}
