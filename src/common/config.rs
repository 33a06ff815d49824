//! Configuration constants and tree construction options.

use crate::common::{BranchingFactor, Result};

/// Smallest legal branching factor.
///
/// With `B = 1` a node could hold at most one key and non-root nodes
/// would be allowed to be empty, so the tree could not stay balanced.
pub const MIN_BRANCHING_FACTOR: usize = 2;

/// Branching factor used by [`BTreeConfig::default`].
///
/// # Node Sizing
/// With `B = 6`:
/// - max keys per node: 11
/// - max children per node: 12
/// - min keys per non-root node: 5
///
/// Small enough that a node's keys for small `K` fit in a couple of
/// cache lines, which is where linear search wins.
pub const DEFAULT_BRANCHING_FACTOR: usize = 6;

/// Key count above which [`SearchStrategy::Adaptive`] switches from a
/// linear scan to binary search.
///
/// A pure performance knob: both searches return the same answer.
pub const LINEAR_SEARCH_THRESHOLD: usize = 100;

/// How a node looks up a key among its own keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Always scan keys front to back.
    Linear,
    /// Always binary search.
    Binary,
    /// Linear while the node holds at most `threshold` keys, binary above.
    Adaptive { threshold: usize },
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::Adaptive {
            threshold: LINEAR_SEARCH_THRESHOLD,
        }
    }
}

/// Options for building a [`BTree`](crate::BTree).
///
/// # Example
/// ```
/// use btreekit::{BTree, BTreeConfig, SearchStrategy};
///
/// let config = BTreeConfig::default()
///     .with_branching_factor(32)
///     .with_search_strategy(SearchStrategy::Binary);
/// let tree: BTree<u64, String> = BTree::with_config(config).unwrap();
/// assert_eq!(tree.branching_factor().get(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BTreeConfig {
    /// Branching factor `B`, fixed for the lifetime of the tree.
    pub branching_factor: usize,

    /// In-node search strategy.
    pub search: SearchStrategy,
}

impl BTreeConfig {
    /// Set the branching factor.
    pub fn with_branching_factor(mut self, b: usize) -> Self {
        self.branching_factor = b;
        self
    }

    /// Set the in-node search strategy.
    pub fn with_search_strategy(mut self, search: SearchStrategy) -> Self {
        self.search = search;
        self
    }

    /// Check the options and return the validated branching factor.
    ///
    /// # Errors
    /// - `Error::InvalidBranchingFactor` if the branching factor is below
    ///   [`MIN_BRANCHING_FACTOR`]
    pub fn validate(&self) -> Result<BranchingFactor> {
        BranchingFactor::new(self.branching_factor)
    }
}

impl Default for BTreeConfig {
    fn default() -> Self {
        Self {
            branching_factor: DEFAULT_BRANCHING_FACTOR,
            search: SearchStrategy::default(),
        }
    }
}
