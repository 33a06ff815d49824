//! B-tree index implementation.
//!
//! # Components
//! - [`BTree`] - The ordered map: descent, insert with split propagation
//! - `node` - Node layout, in-node search, insert and balanced split
//! - [`BTreeStats`] - Operation counters
//! - `validate` - Structural invariant checker behind [`BTree::validate`]

mod node;
mod stats;
mod tree;
mod validate;

pub use stats::{BTreeStats, StatsSnapshot};
pub use tree::BTree;
