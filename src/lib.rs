//! btreekit - A generic in-memory ordered B-tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            btreekit                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Concurrency Layer (concurrency/)               │   │
//! │  │     SharedBTree = Arc<RwLock<BTree>> + RAII guards       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Tree (index/btree/tree.rs)                  │   │
//! │  │   find: descend   insert: descend, split, propagate up   │   │
//! │  │   node arena: Vec<Node> addressed by NodeId              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Node (index/btree/node.rs)                  │   │
//! │  │   search (linear | binary)  insert  split  insert/split  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Common (common/)                         │   │
//! │  │   BranchingFactor  NodeId  BTreeConfig  Error            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (BranchingFactor, NodeId, Error, config)
//! - [`index`] - Index structures (B-tree)
//! - [`concurrency`] - Lock-wrapped tree for multi-threaded use
//!
//! # Quick Start
//! ```
//! use btreekit::BTree;
//!
//! let mut tree = BTree::new(2);
//! tree.insert("kiwi", 3);
//! tree.insert("apple", 5);
//! tree.insert("kiwi", 4);
//!
//! assert_eq!(tree.find("kiwi"), Some(&4));
//! assert_eq!(tree.len(), 2);
//! assert!(tree.validate().is_ok());
//! ```

pub mod common;
pub mod concurrency;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_BRANCHING_FACTOR, LINEAR_SEARCH_THRESHOLD};
pub use common::{BTreeConfig, BranchingFactor, Error, NodeId, Result, SearchStrategy};

pub use concurrency::{SharedBTree, TreeReadGuard, TreeWriteGuard};
pub use index::btree::{BTree, BTreeStats, StatsSnapshot};
