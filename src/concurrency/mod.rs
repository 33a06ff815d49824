//! Sharing a tree between threads.
//!
//! [`BTree`](crate::BTree) has no internal locking. This module provides
//! the external serialization it expects:
//! - [`SharedBTree`] - `Arc<RwLock<BTree>>` handle, many readers or one writer
//! - [`TreeReadGuard`] / [`TreeWriteGuard`] - RAII guards for scoped access

mod guard;
mod shared_btree;

pub use guard::{TreeReadGuard, TreeWriteGuard};
pub use shared_btree::SharedBTree;
