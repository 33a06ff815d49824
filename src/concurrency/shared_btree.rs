//! A B-tree shared between threads behind a single reader-writer lock.

use std::borrow::Borrow;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::common::{BTreeConfig, Result};
use crate::concurrency::{TreeReadGuard, TreeWriteGuard};
use crate::index::btree::{BTree, StatsSnapshot};

/// A cloneable handle to a [`BTree`] guarded by one `RwLock`.
///
/// The tree itself is not synchronized; this handle serializes access from
/// the outside: many concurrent readers or one writer. Every operation
/// takes the lock once and runs to completion, so a reader never sees a
/// node that has split but is not yet linked into its parent.
///
/// # Thread Safety
/// - `inner`: `RwLock` — lookups share, inserts are exclusive
/// - statistics are atomic inside the tree, readable under a read lock
///
/// # Example
/// ```
/// use btreekit::SharedBTree;
/// use std::thread;
///
/// let shared = SharedBTree::new(3);
/// let handles: Vec<_> = (0..4u32)
///     .map(|t| {
///         let shared = shared.clone();
///         thread::spawn(move || {
///             for i in 0..25 {
///                 shared.insert(t * 100 + i, t);
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(shared.len(), 100);
/// ```
pub struct SharedBTree<K, V> {
    inner: Arc<RwLock<BTree<K, V>>>,
}

impl<K, V> SharedBTree<K, V> {
    /// Create an empty shared tree with branching factor `b`.
    ///
    /// # Panics
    /// Panics if `b < 2`.
    pub fn new(b: usize) -> Self {
        Self::from_tree(BTree::new(b))
    }

    /// Create an empty shared tree from a config.
    ///
    /// # Errors
    /// - `Error::InvalidBranchingFactor` if the branching factor is below 2
    pub fn with_config(config: BTreeConfig) -> Result<Self> {
        Ok(Self::from_tree(BTree::with_config(config)?))
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: BTree<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Acquire shared read access.
    pub fn read(&self) -> TreeReadGuard<'_, K, V> {
        TreeReadGuard::new(self.inner.read())
    }

    /// Acquire exclusive write access.
    pub fn write(&self) -> TreeWriteGuard<'_, K, V> {
        TreeWriteGuard::new(self.inner.write())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of the tree's statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats().snapshot()
    }
}

impl<K: Ord, V> SharedBTree<K, V> {
    /// Look up `key` and clone its value out from under the read lock.
    pub fn find<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.inner.read().find(key).cloned()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    /// Insert under the write lock. Same contract as [`BTree::insert`].
    pub fn insert(&self, key: K, val: V) -> Option<V> {
        self.inner.write().insert(key, val)
    }
}

impl<K, V> Clone for SharedBTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedBTree<K, V> {
    fn default() -> Self {
        Self::from_tree(BTree::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_basic() {
        let shared = SharedBTree::new(2);
        assert!(shared.is_empty());

        assert_eq!(shared.insert("b", 2), None);
        assert_eq!(shared.insert("a", 1), None);
        assert_eq!(shared.insert("b", 20), Some(2));

        assert_eq!(shared.find("b"), Some(20));
        assert_eq!(shared.find("z"), None);
        assert!(shared.contains_key("a"));
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn test_clones_share_one_tree() {
        let a = SharedBTree::new(3);
        let b = a.clone();
        a.insert(1, 'x');
        assert_eq!(b.find(&1), Some('x'));
    }

    #[test]
    fn test_write_guard_batch() {
        let shared = SharedBTree::new(2);
        {
            let mut guard = shared.write();
            for k in 0..20 {
                guard.insert(k, k);
            }
            assert!(guard.validate().is_ok());
        }
        let guard = shared.read();
        assert_eq!(guard.len(), 20);
        assert_eq!(guard.depth(), 3);
    }

    #[test]
    fn test_concurrent_writers() {
        let shared = SharedBTree::new(3);
        let handles: Vec<_> = (0..8u32)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        shared.insert(i * 8 + t, t);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.len(), 1600);
        assert!(shared.read().validate().is_ok());
        for k in 0..1600u32 {
            assert_eq!(shared.find(&k), Some(k % 8));
        }
    }

    #[test]
    fn test_stats_snapshot() {
        let shared = SharedBTree::new(2);
        shared.insert(1, ());
        shared.find(&1);
        let snapshot = shared.stats();
        assert_eq!(snapshot.inserts, 1);
        assert_eq!(snapshot.hits, 1);
    }
}
