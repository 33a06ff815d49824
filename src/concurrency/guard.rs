//! RAII guards for tree access.
//!
//! These guards provide scoped access to a [`SharedBTree`](super::SharedBTree):
//! - [`TreeReadGuard`] - Shared read access (multiple allowed)
//! - [`TreeWriteGuard`] - Exclusive write access
//!
//! Both release the lock when dropped.

use std::ops::{Deref, DerefMut};

use parking_lot::{RwLockReadGuard, RwLockWriteGuard};

use crate::index::btree::BTree;

/// Guard for read-only tree access.
///
/// Multiple `TreeReadGuard`s can exist at the same time; writers wait
/// until all of them are dropped.
///
/// # Example
/// ```
/// use btreekit::SharedBTree;
///
/// let shared = SharedBTree::new(4);
/// shared.insert(1, "one");
///
/// let guard = shared.read();
/// assert_eq!(guard.find(&1), Some(&"one"));  // Deref to &BTree
/// ```
pub struct TreeReadGuard<'a, K, V> {
    lock: RwLockReadGuard<'a, BTree<K, V>>,
}

impl<'a, K, V> TreeReadGuard<'a, K, V> {
    pub(crate) fn new(lock: RwLockReadGuard<'a, BTree<K, V>>) -> Self {
        Self { lock }
    }
}

impl<K, V> Deref for TreeReadGuard<'_, K, V> {
    type Target = BTree<K, V>;

    #[inline]
    fn deref(&self) -> &BTree<K, V> {
        &self.lock
    }
}

/// Guard for exclusive write access to the tree.
///
/// Holds the write lock for its whole lifetime, so a batch of inserts made
/// through one guard is seen by readers all at once.
///
/// # Example
/// ```
/// use btreekit::SharedBTree;
///
/// let shared = SharedBTree::new(4);
/// {
///     let mut guard = shared.write();
///     for k in 0..10 {
///         guard.insert(k, k * k);  // DerefMut to &mut BTree
///     }
/// }
/// assert_eq!(shared.len(), 10);
/// ```
pub struct TreeWriteGuard<'a, K, V> {
    lock: RwLockWriteGuard<'a, BTree<K, V>>,
}

impl<'a, K, V> TreeWriteGuard<'a, K, V> {
    pub(crate) fn new(lock: RwLockWriteGuard<'a, BTree<K, V>>) -> Self {
        Self { lock }
    }
}

impl<K, V> Deref for TreeWriteGuard<'_, K, V> {
    type Target = BTree<K, V>;

    #[inline]
    fn deref(&self) -> &BTree<K, V> {
        &self.lock
    }
}

impl<K, V> DerefMut for TreeWriteGuard<'_, K, V> {
    #[inline]
    fn deref_mut(&mut self) -> &mut BTree<K, V> {
        &mut self.lock
    }
}
