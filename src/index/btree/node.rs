//! B-tree node: a bounded, ordered run of keys with aligned values and,
//! for internal nodes, one more child edge than keys.
//!
//! # Layout
//! ```text
//!            keys:   [ k0 | k1 | k2 ]
//!            vals:   [ v0 | v1 | v2 ]
//!           edges: [ e0 | e1 | e2 | e3 ]
//!
//!  all keys under e0 < k0 < keys under e1 < k1 < ... < k2 < keys under e3
//! ```
//!
//! Edges are [`NodeId`]s into the owning tree's arena. A leaf has no edges.
//!
//! # Capacity
//! For branching factor `B` a node holds at most `2B - 1` keys. A full node
//! is split into `B - 1` keys on the left, one promoted median, and `B - 1`
//! keys in a fresh right sibling.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::common::{BranchingFactor, NodeId, SearchStrategy};

/// Where a key sits relative to a node's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchResult {
    /// Exact hit at this key index.
    Found(usize),
    /// Miss. Index of the first key greater than the probe (or `len`).
    ///
    /// This is both the edge to descend into and the insertion position.
    GoDown(usize),
}

/// Separator entry pushed up to the parent after a split.
#[derive(Debug)]
pub(crate) struct Promoted<K, V> {
    pub key: K,
    pub val: V,
    /// Right half of the split node, not yet placed in the arena.
    pub sibling: Node<K, V>,
}

/// Result of [`Node::insert_or_split`].
#[derive(Debug)]
pub(crate) enum InsertOutcome<K, V> {
    /// The entry fit; nothing to propagate.
    Absorbed,
    /// The node was full and split; the caller must place the promoted
    /// entry one level up.
    Split(Promoted<K, V>),
}

/// A single B-tree node.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    keys: Vec<K>,
    vals: Vec<V>,
    edges: Vec<NodeId>,
    b: BranchingFactor,
}

impl<K, V> Node<K, V> {
    /// Create an empty leaf with room for a full node pre-reserved.
    pub(crate) fn new(b: BranchingFactor) -> Self {
        Self {
            keys: Vec::with_capacity(b.max_items()),
            vals: Vec::with_capacity(b.max_items()),
            edges: Vec::with_capacity(b.max_edges()),
            b,
        }
    }

    /// Create a root holding one separator and exactly two children.
    pub(crate) fn new_root(
        b: BranchingFactor,
        key: K,
        val: V,
        left: NodeId,
        right: NodeId,
    ) -> Self {
        let mut root = Self::new(b);
        root.keys.push(key);
        root.vals.push(val);
        root.edges.push(left);
        root.edges.push(right);
        root
    }

    /// Build a leaf from parallel key/value vectors.
    #[cfg(test)]
    pub(crate) fn from_entries(b: BranchingFactor, keys: Vec<K>, vals: Vec<V>) -> Self {
        assert_eq!(keys.len(), vals.len(), "keys and values must be aligned");
        let mut node = Self::new(b);
        node.keys.extend(keys);
        node.vals.extend(vals);
        node
    }

    #[cfg(test)]
    pub(crate) fn set_edges(&mut self, edges: Vec<NodeId>) {
        self.edges = edges;
    }

    #[cfg(test)]
    pub(crate) fn keys_mut(&mut self) -> &mut [K] {
        &mut self.keys
    }

    /// Drop entries past `len`, keeping keys and values aligned.
    #[cfg(test)]
    pub(crate) fn truncate(&mut self, len: usize) {
        self.keys.truncate(len);
        self.vals.truncate(len);
    }

    // ========================================================================
    // Shape
    // ========================================================================

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    /// True when the node holds `2B - 1` keys and cannot absorb another.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.keys.len() == self.b.max_items()
    }

    #[inline]
    pub(crate) fn branching_factor(&self) -> BranchingFactor {
        self.b
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub(crate) fn vals(&self) -> &[V] {
        &self.vals
    }

    #[inline]
    pub(crate) fn edges(&self) -> &[NodeId] {
        &self.edges
    }

    #[inline]
    pub(crate) fn val(&self, i: usize) -> &V {
        &self.vals[i]
    }

    #[inline]
    pub(crate) fn val_mut(&mut self, i: usize) -> &mut V {
        &mut self.vals[i]
    }

    /// Child at edge `i`, or `None` for a leaf.
    #[inline]
    pub(crate) fn edge(&self, i: usize) -> Option<NodeId> {
        self.edges.get(i).copied()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Search with the default adaptive strategy.
    #[cfg(test)]
    pub(crate) fn search<Q>(&self, key: &Q) -> SearchResult
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search_with(key, SearchStrategy::default())
    }

    pub(crate) fn search_with<Q>(&self, key: &Q, strategy: SearchStrategy) -> SearchResult
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match strategy {
            SearchStrategy::Linear => self.search_linear(key),
            SearchStrategy::Binary => self.search_binary(key),
            SearchStrategy::Adaptive { threshold } if self.keys.len() > threshold => {
                self.search_binary(key)
            }
            SearchStrategy::Adaptive { .. } => self.search_linear(key),
        }
    }

    /// Front-to-back scan. Cache friendly for small nodes.
    pub(crate) fn search_linear<Q>(&self, key: &Q) -> SearchResult
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        for (i, k) in self.keys.iter().enumerate() {
            match key.cmp(k.borrow()) {
                Ordering::Equal => return SearchResult::Found(i),
                // keys[i] is the first key above the probe, so edge i holds it
                Ordering::Less => return SearchResult::GoDown(i),
                Ordering::Greater => {}
            }
        }
        SearchResult::GoDown(self.keys.len())
    }

    /// O(log n) comparisons; pays off once nodes get wide.
    pub(crate) fn search_binary<Q>(&self, key: &Q) -> SearchResult
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.keys.binary_search_by(|k| k.borrow().cmp(key)) {
            Ok(i) => SearchResult::Found(i),
            Err(i) => SearchResult::GoDown(i),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Replace the value at key index `i`, returning the old one.
    pub(crate) fn replace_val(&mut self, i: usize, val: V) -> V {
        std::mem::replace(&mut self.vals[i], val)
    }

    /// Insert `key`/`val` at `pos`, and `edge` (for internal nodes) at
    /// `pos + 1`, to the right of the new key.
    ///
    /// Does not check capacity; see [`Node::insert_or_split`].
    ///
    /// # Panics
    /// Panics if `pos > len`.
    pub(crate) fn insert(&mut self, pos: usize, key: K, val: V, edge: Option<NodeId>) {
        assert!(
            pos <= self.keys.len(),
            "insert position {} out of range for node with {} keys",
            pos,
            self.keys.len()
        );
        debug_assert_eq!(
            self.is_leaf(),
            edge.is_none(),
            "leaves take no edge, internal nodes need one"
        );

        self.keys.insert(pos, key);
        self.vals.insert(pos, val);
        if let Some(edge) = edge {
            if !self.is_leaf() {
                self.edges.insert(pos + 1, edge);
            }
        }
    }

    /// Split a full node around its median.
    ///
    /// Keeps keys `[0, B-1)` in place, returns the median (index `B-1`) and
    /// a new sibling holding keys `[B, 2B-1)` plus, for internal nodes,
    /// edges `[B, 2B)`. Both halves end with exactly `B - 1` keys.
    ///
    /// # Panics
    /// Panics if the node is not full.
    pub(crate) fn split(&mut self) -> (K, V, Node<K, V>) {
        assert!(
            self.is_full(),
            "split requires a full node ({} of {} keys)",
            self.keys.len(),
            self.b.max_items()
        );

        let b = self.b.get();
        let mut sibling = Node::new(self.b);
        sibling.keys.extend(self.keys.drain(b..));
        sibling.vals.extend(self.vals.drain(b..));
        if !self.is_leaf() {
            sibling.edges.extend(self.edges.drain(b..));
        }

        // The median is now the last entry left behind.
        let key = self.keys.remove(b - 1);
        let val = self.vals.remove(b - 1);

        (key, val, sibling)
    }

    /// Insert at `pos`, splitting first if the node is already full.
    ///
    /// `pos` is the insertion position in the node as it is now. After a
    /// split, positions `< B` land in this node unchanged and positions
    /// `>= B` land in the sibling shifted left by `B` (the `B - 1` retained
    /// keys plus the promoted median).
    pub(crate) fn insert_or_split(
        &mut self,
        pos: usize,
        key: K,
        val: V,
        edge: Option<NodeId>,
    ) -> InsertOutcome<K, V> {
        if !self.is_full() {
            self.insert(pos, key, val, edge);
            return InsertOutcome::Absorbed;
        }

        let (mid_key, mid_val, mut sibling) = self.split();
        let b = self.b.get();
        if pos < b {
            self.insert(pos, key, val, edge);
        } else {
            sibling.insert(pos - b, key, val, edge);
        }

        debug_assert!(self.len() <= self.b.max_items());
        debug_assert!(sibling.len() <= self.b.max_items());

        InsertOutcome::Split(Promoted {
            key: mid_key,
            val: mid_val,
            sibling,
        })
    }
}
