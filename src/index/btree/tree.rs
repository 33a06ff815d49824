//! The B-tree: an arena of nodes, a root, and the branching factor.

use std::borrow::Borrow;
use std::sync::atomic::Ordering;

use tracing::{debug, trace};

use crate::common::config::DEFAULT_BRANCHING_FACTOR;
use crate::common::{BTreeConfig, BranchingFactor, NodeId, Result, SearchStrategy};
use crate::index::btree::node::{InsertOutcome, Node, SearchResult};
use crate::index::btree::BTreeStats;

/// An ordered map backed by a B-tree.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                        BTree<K, V>                        │
/// │  root: NodeId ──┐                                         │
/// │                 ▼                                         │
/// │  nodes: Vec<Node>  [Node0] [Node1] [Node2] [Node3] ...    │
/// │                                                           │
/// │  b: BranchingFactor   len   depth   stats: BTreeStats     │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// Nodes live in an arena and refer to their children by [`NodeId`]. Every
/// node except the root is referenced by exactly one parent edge. There is
/// no deletion, so the arena only grows: one node per split.
///
/// # Thread Safety
/// Not internally synchronized. Wrap it in a lock (see
/// [`SharedBTree`](crate::SharedBTree)) to share it between threads.
///
/// # Example
/// ```
/// use btreekit::BTree;
///
/// let mut tree = BTree::new(2);
/// for k in [10, 20, 30, 40] {
///     tree.insert(k, k * 100);
/// }
///
/// assert_eq!(tree.find(&30), Some(&3000));
/// assert_eq!(tree.find(&35), None);
/// assert_eq!(tree.depth(), 2);
/// ```
#[derive(Debug)]
pub struct BTree<K, V> {
    /// Every node ever created, indexed by `NodeId`.
    nodes: Vec<Node<K, V>>,

    /// The node owning the whole keyspace.
    root: NodeId,

    /// Branching factor (immutable after construction).
    b: BranchingFactor,

    /// How nodes search their own keys.
    search: SearchStrategy,

    /// Number of entries.
    len: usize,

    /// Number of levels; a lone root leaf is depth 1.
    depth: usize,

    /// Operation statistics.
    stats: BTreeStats,
}

impl<K, V> BTree<K, V> {
    /// Create an empty tree with branching factor `b`.
    ///
    /// # Panics
    /// Panics if `b < 2`. Use [`BTree::with_config`] for a fallible
    /// constructor.
    pub fn new(b: usize) -> Self {
        match Self::with_config(BTreeConfig::default().with_branching_factor(b)) {
            Ok(tree) => tree,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create an empty tree from a config.
    ///
    /// # Errors
    /// - `Error::InvalidBranchingFactor` if the branching factor is below 2
    pub fn with_config(config: BTreeConfig) -> Result<Self> {
        let b = config.validate()?;
        debug!(branching_factor = b.get(), search = ?config.search, "created B-tree");

        Ok(Self {
            nodes: vec![Node::new(b)],
            root: NodeId::new(0),
            b,
            search: config.search,
            len: 0,
            depth: 1,
            stats: BTreeStats::new(),
        })
    }

    // ========================================================================
    // Public API: Info
    // ========================================================================

    /// Number of entries in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels from the root to any leaf (all leaves share it).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn branching_factor(&self) -> BranchingFactor {
        self.b
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The config this tree was built with.
    pub fn config(&self) -> BTreeConfig {
        BTreeConfig {
            branching_factor: self.b.get(),
            search: self.search,
        }
    }

    /// Get tree statistics.
    pub fn stats(&self) -> &BTreeStats {
        &self.stats
    }

    // ========================================================================
    // Internal: Arena access
    // ========================================================================

    #[inline]
    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Put a new root above the old one, adding a level.
    fn grow_root(&mut self, key: K, val: V, sibling: NodeId) {
        let old_root = self.root;
        let new_root = Node::new_root(self.b, key, val, old_root, sibling);
        self.root = self.alloc(new_root);
        self.depth += 1;
        self.stats.root_splits.fetch_add(1, Ordering::Relaxed);

        debug!(
            depth = self.depth,
            nodes = self.nodes.len(),
            root = %self.root,
            "root split, tree grew a level"
        );
    }
}

impl<K: Ord, V> BTree<K, V> {
    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Look up `key`, returning a reference to its value.
    ///
    /// Read-only descent from the root; never allocates.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let hit = self.locate(key);
        self.stats.record_lookup(hit.is_some());
        hit.map(|(id, i)| self.node(id).val(i))
    }

    /// Look up `key`, returning a mutable reference to its value.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let hit = self.locate(key);
        self.stats.record_lookup(hit.is_some());
        let (id, i) = hit?;
        Some(self.nodes[id.0].val_mut(i))
    }

    /// Whether `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Descend until an exact hit or a leaf miss.
    fn locate<Q>(&self, key: &Q) -> Option<(NodeId, usize)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        loop {
            let node = self.node(curr);
            match node.search_with(key, self.search) {
                SearchResult::Found(i) => return Some((curr, i)),
                // No edge means we are at a leaf: the key is absent.
                SearchResult::GoDown(i) => curr = node.edge(i)?,
            }
        }
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert `key` with `val`.
    ///
    /// If the key already exists its value is overwritten in place and the
    /// previous value is returned; the key count does not change.
    ///
    /// Otherwise the entry goes into the leaf where the search ended. A full
    /// node splits and pushes its median into the parent, which may split in
    /// turn; a root split grows the tree by one level.
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        // (ancestor, edge taken) for every internal node on the way down
        let mut path: Vec<(NodeId, usize)> = Vec::with_capacity(self.depth);
        let mut curr = self.root;

        let pos = loop {
            let node = &self.nodes[curr.0];
            let i = match node.search_with(&key, self.search) {
                SearchResult::Found(i) => {
                    self.stats.overwrites.fetch_add(1, Ordering::Relaxed);
                    return Some(self.nodes[curr.0].replace_val(i, val));
                }
                SearchResult::GoDown(i) => i,
            };
            match node.edge(i) {
                Some(child) => {
                    path.push((curr, i));
                    curr = child;
                }
                None => break i,
            }
        };

        self.len += 1;
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);

        let mut outcome = self.nodes[curr.0].insert_or_split(pos, key, val, None);
        let mut level = self.depth;
        loop {
            let promoted = match outcome {
                InsertOutcome::Absorbed => return None,
                InsertOutcome::Split(promoted) => promoted,
            };
            let sibling = self.alloc(promoted.sibling);
            self.stats.node_splits.fetch_add(1, Ordering::Relaxed);
            trace!(level = level, node = %curr, sibling = %sibling, "node split");

            match path.pop() {
                Some((parent, pos)) => {
                    outcome = self.nodes[parent.0].insert_or_split(
                        pos,
                        promoted.key,
                        promoted.val,
                        Some(sibling),
                    );
                    curr = parent;
                    level -= 1;
                }
                None => {
                    self.grow_root(promoted.key, promoted.val, sibling);
                    return None;
                }
            }
        }
    }
}

impl<K, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCHING_FACTOR)
    }
}
