//! Structural invariant checking.
//!
//! [`BTree::validate`] walks every reachable node and reports the first
//! broken invariant. Inserts keep these invariants by construction, so a
//! failure here always means a bug.

use crate::common::{Error, NodeId, Result};
use crate::index::btree::BTree;

/// Running totals collected during the walk.
struct Walk {
    visited: Vec<bool>,
    entries: usize,
    leaf_depth: Option<usize>,
}

impl<K: Ord, V> BTree<K, V> {
    /// Check every structural invariant of the tree.
    ///
    /// - Ordering: keys strictly increase within a node, and every subtree
    ///   lies strictly between the separators around its edge
    /// - Balance: all leaves sit at depth [`depth`](BTree::depth)
    /// - Fill: non-root nodes hold `B-1 ..= 2B-1` keys, the root at most
    ///   `2B-1` and zero only when the tree is empty
    /// - Shape: values align with keys, internal nodes have `keys + 1`
    ///   edges, every node is reachable from exactly one edge
    /// - Bookkeeping: [`len`](BTree::len) matches the number of entries
    ///
    /// # Errors
    /// - `Error::InvariantViolation` naming the offending node
    pub fn validate(&self) -> Result<()> {
        let mut walk = Walk {
            visited: vec![false; self.node_count()],
            entries: 0,
            leaf_depth: None,
        };

        let root = self.root();
        if self.node(root).len() == 0 && !self.is_empty() {
            return Err(Error::invariant(root, "root is empty in a non-empty tree"));
        }

        self.check_node(root, None, None, 1, &mut walk)?;

        if walk.entries != self.len() {
            return Err(Error::invariant(
                root,
                format!("tree reports {} entries, found {}", self.len(), walk.entries),
            ));
        }
        if let Some(orphan) = walk.visited.iter().position(|seen| !seen) {
            return Err(Error::invariant(
                NodeId::new(orphan),
                "node is not reachable from the root",
            ));
        }
        Ok(())
    }

    fn check_node(
        &self,
        id: NodeId,
        lower: Option<&K>,
        upper: Option<&K>,
        level: usize,
        walk: &mut Walk,
    ) -> Result<()> {
        if std::mem::replace(&mut walk.visited[id.0], true) {
            return Err(Error::invariant(id, "node is reachable from more than one edge"));
        }

        let node = self.node(id);
        let b = self.branching_factor();
        let keys = node.keys();

        if node.branching_factor() != b {
            return Err(Error::invariant(
                id,
                format!("node has {}, tree has {}", node.branching_factor(), b),
            ));
        }
        if node.vals().len() != keys.len() {
            return Err(Error::invariant(
                id,
                format!("{} keys but {} values", keys.len(), node.vals().len()),
            ));
        }

        let min = if id == self.root() { 0 } else { b.min_items() };
        if keys.len() < min || keys.len() > b.max_items() {
            return Err(Error::invariant(
                id,
                format!(
                    "holds {} keys, allowed {}..={}",
                    keys.len(),
                    min,
                    b.max_items()
                ),
            ));
        }

        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::invariant(id, "keys are not strictly increasing"));
        }
        if let (Some(lower), Some(first)) = (lower, keys.first()) {
            if first <= lower {
                return Err(Error::invariant(id, "key not above the separator to its left"));
            }
        }
        if let (Some(upper), Some(last)) = (upper, keys.last()) {
            if last >= upper {
                return Err(Error::invariant(id, "key not below the separator to its right"));
            }
        }

        walk.entries += keys.len();

        if node.is_leaf() {
            let expected = *walk.leaf_depth.get_or_insert(level);
            if level != expected || level != self.depth() {
                return Err(Error::invariant(
                    id,
                    format!(
                        "leaf at depth {}, expected {} (tree depth {})",
                        level,
                        expected,
                        self.depth()
                    ),
                ));
            }
            return Ok(());
        }

        if node.edges().len() != keys.len() + 1 {
            return Err(Error::invariant(
                id,
                format!("{} keys but {} edges", keys.len(), node.edges().len()),
            ));
        }

        for (i, &child) in node.edges().iter().enumerate() {
            if child.0 >= walk.visited.len() {
                return Err(Error::invariant(id, format!("edge to unknown {}", child)));
            }
            let lo = if i == 0 { lower } else { keys.get(i - 1) };
            let hi = if i == keys.len() { upper } else { keys.get(i) };
            self.check_node(child, lo, hi, level + 1, walk)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::common::{Error, NodeId};
    use crate::index::btree::BTree;

    fn tree_with(b: usize, n: i32) -> BTree<i32, i32> {
        let mut tree = BTree::new(b);
        for k in 0..n {
            tree.insert(k, k);
        }
        tree
    }

    fn reason(err: Error) -> String {
        match err {
            Error::InvariantViolation { reason, .. } => reason,
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_tree_is_valid() {
        let tree: BTree<i32, i32> = BTree::new(2);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_grown_tree_is_valid() {
        for b in 2..=6 {
            let tree = tree_with(b, 300);
            assert!(tree.validate().is_ok(), "B={}", b);
        }
    }

    #[test]
    fn test_detects_unordered_keys() {
        let mut tree = tree_with(3, 3);
        let root = tree.root();
        tree.node_mut(root).keys_mut().swap(0, 2);

        let err = tree.validate().unwrap_err();
        assert_eq!(reason(err), "keys are not strictly increasing");
    }

    #[test]
    fn test_detects_separator_violation() {
        let mut tree = tree_with(2, 4);
        // root {1}, left {0}, right {2, 3}; push a too-small key into the right leaf
        let right = tree.node(tree.root()).edges()[1];
        tree.node_mut(right).keys_mut()[0] = -1;

        let err = tree.validate().unwrap_err();
        assert_eq!(reason(err), "key not above the separator to its left");
    }

    #[test]
    fn test_detects_underfull_node() {
        let mut tree = tree_with(3, 6);
        let left = tree.node(tree.root()).edges()[0];
        tree.node_mut(left).truncate(1);

        let err = tree.validate().unwrap_err();
        assert!(reason(err).starts_with("holds 1 keys"));
    }

    #[test]
    fn test_detects_len_mismatch() {
        let mut tree = tree_with(2, 1);
        tree.insert(1, 1);
        let root = tree.root();
        tree.node_mut(root).truncate(1);

        match tree.validate().unwrap_err() {
            Error::InvariantViolation { node, reason } => {
                assert_eq!(node, NodeId::new(0));
                assert_eq!(reason, "tree reports 2 entries, found 1");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
