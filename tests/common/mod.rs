//! Shared helpers for the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;
use std::collections::BTreeMap as StdMap;

use btreekit::BTree;

/// Route `tracing` output through the test harness.
///
/// Set `RUST_LOG=btreekit=trace` to see every split.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Small key range so duplicates (overwrites) are common.
pub fn small_int_pairs() -> impl Strategy<Value = Vec<(u16, u32)>> {
    prop::collection::vec((0u16..1024, any::<u32>()), 0..512)
}

pub fn string_u16_pairs() -> impl Strategy<Value = Vec<(String, u16)>> {
    prop::collection::vec(("[a-z]{0,3}", any::<u16>()), 0..512)
}

/// Build a tree and the std model from the same insert sequence.
pub fn make_matching_maps<K, V>(b: usize, pairs: Vec<(K, V)>) -> (BTree<K, V>, StdMap<K, V>)
where
    K: Ord + Clone,
    V: Clone,
{
    let mut tree = BTree::new(b);
    let mut model = StdMap::new();
    for (k, v) in pairs {
        tree.insert(k.clone(), v.clone());
        model.insert(k, v);
    }
    (tree, model)
}
