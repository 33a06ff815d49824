//! Property tests: the tree against `std::collections::BTreeMap` as a model.
//!
//! Low branching factors are used on purpose: they give deep trees and
//! exercise split propagation far more often than the default would.

mod common;

use proptest::prelude::*;
use std::collections::BTreeMap as StdMap;

use btreekit::{BTree, BTreeConfig, SearchStrategy};
use common::{make_matching_maps, small_int_pairs, string_u16_pairs};

fn check_round_trip<K, V>(tree: &BTree<K, V>, model: &StdMap<K, V>)
where
    K: Ord + std::fmt::Debug,
    V: PartialEq + std::fmt::Debug,
{
    assert_eq!(tree.len(), model.len());
    for (k, v) in model {
        assert_eq!(tree.find(k), Some(v), "key {:?}", k);
    }
}

proptest! {
    /// Ordering, balance and fill hold after any insert sequence.
    #[test]
    fn prop_invariants_hold(b in 2usize..8, pairs in small_int_pairs()) {
        let (tree, _) = make_matching_maps(b, pairs);
        prop_assert_eq!(tree.validate(), Ok(()));
    }

    /// Every inserted key maps to its most recent value.
    #[test]
    fn prop_round_trip(b in 2usize..8, pairs in small_int_pairs()) {
        let (tree, model) = make_matching_maps(b, pairs);
        check_round_trip(&tree, &model);
    }

    /// Keys never inserted are reported absent.
    #[test]
    fn prop_absent_keys(
        b in 2usize..6,
        pairs in small_int_pairs(),
        probes in prop::collection::vec(0u16..2048, 1..128),
    ) {
        let (tree, model) = make_matching_maps(b, pairs);
        for probe in probes {
            prop_assert_eq!(tree.find(&probe), model.get(&probe));
        }
    }

    /// Invariants hold after every single insert, not just at the end.
    #[test]
    fn prop_invariants_after_each_insert(
        b in 2usize..5,
        keys in prop::collection::vec(0i32..200, 0..160),
    ) {
        let mut tree = BTree::new(b);
        for k in keys {
            tree.insert(k, k);
            prop_assert_eq!(tree.validate(), Ok(()));
        }
    }

    /// Insert reports the value it replaced, exactly like std.
    #[test]
    fn prop_insert_return_matches_std(b in 2usize..6, pairs in small_int_pairs()) {
        let mut tree = BTree::new(b);
        let mut model = StdMap::new();
        for (k, v) in pairs {
            prop_assert_eq!(tree.insert(k, v), model.insert(k, v));
        }
    }

    #[test]
    fn prop_string_keys(b in 2usize..5, pairs in string_u16_pairs()) {
        let (tree, model) = make_matching_maps(b, pairs);
        prop_assert_eq!(tree.validate(), Ok(()));
        check_round_trip(&tree, &model);
    }

    /// The in-node search strategy never changes what the tree returns.
    #[test]
    fn prop_search_strategies_agree(
        b in 2usize..40,
        pairs in small_int_pairs(),
        probes in prop::collection::vec(0u16..1100, 1..64),
    ) {
        let build = |search| {
            let config = BTreeConfig::default()
                .with_branching_factor(b)
                .with_search_strategy(search);
            let mut tree = BTree::with_config(config).unwrap();
            for &(k, v) in &pairs {
                tree.insert(k, v);
            }
            tree
        };
        let linear = build(SearchStrategy::Linear);
        let binary = build(SearchStrategy::Binary);

        for probe in probes {
            prop_assert_eq!(linear.find(&probe), binary.find(&probe));
        }
    }
}
