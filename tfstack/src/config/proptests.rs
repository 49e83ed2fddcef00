//! Property-based tests for the deep merge.

use super::merger::ConfigMerger;
use super::ConfigTree;
use proptest::prelude::*;
use serde_yaml::Mapping;

// Strategy for scalar leaves
fn scalar_strategy() -> impl Strategy<Value = ConfigTree> {
    prop_oneof![
        Just(ConfigTree::Null),
        any::<bool>().prop_map(ConfigTree::Bool),
        any::<i64>().prop_map(ConfigTree::from),
        "[a-z0-9.-]{0,12}".prop_map(ConfigTree::String),
    ]
}

// Strategy for arbitrary nested trees
fn tree_strategy() -> impl Strategy<Value = ConfigTree> {
    scalar_strategy().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(ConfigTree::Sequence),
            prop::collection::btree_map("[a-e]", inner, 0..5).prop_map(|entries| {
                let mut mapping = Mapping::new();
                for (key, value) in entries {
                    mapping.insert(ConfigTree::String(key), value);
                }
                ConfigTree::Mapping(mapping)
            }),
        ]
    })
}

// Strategy for top-level mappings with keys from a given alphabet
fn mapping_strategy(keys: &'static str) -> impl Strategy<Value = Mapping> {
    prop::collection::btree_map(keys, tree_strategy(), 0..6).prop_map(|entries| {
        let mut mapping = Mapping::new();
        for (key, value) in entries {
            mapping.insert(ConfigTree::String(key), value);
        }
        mapping
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // Disjoint mappings merge to their union with nothing lost
    #[test]
    fn merge_disjoint_is_union(
        left in mapping_strategy("[a-f]"),
        right in mapping_strategy("[g-m]"),
    ) {
        let merged = ConfigMerger::merge(
            &ConfigTree::Mapping(left.clone()),
            &ConfigTree::Mapping(right.clone()),
        );
        let merged = merged.as_mapping().unwrap();

        prop_assert_eq!(merged.len(), left.len() + right.len());
        for (key, value) in left.iter().chain(right.iter()) {
            prop_assert_eq!(merged.get(key), Some(value));
        }
    }

    // An empty overlay and an empty base are both identities
    #[test]
    fn merge_empty_is_identity(tree in mapping_strategy("[a-f]")) {
        let tree = ConfigTree::Mapping(tree);
        let empty = ConfigTree::Mapping(Mapping::new());

        prop_assert_eq!(&ConfigMerger::merge(&tree, &empty), &tree);
        prop_assert_eq!(&ConfigMerger::merge(&empty, &tree), &tree);
    }

    // Every key of either side appears in the result
    #[test]
    fn merge_keeps_all_keys(
        base in mapping_strategy("[a-f]"),
        overlay in mapping_strategy("[a-f]"),
    ) {
        let merged = ConfigMerger::merge(
            &ConfigTree::Mapping(base.clone()),
            &ConfigTree::Mapping(overlay.clone()),
        );
        let merged = merged.as_mapping().unwrap();

        for key in base.keys().chain(overlay.keys()) {
            prop_assert!(merged.contains_key(key));
        }
    }

    // Scalars in the overlay always win
    #[test]
    fn merge_overlay_scalar_wins(
        base in mapping_strategy("[a-f]"),
        key in "[a-f]",
        scalar in scalar_strategy(),
    ) {
        let mut overlay = Mapping::new();
        overlay.insert(ConfigTree::String(key.clone()), scalar.clone());

        let merged = ConfigMerger::merge(
            &ConfigTree::Mapping(base),
            &ConfigTree::Mapping(overlay),
        );
        prop_assert_eq!(&merged[key.as_str()], &scalar);
    }

    // Sequences under the same key concatenate in order
    #[test]
    fn merge_sequences_concatenate(
        first in prop::collection::vec(scalar_strategy(), 0..6),
        second in prop::collection::vec(scalar_strategy(), 0..6),
    ) {
        let mut base = Mapping::new();
        base.insert(ConfigTree::from("items"), ConfigTree::Sequence(first.clone()));
        let mut overlay = Mapping::new();
        overlay.insert(ConfigTree::from("items"), ConfigTree::Sequence(second.clone()));

        let merged = ConfigMerger::merge(
            &ConfigTree::Mapping(base),
            &ConfigTree::Mapping(overlay),
        );

        let mut expected = first;
        expected.extend(second);
        prop_assert_eq!(&merged["items"], &ConfigTree::Sequence(expected));
    }

    // Folding is the same as merging step by step in order
    #[test]
    fn merge_all_matches_sequential_merge(
        a in mapping_strategy("[a-d]"),
        b in mapping_strategy("[a-d]"),
        c in mapping_strategy("[a-d]"),
    ) {
        let (a, b, c) = (ConfigTree::Mapping(a), ConfigTree::Mapping(b), ConfigTree::Mapping(c));
        let stepwise = ConfigMerger::merge(&ConfigMerger::merge(&a, &b), &c);
        prop_assert_eq!(ConfigMerger::merge_all([&a, &b, &c]), stepwise);
    }
}
