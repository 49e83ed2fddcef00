//! Deep merging of configuration trees.
//!
//! Later sources overlay earlier ones. Mappings merge key by key,
//! sequences concatenate, and anything else is replaced by the overlay.

use crate::config::ConfigTree;
use serde_yaml::Mapping;

/// Merges configuration trees according to precedence rules.
///
/// # Examples
///
/// ```
/// use tfstack::config::{ConfigMerger, ConfigTree};
///
/// let base: ConfigTree = serde_yaml::from_str("a: {x: 1}\nlist: [1]").unwrap();
/// let overlay: ConfigTree = serde_yaml::from_str("a: {y: 2}\nlist: [2]").unwrap();
///
/// let merged = ConfigMerger::merge(&base, &overlay);
/// let expected: ConfigTree = serde_yaml::from_str("a: {x: 1, y: 2}\nlist: [1, 2]").unwrap();
/// assert_eq!(merged, expected);
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `overlay` on top of `base`, returning a new tree.
    ///
    /// # Merging Rules
    ///
    /// For every key in `overlay`:
    /// - Mapping over mapping: merged recursively
    /// - Sequence over sequence: `base` items followed by `overlay` items
    /// - Anything else: `overlay` value replaces `base` value
    ///
    /// Keys only present in `base` are kept. When either side is not a
    /// mapping at the top level, `overlay` replaces `base` outright.
    #[must_use]
    pub fn merge(base: &ConfigTree, overlay: &ConfigTree) -> ConfigTree {
        match (base, overlay) {
            (ConfigTree::Mapping(base_map), ConfigTree::Mapping(overlay_map)) => {
                ConfigTree::Mapping(Self::merge_mappings(base_map, overlay_map))
            }
            _ => overlay.clone(),
        }
    }

    /// Fold a sequence of trees left to right, starting from an empty mapping.
    ///
    /// `merge_all([a, b, c])` equals `merge(merge(merge({}, a), b), c)`.
    #[must_use]
    pub fn merge_all<'a, I>(trees: I) -> ConfigTree
    where
        I: IntoIterator<Item = &'a ConfigTree>,
    {
        trees
            .into_iter()
            .fold(ConfigTree::Mapping(Mapping::new()), |acc, tree| {
                Self::merge(&acc, tree)
            })
    }

    fn merge_mappings(base: &Mapping, overlay: &Mapping) -> Mapping {
        let mut result = base.clone();

        for (key, value) in overlay {
            let merged = match (result.get(key), value) {
                (Some(ConfigTree::Mapping(existing)), ConfigTree::Mapping(incoming)) => {
                    ConfigTree::Mapping(Self::merge_mappings(existing, incoming))
                }
                (Some(ConfigTree::Sequence(existing)), ConfigTree::Sequence(incoming)) => {
                    let mut combined = existing.clone();
                    combined.extend(incoming.iter().cloned());
                    ConfigTree::Sequence(combined)
                }
                _ => value.clone(),
            };
            result.insert(key.clone(), merged);
        }

        result
    }
}
