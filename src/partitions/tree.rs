// Copyright 2021 The Google Research Authors and The HuggingFace Team All rights reserved.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::common::error::RustPartitionsError;
use std::collections::BTreeMap;

/// # Nested parameter tree
///
/// Tree of named sub-modules down to leaf parameter values, mirroring the nested mapping
/// convention used by model definition libraries to expose their parameters. A leaf is uniquely
/// identified by its path, the ordered sequence of keys leading to it from the root (e.g.
/// `encoder/block/0/SelfAttention/k/kernel`).
///
/// Trees are rooted at a `Node` in practice (a model is a mapping of named sub-modules).
/// `flatten` and `unflatten` are inverse of each other over the leaf paths of such trees, as long
/// as no interior node is empty: an empty node carries no leaf and has no flat representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterTree<T> {
    /// Leaf parameter value
    Leaf(T),
    /// Named sub-modules
    Node(BTreeMap<String, ParameterTree<T>>),
}

impl<T> ParameterTree<T> {
    /// Flattens the tree into `(path, value)` pairs, one per leaf, in depth-first key order.
    pub fn flatten(&self) -> Vec<(Vec<String>, &T)> {
        let mut entries = Vec::new();
        let mut prefix = Vec::new();
        self.flatten_into(&mut prefix, &mut entries);
        entries
    }

    fn flatten_into<'a>(
        &'a self,
        prefix: &mut Vec<String>,
        entries: &mut Vec<(Vec<String>, &'a T)>,
    ) {
        match self {
            ParameterTree::Leaf(value) => entries.push((prefix.clone(), value)),
            ParameterTree::Node(children) => {
                for (name, child) in children {
                    prefix.push(name.clone());
                    child.flatten_into(prefix, entries);
                    prefix.pop();
                }
            }
        }
    }

    /// Rebuilds a tree from `(path, value)` pairs, the inverse of `flatten`.
    ///
    /// Fails if a path is empty, duplicated, or conflicts with another path (one path being a
    /// strict prefix of another would make the same key both a leaf and a sub-module).
    pub fn unflatten(
        entries: Vec<(Vec<String>, T)>,
    ) -> Result<ParameterTree<T>, RustPartitionsError> {
        let mut root = BTreeMap::new();
        for (path, value) in entries {
            if path.is_empty() {
                return Err(RustPartitionsError::InvalidParameterTree(
                    "parameter paths must contain at least one segment".to_string(),
                ));
            }
            Self::insert(&mut root, &path, value)?;
        }
        Ok(ParameterTree::Node(root))
    }

    fn insert(
        root: &mut BTreeMap<String, ParameterTree<T>>,
        path: &[String],
        value: T,
    ) -> Result<(), RustPartitionsError> {
        let mut current = root;
        for segment in &path[..path.len() - 1] {
            let child = current
                .entry(segment.clone())
                .or_insert_with(|| ParameterTree::Node(BTreeMap::new()));
            current = match child {
                ParameterTree::Node(children) => children,
                ParameterTree::Leaf(_) => {
                    return Err(RustPartitionsError::InvalidParameterTree(format!(
                        "conflicting parameter paths: {} is both a leaf and a sub-module",
                        path.join("/")
                    )));
                }
            };
        }
        let leaf_name = &path[path.len() - 1];
        if current.contains_key(leaf_name) {
            return Err(RustPartitionsError::InvalidParameterTree(format!(
                "duplicate or conflicting parameter path: {}",
                path.join("/")
            )));
        }
        current.insert(leaf_name.clone(), ParameterTree::Leaf(value));
        Ok(())
    }

    /// Returns the leaf value at the given path, `None` if the path does not lead to a leaf.
    pub fn get(&self, path: &[&str]) -> Option<&T> {
        let mut current = self;
        for segment in path {
            current = match current {
                ParameterTree::Node(children) => children.get(*segment)?,
                ParameterTree::Leaf(_) => return None,
            };
        }
        match current {
            ParameterTree::Leaf(value) => Some(value),
            ParameterTree::Node(_) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ParameterTree;
    use crate::RustPartitionsError;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|segment| segment.to_string()).collect()
    }

    #[test]
    fn test_flatten_unflatten_round_trip() {
        let entries = vec![
            (path(&["encoder", "block", "0", "kernel"]), 1),
            (path(&["encoder", "block", "0", "bias"]), 2),
            (path(&["encoder", "block", "1", "kernel"]), 3),
            (path(&["shared", "embedding"]), 4),
        ];

        let tree = ParameterTree::unflatten(entries.clone()).unwrap();
        let mut flat = tree
            .flatten()
            .into_iter()
            .map(|(key, value)| (key, *value))
            .collect::<Vec<_>>();
        flat.sort();

        let mut expected = entries;
        expected.sort();
        assert_eq!(flat, expected);
        assert_eq!(ParameterTree::unflatten(flat).unwrap(), tree);
    }

    #[test]
    fn test_flatten_depth_first_key_order() {
        let tree = ParameterTree::unflatten(vec![
            (path(&["b", "x"]), 0),
            (path(&["a", "y"]), 1),
            (path(&["a", "x"]), 2),
        ])
        .unwrap();

        let keys = tree
            .flatten()
            .into_iter()
            .map(|(key, _)| key.join("/"))
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["a/x", "a/y", "b/x"]);
    }

    #[test]
    fn test_get_leaf() {
        let tree =
            ParameterTree::unflatten(vec![(path(&["decoder", "lm_head", "kernel"]), 7)]).unwrap();

        assert_eq!(tree.get(&["decoder", "lm_head", "kernel"]), Some(&7));
        assert_eq!(tree.get(&["decoder", "lm_head"]), None);
        assert_eq!(tree.get(&["decoder", "lm_head", "bias"]), None);
    }

    #[test]
    fn test_unflatten_rejects_empty_path() {
        let result = ParameterTree::unflatten(vec![(vec![], 0)]);
        assert!(matches!(
            result,
            Err(RustPartitionsError::InvalidParameterTree(_))
        ));
    }

    #[test]
    fn test_unflatten_rejects_prefix_conflict() {
        let result = ParameterTree::unflatten(vec![
            (path(&["encoder", "kernel"]), 0),
            (path(&["encoder", "kernel", "scale"]), 1),
        ]);
        assert!(matches!(
            result,
            Err(RustPartitionsError::InvalidParameterTree(_))
        ));
    }

    #[test]
    fn test_unflatten_rejects_duplicate_path() {
        let result = ParameterTree::unflatten(vec![
            (path(&["encoder", "kernel"]), 0),
            (path(&["encoder", "kernel"]), 1),
        ]);
        assert!(matches!(
            result,
            Err(RustPartitionsError::InvalidParameterTree(_))
        ));
    }
}
