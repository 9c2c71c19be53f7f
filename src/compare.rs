// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key-set comparison between a reference locale and a target locale
//!
//! Documents are flattened into dot-joined leaf paths (`menu.file.open`).
//! A reference path is missing when it is not a leaf path of the target.

use crate::document::LocaleNode;
use std::collections::HashSet;

/// Flatten a document into its leaf paths, in document order.
///
/// A document whose root is not a mapping has no keys.
pub fn flatten_keys(node: &LocaleNode) -> Vec<String> {
    let mut keys = Vec::new();
    collect_leaf_paths(node, "", &mut keys);
    keys
}

fn collect_leaf_paths(node: &LocaleNode, prefix: &str, out: &mut Vec<String>) {
    let LocaleNode::Branch(entries) = node else {
        return;
    };
    for (key, child) in entries {
        let path = join_path(prefix, key);
        match child {
            LocaleNode::Branch(_) => collect_leaf_paths(child, &path, out),
            LocaleNode::Leaf(_) => out.push(path),
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Leaf paths of `reference` that are not leaf paths of `target`,
/// in reference order.
///
/// A mapping in the target does not satisfy a reference leaf at the same
/// path: `{"a": "x"}` against `{"a": {"b": "y"}}` reports `a` missing.
pub fn missing_keys(reference: &LocaleNode, target: &LocaleNode) -> Vec<String> {
    let present: HashSet<String> = flatten_keys(target).into_iter().collect();
    flatten_keys(reference)
        .into_iter()
        .filter(|key| !present.contains(key))
        .collect()
}

/// Paths that are a leaf on one side and a mapping on the other.
///
/// Such paths also show up in [`missing_keys`] (the reference leaf, or
/// the leaves below the reference mapping, have no leaf counterpart);
/// this lists them once at the point where the shapes diverge.
pub fn shape_mismatches(reference: &LocaleNode, target: &LocaleNode) -> Vec<String> {
    let mut out = Vec::new();
    collect_mismatches(reference, target, "", &mut out);
    out
}

fn collect_mismatches(
    reference: &LocaleNode,
    target: &LocaleNode,
    prefix: &str,
    out: &mut Vec<String>,
) {
    let LocaleNode::Branch(entries) = reference else {
        return;
    };
    for (key, ref_child) in entries {
        let Some(target_child) = target.get(key) else {
            continue;
        };
        let path = join_path(prefix, key);
        match (ref_child.is_branch(), target_child.is_branch()) {
            (true, true) => collect_mismatches(ref_child, target_child, &path, out),
            (false, false) => {}
            _ => out.push(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;

    fn doc(json: &str) -> LocaleNode {
        DocumentFormat::Json.parse(json).unwrap()
    }

    #[test]
    fn test_flatten_nested_document() {
        let reference = doc(r#"{"a": {"b": "x"}, "c": "y"}"#);
        assert_eq!(flatten_keys(&reference), vec!["a.b", "c"]);
    }

    #[test]
    fn test_flatten_depth_gives_segment_count() {
        let reference = doc(r#"{"l1": {"l2": {"l3": {"l4": "deep"}}}}"#);
        let keys = flatten_keys(&reference);
        assert_eq!(keys, vec!["l1.l2.l3.l4"]);
        assert_eq!(keys[0].split('.').count(), 4);
    }

    #[test]
    fn test_flatten_treats_every_non_mapping_as_leaf() {
        let reference = doc(r#"{"n": null, "b": false, "i": 1, "s": "", "l": ["x"], "e": {}}"#);
        // empty mappings contribute no leaves
        assert_eq!(flatten_keys(&reference), vec!["n", "b", "i", "s", "l"]);
    }

    #[test]
    fn test_flatten_scalar_root_is_empty() {
        assert!(flatten_keys(&doc(r#""just a string""#)).is_empty());
        assert!(flatten_keys(&doc("[1, 2, 3]")).is_empty());
    }

    #[test]
    fn test_missing_nested_key() {
        let reference = doc(r#"{"a": {"b": "x"}, "c": "y"}"#);
        let target = doc(r#"{"a": {}, "c": "y"}"#);
        assert_eq!(missing_keys(&reference, &target), vec!["a.b"]);
    }

    #[test]
    fn test_missing_preserves_reference_order() {
        let reference = doc(r#"{"z": "1", "m": {"q": "2", "a": "3"}, "b": "4"}"#);
        let target = doc(r#"{"m": {}}"#);
        assert_eq!(missing_keys(&reference, &target), vec!["z", "m.q", "m.a", "b"]);
    }

    #[test]
    fn test_extra_target_keys_are_ignored() {
        let reference = doc(r#"{"a": "x"}"#);
        let target = doc(r#"{"a": "x", "extra": {"deep": "y"}}"#);
        assert!(missing_keys(&reference, &target).is_empty());
    }

    #[test]
    fn test_empty_reference_has_nothing_missing() {
        let reference = doc("{}");
        let target = doc(r#"{"anything": {"at": "all"}}"#);
        assert!(missing_keys(&reference, &target).is_empty());
        assert!(missing_keys(&reference, &doc("{}")).is_empty());
    }

    #[test]
    fn test_leaf_vs_branch_counts_as_missing() {
        // reference leaf "a" vs target mapping "a": no leaf path "a" in the target
        let reference = doc(r#"{"a": "x"}"#);
        let target = doc(r#"{"a": {"b": "y"}}"#);
        assert_eq!(missing_keys(&reference, &target), vec!["a"]);
        assert_eq!(shape_mismatches(&reference, &target), vec!["a"]);
    }

    #[test]
    fn test_branch_vs_leaf_reports_reference_leaves() {
        let reference = doc(r#"{"a": {"b": "x", "c": "y"}}"#);
        let target = doc(r#"{"a": "flat"}"#);
        assert_eq!(missing_keys(&reference, &target), vec!["a.b", "a.c"]);
        assert_eq!(shape_mismatches(&reference, &target), vec!["a"]);
    }

    #[test]
    fn test_dotted_key_collides_with_nested_path() {
        // keys containing dots are not escaped, so these two spellings flatten alike
        let reference = doc(r#"{"a": {"b": "x"}}"#);
        let target = doc(r#"{"a.b": "x"}"#);
        assert!(missing_keys(&reference, &target).is_empty());
    }

    #[test]
    fn test_shape_mismatches_recurse_into_shared_branches() {
        let reference = doc(r#"{"menu": {"file": {"open": "O"}, "edit": "E"}}"#);
        let target = doc(r#"{"menu": {"file": "F", "edit": {"undo": "U"}}}"#);
        assert_eq!(
            shape_mismatches(&reference, &target),
            vec!["menu.file", "menu.edit"]
        );
    }

    #[test]
    fn test_matching_shapes_have_no_mismatches() {
        let reference = doc(r#"{"a": {"b": "x"}, "c": "y"}"#);
        let target = doc(r#"{"a": {"b": "z"}}"#);
        assert!(shape_mismatches(&reference, &target).is_empty());
    }
}
