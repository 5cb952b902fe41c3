//! Property-based tests for path handling.
//!
//! The normalize and relationship modules carry their own inline property
//! tests; this module focuses on cross-module properties of the lexical
//! layer and the ascension loop, driven with a larger case count.

use super::ascend::find_up;
use super::normalize::normalize;
use super::relationship::{overlaps, relative_from, PathRelationship};
use proptest::prelude::*;
use std::path::{Component, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent(path in absolute_path_strategy()) {
        if let Ok(normalized_once) = normalize(&path) {
            if let Ok(normalized_twice) = normalize(&normalized_once) {
                prop_assert_eq!(normalized_once, normalized_twice);
            }
        }
    }

    // The relative path between equal paths is empty
    #[test]
    fn relative_from_self_is_empty(path in absolute_path_strategy()) {
        prop_assert_eq!(relative_from(&path, &path), Some(PathBuf::new()));
    }

    // The relative path from an ancestor to a descendant never starts
    // with a parent reference
    #[test]
    fn relative_into_descendant_has_no_parent_refs(
        base in absolute_path_strategy(),
        depth in 1..5usize,
    ) {
        let mut child = base.clone();
        for i in 0..depth {
            child.push(format!("level{i}"));
        }

        let rel = relative_from(&base, &child).unwrap();
        prop_assert!(!rel.is_absolute());
        prop_assert_ne!(rel.components().next(), Some(Component::ParentDir));
    }

    // Relationship types are mutually exclusive
    #[test]
    fn path_relationship_mutually_exclusive(
        path1 in absolute_path_strategy(),
        path2 in absolute_path_strategy(),
    ) {
        let rel = PathRelationship::between(&path1, &path2);

        let count = [
            matches!(rel, PathRelationship::Same),
            matches!(rel, PathRelationship::Ancestor),
            matches!(rel, PathRelationship::Descendant),
            matches!(rel, PathRelationship::Unrelated),
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        prop_assert_eq!(count, 1);
    }

    // Overlap holds along any constructed ancestor chain, in both directions
    #[test]
    fn overlap_holds_along_ancestor_chain(
        base in absolute_path_strategy(),
        depth in 1..5usize,
    ) {
        let mut child = base.clone();
        for i in 0..depth {
            child.push(format!("sub{i}"));
        }

        prop_assert!(overlaps(&base, &child));
        prop_assert!(overlaps(&child, &base));
    }

    // An ascension anchored beneath a stop boundary never escapes it:
    // searching for a name that does not exist returns nothing rather
    // than hanging or erroring, regardless of the constructed depth
    #[test]
    fn ascension_terminates_under_stop(
        depth in 1..6usize,
    ) {
        let root = tempfile::tempdir().unwrap();
        let mut start = root.path().to_path_buf();
        for i in 0..depth {
            start.push(format!("d{i}"));
        }
        std::fs::create_dir_all(&start).unwrap();

        let found = find_up("upwalk-proptest-missing.xyz", &start, Some(root.path()));
        prop_assert!(found.is_empty());
    }
}
