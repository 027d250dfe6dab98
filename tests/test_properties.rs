use label_tree::AvlTree;
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(String),
    Remove(String),
}

fn key() -> impl Strategy<Value = String> {
    "[a-e]{1,3}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => key().prop_map(Op::Insert),
        2 => key().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_operation(ops in vec(op(), 0..200)) {
        let mut tree = AvlTree::new();
        let mut expected = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    tree.insert(&key);
                    expected.insert(key);
                },
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(&key), expected.remove(&key));
                    prop_assert!(tree.search(&key).is_none());
                },
            }
            prop_assert_eq!(tree.check_consistency(), Ok(()));
        }

        prop_assert_eq!(tree.len(), expected.len());
        for key in &expected {
            prop_assert!(tree.contains(key));
        }
    }

    #[test]
    fn prop_traversal_is_strictly_ascending(keys in vec(key(), 0..100)) {
        let tree: AvlTree = keys.iter().collect();
        let traversal = tree.iter().collect::<Vec<&str>>();

        prop_assert!(traversal.windows(2).all(|pair| pair[0] < pair[1]));
        let expected = keys.iter().map(String::as_str).collect::<BTreeSet<&str>>();
        prop_assert_eq!(traversal, expected.into_iter().collect::<Vec<&str>>());
    }

    #[test]
    fn prop_duplicate_insert_is_idempotent(keys in vec(key(), 1..100), index in any::<prop::sample::Index>()) {
        let mut tree: AvlTree = keys.iter().collect();
        let before = tree.iter().map(String::from).collect::<Vec<String>>();
        let height = tree.height();

        tree.insert(index.get(&keys));

        prop_assert_eq!(tree.iter().map(String::from).collect::<Vec<String>>(), before);
        prop_assert_eq!(tree.height(), height);
        prop_assert_eq!(tree.check_consistency(), Ok(()));
    }

    #[test]
    fn prop_deleted_keys_are_absent(keys in vec(key(), 0..100), removed in vec(key(), 0..50)) {
        let mut tree: AvlTree = keys.iter().collect();
        for key in &removed {
            tree.remove(key);
        }

        for key in &removed {
            prop_assert!(tree.search(key).is_none());
        }
        for key in keys.iter().filter(|key| !removed.contains(key)) {
            prop_assert!(tree.contains(key));
        }
    }

    #[test]
    fn prop_height_is_logarithmic(keys in vec("[a-z]{1,8}", 0..2_000)) {
        let tree: AvlTree = keys.iter().collect();
        let bound = 1.4405 * ((tree.len() + 2) as f64).log2() - 0.3277;
        prop_assert!((tree.height() as f64) <= bound);
    }
}
