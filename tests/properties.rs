use std::collections::BTreeMap;

use proptest::prelude::*;
use redblack::{Color, RBTree};

#[derive(Debug, Clone)]
enum Operation {
    Insert(u16, u32),
    Delete(u16),
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (0u16..256, any::<u32>()).prop_map(|(k, v)| Operation::Insert(k, v)),
        2 => (0u16..256).prop_map(Operation::Delete),
    ]
}

fn inorder_keys(tree: &RBTree<u16, u32>) -> Vec<u16> {
    tree.inorder_traverse().map(|n| *n.key()).collect()
}

proptest! {
    #[test]
    fn prop_distinct_inserts_come_out_sorted(keys in prop::collection::btree_set(any::<i64>(), 0..300)) {
        let mut shuffled: Vec<_> = keys.iter().copied().collect();
        shuffled.reverse();
        let mid = shuffled.len() / 3;
        shuffled.rotate_left(mid);

        let mut tree = RBTree::new();
        for &k in &shuffled {
            prop_assert!(tree.insert_node(k, ()));
        }

        let out: Vec<_> = tree.inorder_traverse().map(|n| *n.key()).collect();
        prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(out, keys.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_operations_match_model(ops in prop::collection::vec(arb_operation(), 1..400)) {
        let mut tree = RBTree::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Operation::Insert(k, v) => {
                    let fresh = !model.contains_key(&k);
                    prop_assert_eq!(tree.insert_node(k, v), fresh);
                    model.entry(k).or_insert(v);
                    let found = tree.search(&k).unwrap();
                    prop_assert_eq!((*found.key(), *found.value()), (k, model[&k]));
                }
                Operation::Delete(k) => {
                    let before = tree.len();
                    let present = model.remove(&k).is_some();
                    prop_assert_eq!(tree.delete_node(&k), present);
                    prop_assert_eq!(tree.len(), if present { before - 1 } else { before });
                    prop_assert!(tree.search(&k).is_none());
                }
            }

            prop_assert!(tree.check_invariants().is_ok(), "{:?}", tree.check_invariants());
            if let Some(root) = tree.root() {
                prop_assert_eq!(root.color(), Color::Black);
            }
        }

        prop_assert_eq!(inorder_keys(&tree), model.keys().copied().collect::<Vec<_>>());
        for (k, v) in &model {
            prop_assert_eq!(tree.get(k), Some(v));
        }
    }

    #[test]
    fn prop_successor_chain_is_inorder(keys in prop::collection::vec(0u16..1000, 0..200)) {
        let mut tree = RBTree::new();
        for k in keys {
            tree.insert_node(k, 0);
        }

        let mut chained = vec![];
        let mut current = tree.first();
        while let Some(node) = current {
            chained.push(*node.key());
            current = tree.successor(node.id()).unwrap();
        }
        prop_assert_eq!(chained.len(), tree.len());
        prop_assert_eq!(chained, inorder_keys(&tree));
    }

    #[test]
    fn prop_missing_delete_changes_nothing(
        keys in prop::collection::btree_set(0u16..500, 1..100),
        missing in 500u16..1000,
    ) {
        let mut tree = RBTree::new();
        for &k in &keys {
            tree.insert_node(k, u32::from(k) * 3);
        }

        let snapshot = |t: &RBTree<u16, u32>| -> Vec<_> {
            t.preorder_traverse().map(|n| (*n.key(), *n.value(), n.color())).collect()
        };
        let before = snapshot(&tree);
        prop_assert!(!tree.delete_node(&missing));
        prop_assert_eq!(snapshot(&tree), before);
    }

    #[test]
    fn prop_traversals_cover_tree(keys in prop::collection::btree_set(any::<u16>(), 0..150)) {
        let mut tree = RBTree::new();
        for &k in &keys {
            tree.insert_node(k, 0u32);
        }

        let expected: Vec<_> = keys.into_iter().collect();
        let mut pre: Vec<_> = tree.preorder_traverse().map(|n| *n.key()).collect();
        let mut post: Vec<_> = tree.postorder_traverse().map(|n| *n.key()).collect();
        let mut level: Vec<_> = tree.levelorder_traverse().map(|n| *n.key()).collect();

        prop_assert_eq!(pre.first(), tree.root().map(|r| r.key()));
        prop_assert_eq!(post.last(), tree.root().map(|r| r.key()));
        prop_assert_eq!(level.first(), tree.root().map(|r| r.key()));

        pre.sort();
        post.sort();
        level.sort();
        prop_assert_eq!(&pre, &expected);
        prop_assert_eq!(&post, &expected);
        prop_assert_eq!(&level, &expected);
    }
}
