use rebuild_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Delete(x) => {
                bst.delete_item(x);
                set.remove(x);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

fn in_order<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    tree.in_order_for_each(|x| values.push(x.clone()));
    values
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::default();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|x| tree.includes(x)) && in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>, ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new(xs);
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    in_order(&tree).windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::default();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.includes(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::new(xs.iter().copied());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.includes(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new(xs.iter().copied());
    let mut len = tree.len();
    for delete in &deletes {
        let expected = if tree.includes(delete) { len - 1 } else { len };
        tree.delete_item(delete);
        len = tree.len();
        if len != expected || tree.includes(delete) {
            return false;
        }
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    still_present.iter().all(|x| tree.includes(x))
}

#[quickcheck]
fn rebalance_is_idempotent(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::default();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    tree.rebalance();
    let once = tree.to_string();
    let balanced = tree.is_balanced();
    tree.rebalance();

    balanced && tree.to_string() == once && in_order(&tree) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn built_height_is_minimal(xs: Vec<u8>) -> bool {
    let tree = Tree::new(xs);
    let n = tree.len();
    match tree.root() {
        None => n == 0,
        Some(root) => {
            let minimal = (usize::BITS - n.leading_zeros()) as usize - 1;
            tree.is_balanced() && tree.height(root) == Some(minimal) && tree.depth(root) == Some(0)
        }
    }
}

#[test]
fn scenario_from_small_tree() {
    let mut tree = Tree::new([1, 5, 8, 11, 13]);
    tree.insert(6);
    tree.insert(2);
    assert_eq!(in_order(&tree), vec![1, 2, 5, 6, 8, 11, 13]);

    tree.delete_item(&5);

    assert!(!tree.includes(&5));
    assert!(tree.includes(&6));
    assert_eq!(in_order(&tree), vec![1, 2, 6, 8, 11, 13]);
}

#[test]
fn level_order_requires_visitor() {
    let tree = Tree::new([1, 2, 3]);

    let err = tree.level_order_for_each(None::<fn(&i32)>).unwrap_err();
    assert_eq!(err, rebuild_bst::Error::MissingVisitor);
    assert_eq!(err.to_string(), "a visitor is required to traverse the tree");
}
