use binary_trees::avl::{self, AvlTree};
use binary_trees::binary_tree::{self, is_bstree};

use crate::{model_insert, model_remove, Op};

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same multiset of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut AvlTree<T>, model: &mut Vec<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(value.clone()).unwrap();
                model_insert(model, value.clone());
            }
            Op::Remove(value) => {
                if tree.remove(value) != model_remove(model, value) {
                    return false;
                }
            }
        }
    }

    true
}

/// Largest height an AVL tree with `count` nodes can have.
fn max_avl_height(count: usize) -> isize {
    (1.4405 * ((count + 2) as f64).log2() - 0.3277).floor() as isize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = AvlTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree.inorder_traversal() == model
}

#[quickcheck]
fn invariants_hold_after_every_operation(ops: Vec<Op<i16>>) -> bool {
    let mut tree = AvlTree::new();
    let mut model = Vec::new();

    ops.chunks(1).all(|op| {
        do_ops(op, &mut tree, &mut model)
            && is_bstree(tree.root())
            && avl::is_balanced(tree.root())
            && tree.height() == binary_tree::height(tree.root())
            && tree.height() <= max_avl_height(tree.count())
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = AvlTree::try_from_iter(xs.iter().copied()).unwrap();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = AvlTree::try_from_iter(xs.iter().copied()).unwrap();
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete) {}
    }

    deletes.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !deletes.contains(x))
            .all(|x| tree.contains(x))
        && avl::is_balanced(tree.root())
}

#[quickcheck]
fn insert_then_remove_keeps_values(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = AvlTree::try_from_iter(xs).unwrap();
    let before = tree.inorder_traversal();

    tree.insert(x).unwrap();
    tree.remove(&x);

    tree.inorder_traversal() == before && avl::is_balanced(tree.root())
}

#[quickcheck]
fn min_max_and_range_match_model(xs: Vec<i16>, low: i16, high: i16) -> bool {
    let tree = AvlTree::try_from_iter(xs.iter().copied()).unwrap();
    let mut sorted = xs;
    sorted.sort();

    let in_range: Vec<i16> = sorted
        .iter()
        .copied()
        .filter(|x| low <= *x && *x <= high)
        .collect();

    tree.min().ok() == sorted.first()
        && tree.max().ok() == sorted.last()
        && tree.data_in_range(&low, &high) == in_range
}
