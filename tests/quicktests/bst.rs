use binary_trees::binary_tree::{inorder_traversal, is_bstree};
use binary_trees::bst::{self, BsTree};

use crate::{model_insert, model_remove, Op};

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BsTree::new();
    let mut model = Vec::new();

    for op in &ops {
        match op {
            Op::Insert(value) => {
                tree.insert(*value).unwrap();
                model_insert(&mut model, *value);
            }
            Op::Remove(value) => {
                if tree.remove(value) != model_remove(&mut model, value) {
                    return false;
                }
            }
        }
    }

    is_bstree(tree.root()) && inorder_traversal(tree.root()) == model
}

#[quickcheck]
fn successor_matches_model(xs: Vec<i8>, probe: i8) -> bool {
    let tree = {
        let mut tree = BsTree::new();
        for x in &xs {
            tree.insert(*x).unwrap();
        }
        tree
    };
    let expected = xs.iter().filter(|x| **x > probe).min();

    bst::inorder_successor(tree.root(), &probe) == expected
}
