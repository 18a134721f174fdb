#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod avl;
mod bst;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove one occurrence of the value from the data structure
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are twice as likely so that
    /// trees actually grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 | 1 => Op::Insert(T::arbitrary(g)),
            2 => Op::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// Removes one occurrence of `value` from a sorted model, returning whether it was there.
pub(crate) fn model_remove<T: Ord>(model: &mut Vec<T>, value: &T) -> bool {
    match model.binary_search(value) {
        Ok(pos) => {
            model.remove(pos);
            true
        }
        Err(_) => false,
    }
}

/// Inserts `value` into a sorted model.
pub(crate) fn model_insert<T: Ord>(model: &mut Vec<T>, value: T) {
    let pos = model.partition_point(|x| *x <= value);
    model.insert(pos, value);
}
