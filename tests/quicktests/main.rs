//! Property tests run against the public API of every structure.

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod avl;
mod bst;
mod heap;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a heap in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op {
    /// Insert the value into the heap
    Insert(i16),
    /// Pop the largest value
    PopMax,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(i16::arbitrary(g)),
            1 => Op::PopMax,
            _ => unreachable!(),
        }
    }
}

/// Keys that are sorted, reverse sorted and otherwise. Shared by the tree tests.
pub(crate) fn orderings(xs: &[i16]) -> [Vec<i64>; 3] {
    let given: Vec<i64> = xs.iter().copied().map(i64::from).collect();
    let mut ascending = given.clone();
    ascending.sort_unstable();
    let descending = ascending.iter().rev().copied().collect();
    [given, ascending, descending]
}
