use treelab::heap::MaxHeap;
use treelab::observer::Silent;

use crate::Op;

#[quickcheck]
fn valid_after_every_operation(ops: Vec<Op>) -> bool {
    let mut heap = MaxHeap::with_observer(Silent);
    ops.iter().all(|op| {
        match op {
            Op::Insert(v) => heap.insert((*v).into()),
            Op::PopMax => {
                let expected = heap.as_slice().iter().max().copied();
                if heap.pop_max() != expected {
                    return false;
                }
            }
        }
        heap.verify_heap()
    })
}

#[quickcheck]
fn drains_in_non_increasing_order(xs: Vec<i16>) -> bool {
    let mut heap: MaxHeap = xs.iter().copied().map(i64::from).collect();

    let mut drained = Vec::new();
    while let Some(max) = heap.pop_max() {
        drained.push(max);
    }

    let mut expected: Vec<i64> = xs.into_iter().map(i64::from).collect();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    drained == expected && heap.pop_max().is_none()
}

#[quickcheck]
fn peek_is_the_maximum(xs: Vec<i16>) -> bool {
    let mut heap = MaxHeap::with_observer(Silent);
    heap.extend(xs.iter().copied().map(i64::from));

    heap.peek() == xs.iter().copied().map(i64::from).max()
}

#[test]
fn pops_example_sequence() {
    let _ = pretty_env_logger::try_init();

    let mut heap = MaxHeap::new();
    for value in [10, 5, 15, 3, 7, 18] {
        heap.insert(value);
        assert!(heap.verify_heap());
    }

    let mut popped = Vec::new();
    while let Some(max) = heap.pop_max() {
        assert!(heap.verify_heap());
        popped.push(max);
    }
    assert_eq!(popped, vec![18, 15, 10, 7, 5, 3]);
}

#[test]
fn pop_on_empty_is_none() {
    let mut heap = MaxHeap::new();
    assert_eq!(heap.pop_max(), None);
    assert_eq!(heap.peek(), None);
}
