use treelab::bst::Tree;

use crate::orderings;

#[quickcheck]
fn in_order_is_sorted_and_deduplicated(xs: Vec<i16>) -> bool {
    orderings(&xs).iter().all(|keys| {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert(*key);
        }

        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();
        tree.in_order() == expected && tree.verify_bst() && tree.len() == expected.len()
    })
}

#[quickcheck]
fn inserting_twice_changes_nothing(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert((*x).into());
    }
    let before = tree.in_order();

    xs.iter().all(|x| !tree.insert((*x).into())) && tree.in_order() == before
}

#[quickcheck]
fn contains_only_inserted(xs: Vec<i8>, probes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert((*x).into());
    }

    probes
        .iter()
        .all(|p| tree.contains((*p).into()) == xs.contains(p))
}
