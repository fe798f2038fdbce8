use treelab::avl::{Node, Tree};
use treelab::bst;
use treelab::node;
use treelab::observer::Silent;

use crate::orderings;

/// The height bound every AVL subtree of `size` nodes obeys.
fn max_height(size: usize) -> f64 {
    1.44 * ((size + 2) as f64).log2()
}

/// Checks the height bound at `node` and at every node below it.
fn within_height_bound(subtree: Option<&Node>) -> bool {
    match subtree {
        None => true,
        Some(n) => {
            n.height() as f64 <= max_height(node::size(Some(n)))
                && within_height_bound(n.left())
                && within_height_bound(n.right())
        }
    }
}

#[quickcheck]
fn valid_after_every_insert(xs: Vec<i16>) -> bool {
    orderings(&xs).iter().all(|keys| {
        let mut tree = Tree::with_observer(Silent);
        keys.iter().all(|key| {
            tree.insert(*key);
            tree.verify_avl()
        })
    })
}

#[quickcheck]
fn same_in_order_as_plain_bst(xs: Vec<i16>) -> bool {
    orderings(&xs).iter().all(|keys| {
        let mut tree = Tree::with_observer(Silent);
        let mut plain = bst::Tree::new();
        for key in keys {
            tree.insert(*key);
            plain.insert(*key);
        }
        tree.in_order() == plain.in_order()
    })
}

#[quickcheck]
fn heights_are_logarithmic(xs: Vec<i16>) -> bool {
    orderings(&xs).iter().all(|keys| {
        let mut tree = Tree::with_observer(Silent);
        for key in keys {
            tree.insert(*key);
        }
        within_height_bound(tree.root())
    })
}

#[quickcheck]
fn inserting_twice_changes_nothing(xs: Vec<i16>) -> bool {
    let mut tree = Tree::with_observer(Silent);
    for x in &xs {
        tree.insert((*x).into());
    }
    let before = tree.root().cloned();

    xs.iter().all(|x| !tree.insert((*x).into())) && tree.root().cloned() == before
}

#[quickcheck]
fn cached_heights_match_walked_heights(xs: Vec<i16>) -> bool {
    let mut tree = Tree::with_observer(Silent);
    for x in xs {
        tree.insert(x.into());
    }
    tree.height() == node::depth(tree.root()) && tree.len() == node::size(tree.root())
}

#[test]
fn sorted_input_stays_short() {
    let _ = pretty_env_logger::try_init();

    let mut tree = Tree::new();
    let mut plain = bst::Tree::new();
    for key in 0..1000 {
        tree.insert(key);
        plain.insert(key);
    }

    assert_eq!(plain.height(), 1000);
    assert_eq!(tree.height(), 10);
    assert!(within_height_bound(tree.root()));
}

#[test]
fn rotation_scenarios() {
    for keys in [[10, 20, 30], [30, 20, 10], [30, 10, 20], [10, 30, 20]] {
        let mut tree = Tree::new();
        for key in keys {
            tree.insert(key);
        }

        let root = tree.root().unwrap();
        assert_eq!(root.key(), 20, "{:?}", keys);
        assert_eq!(root.height(), 2);
        assert_eq!(root.left().map(|n| (n.key(), n.height())), Some((10, 1)));
        assert_eq!(root.right().map(|n| (n.key(), n.height())), Some((30, 1)));
        assert!(tree.verify_avl());
    }
}
