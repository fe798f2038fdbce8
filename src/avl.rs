//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Inserting works exactly like in the [plain BST](crate::bst) on the way down. On the way back
//! up, every node on the insertion path recomputes its height from its (already repaired)
//! children and, if its [balance factor](Node::balance_factor) left `[-1, 1]`, is fixed with one
//! or two rotations. See [the Wikipedia page][wiki] for the terminology used here.
//!
//! [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
//!
//! # Examples
//!
//! ```
//! use treelab::avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Sorted input would make a stick out of a plain BST...
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//!
//! // ...but here it makes a perfect tree.
//! assert_eq!(tree.height(), 3);
//! assert_eq!(tree.root().map(|root| root.key()), Some(4));
//! assert!(tree.verify_avl());
//! ```

use std::cmp::Ordering;

use crate::error::InvariantViolation;
use crate::node::{self, TreeNode};
use crate::observer::{LogObserver, Observer};
use crate::util;

/// An AVL tree of `i64` keys. `O` is told about every leaf, duplicate, imbalance and rotation;
/// see [`crate::observer`].
#[derive(Debug, Clone)]
pub struct Tree<O = LogObserver> {
    root: Option<Box<Node>>,
    len: usize,
    observer: O,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree` that reports to the [`log`] facade.
    pub fn new() -> Self {
        Self::with_observer(LogObserver)
    }
}

impl<O> Tree<O> {
    /// Generates a new, empty `Tree` that reports to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            root: None,
            len: 0,
            observer,
        }
    }

    /// Inserts `key` and rebalances every node on the path back to the root. Returns `false` and
    /// leaves the tree untouched if `key` is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelab::avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(10));
    /// assert!(tree.insert(20));
    /// assert!(!tree.insert(10));
    ///
    /// // The right-right case: 20 is rotated up.
    /// tree.insert(30);
    /// assert_eq!(tree.root().map(|root| root.key()), Some(20));
    /// ```
    pub fn insert(&mut self, key: i64) -> bool
    where
        O: Observer,
    {
        let mut inserted = false;
        self.root = Some(insert_node(
            self.root.take(),
            key,
            &mut self.observer,
            &mut inserted,
        ));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns whether `key` is stored in the tree.
    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root();
        while let Some(n) = current {
            current = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right(),
            };
        }
        false
    }

    /// All keys in ascending order. Each call builds a fresh `Vec`.
    pub fn in_order(&self) -> Vec<i64> {
        node::in_order(self.root())
    }

    /// Returns whether the in-order keys are strictly increasing.
    pub fn verify_bst(&self) -> bool {
        self.check_bst().is_ok()
    }

    /// Like [`Tree::verify_bst`] but describes the first out-of-order pair of keys.
    pub fn check_bst(&self) -> Result<(), InvariantViolation> {
        util::check_in_order(&self.in_order())
    }

    /// Returns whether this is a valid AVL tree: a valid BST where every node's balance factor is
    /// within `[-1, 1]` and every cached height is right.
    pub fn verify_avl(&self) -> bool {
        self.check_avl().is_ok()
    }

    /// Like [`Tree::verify_avl`] but describes the first problem found. Heights are recomputed
    /// from scratch rather than read from the nodes so that stale cached heights are caught.
    pub fn check_avl(&self) -> Result<(), InvariantViolation> {
        self.check_bst()?;
        check_subtree(self.root()).map(|_height| ())
    }

    /// The root node, for walking the tree.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// How many distinct keys are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The cached height of the root, 0 for an empty tree.
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// The observer this tree reports to.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer this tree reports to.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

/// An AVL `Node` has a key, up to two children and the cached height of the subtree rooted at
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl Node {
    fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// The ordering key stored in this node.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// The cached height of the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The difference in height between the right and left subtrees. Negative means left-heavy.
    pub fn balance_factor(&self) -> isize {
        height(self.right()) as isize - height(self.left()) as isize
    }
}

impl TreeNode for Node {
    fn key(&self) -> i64 {
        self.key
    }

    fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// The direction a subtree is rotated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// The right child moves up. Fixes right-heavy subtrees.
    Left,
    /// The left child moves up. Fixes left-heavy subtrees.
    Right,
}

/// The four shapes an out of balance node can have. The first letter is the heavy side of the
/// node, the second the heavy (or level) side of that child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Left-heavy with a left child that isn't right-heavy. One right rotation.
    LeftLeft,
    /// Left-heavy with a right-heavy left child. Rotate the child left, then the node right.
    LeftRight,
    /// Right-heavy with a right child that isn't left-heavy. One left rotation.
    RightRight,
    /// Right-heavy with a left-heavy right child. Rotate the child right, then the node left.
    RightLeft,
}

impl Case {
    /// Picks the rotation case for a node with `balance_factor` whose heavier child has
    /// `child_balance_factor`. Returns `None` when the node is balanced.
    ///
    /// A level child gets a single rotation.
    pub fn classify(balance_factor: isize, child_balance_factor: isize) -> Option<Self> {
        match balance_factor {
            b if b < -1 && child_balance_factor <= 0 => Some(Self::LeftLeft),
            b if b < -1 => Some(Self::LeftRight),
            b if b > 1 && child_balance_factor >= 0 => Some(Self::RightRight),
            b if b > 1 => Some(Self::RightLeft),
            _ => None,
        }
    }
}

/// An out of balance node found while unwinding an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imbalance {
    /// Key of the out of balance node.
    pub key: i64,
    /// Its balance factor, `-2` or `2` after a single insert.
    pub balance_factor: isize,
    /// The balance factor of its heavier child.
    pub child_balance_factor: isize,
    /// How it's going to be fixed.
    pub case: Case,
}

/// The cached height of `node`, 0 if there's no node.
fn height(node: Option<&Node>) -> usize {
    node.map_or(0, |n| n.height)
}

/// Adjusts the height of `node` to be the max of its children's heights + 1.
fn update_height(node: &mut Node) {
    node.height = height(node.left()).max(height(node.right())) + 1;
}

fn insert_node<O: Observer>(
    node: Option<Box<Node>>,
    key: i64,
    observer: &mut O,
    inserted: &mut bool,
) -> Box<Node> {
    let Some(mut node) = node else {
        observer.leaf_created(key);
        *inserted = true;
        return Box::new(Node::new(key));
    };
    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), key, observer, inserted)),
        Ordering::Greater => {
            node.right = Some(insert_node(node.right.take(), key, observer, inserted))
        }
        Ordering::Equal => {
            // Nothing below changed so there's nothing to rebalance here.
            observer.duplicate_ignored(key);
            return node;
        }
    }
    rebalance(node, observer)
}

/// Recomputes the height of `node` and, if it is out of balance, rotates it back into balance.
/// Both children must already be balanced. Returns the new root of the subtree.
fn rebalance<O: Observer>(mut node: Box<Node>, observer: &mut O) -> Box<Node> {
    update_height(&mut node);
    let balance_factor = node.balance_factor();
    let child_balance_factor = match balance_factor.cmp(&0) {
        Ordering::Less => node.left().map_or(0, Node::balance_factor),
        Ordering::Equal => 0,
        Ordering::Greater => node.right().map_or(0, Node::balance_factor),
    };
    let rebalanced = match Case::classify(balance_factor, child_balance_factor) {
        None => node,
        Some(case) => {
            observer.imbalance(Imbalance {
                key: node.key,
                balance_factor,
                child_balance_factor,
                case,
            });

            match case {
                Case::LeftLeft => rotate_right(node, observer),
                Case::LeftRight => {
                    let left = node.left.take().expect("Left-heavy => left child");
                    node.left = Some(rotate_left(left, observer));
                    rotate_right(node, observer)
                }
                Case::RightRight => rotate_left(node, observer),
                Case::RightLeft => {
                    let right = node.right.take().expect("Right-heavy => right child");
                    node.right = Some(rotate_right(right, observer));
                    rotate_left(node, observer)
                }
            }
        }
    };

    if cfg!(debug_assertions) {
        let left_height = height(rebalanced.left());
        let right_height = height(rebalanced.right());
        assert_eq!(rebalanced.height, left_height.max(right_height) + 1);
        assert!(
            left_height.abs_diff(right_height) <= 1,
            "rebalanced subtree still out of balance"
        );
    }

    rebalanced
}

/// Rotates `old_root` to the right. This moves the left child up vertically and `old_root` down
/// vertically. Used to rebalance the tree when the left child is too tall. As such, it must only
/// be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        old_root              new_root
///         /     \              /     \
///     new_root   z   rotate -> x   old_root
///      /  \                          /  \
///     x    y                        y    z
/// ```
fn rotate_right<O: Observer>(mut old_root: Box<Node>, observer: &mut O) -> Box<Node> {
    observer.before_rotation(Rotation::Right, &old_root);

    let mut new_root = old_root.left.take().expect("Rotate right => left child");
    old_root.left = new_root.right.take();

    // `old_root` is now below `new_root` so its height has to be fixed first.
    update_height(&mut old_root);
    new_root.right = Some(old_root);
    update_height(&mut new_root);

    observer.after_rotation(Rotation::Right, &new_root);
    new_root
}

/// Rotates `old_root` to the left, the mirror image of [`rotate_right`].
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<O: Observer>(mut old_root: Box<Node>, observer: &mut O) -> Box<Node> {
    observer.before_rotation(Rotation::Left, &old_root);

    let mut new_root = old_root.right.take().expect("Rotate left => right child");
    old_root.right = new_root.left.take();

    update_height(&mut old_root);
    new_root.left = Some(old_root);
    update_height(&mut new_root);

    observer.after_rotation(Rotation::Left, &new_root);
    new_root
}

/// Walks the whole subtree recomputing heights and returns the height of `node`, or the first
/// node found out of balance or with a stale cached height.
fn check_subtree(node: Option<&Node>) -> Result<usize, InvariantViolation> {
    let Some(node) = node else {
        return Ok(0);
    };
    let left_height = check_subtree(node.left())?;
    let right_height = check_subtree(node.right())?;

    let balance_factor = right_height as isize - left_height as isize;
    if !(-1..=1).contains(&balance_factor) {
        return Err(InvariantViolation::Unbalanced {
            key: node.key,
            balance_factor,
        });
    }

    let actual = left_height.max(right_height) + 1;
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            key: node.key,
            cached: node.height,
            actual,
        });
    }
    Ok(actual)
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::bst;
    use crate::observer::Silent;
    use crate::test::quick::Op;

    quickcheck::quickcheck! {
        fn valid_after_every_insert(xs: Vec<i16>) -> bool {
            let mut tree = Tree::with_observer(Silent);
            xs.into_iter().all(|x| {
                tree.insert(x.into());
                tree.verify_avl()
            })
        }
    }

    quickcheck::quickcheck! {
        fn same_keys_as_plain_bst(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::with_observer(Silent);
            let mut plain = bst::Tree::new();
            for op in &ops {
                match op {
                    Op::Insert(k) => {
                        let k = i64::from(*k);
                        if tree.insert(k) != plain.insert(k) {
                            return false;
                        }
                    }
                    Op::InOrder => {
                        if tree.in_order() != plain.in_order() {
                            return false;
                        }
                    }
                    Op::PopMax => {}
                }
            }

            tree.in_order() == plain.in_order() && tree.len() == plain.len()
        }
    }
}
