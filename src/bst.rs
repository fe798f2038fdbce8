//! A plain, unbalanced Binary Search Tree. Keys are inserted where a search for them would end
//! and the tree is never restructured, so inserting sorted keys degrades it into a linked list.
//! It's here as a baseline to compare against the [AVL tree](crate::avl).
//!
//! # Examples
//!
//! ```
//! use treelab::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(1));
//!
//! // Inserting the same key again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.in_order(), vec![1]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::InvariantViolation;
use crate::node::{self, TreeNode};
use crate::util;

/// An unbalanced Binary Search Tree of `i64` keys.
///
/// Nothing here recurses: a tree built from sorted keys is as tall as it is long, so inserting,
/// walking, cloning and dropping all use loops.
#[derive(Default)]
pub struct Tree {
    root: Option<Box<Node>>,
    len: usize,
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key` below the node where a search for it runs out of children. Returns `false`
    /// and leaves the tree untouched if `key` is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelab::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [1, 2, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// // No balancing - sorted input makes a stick.
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn insert(&mut self, key: i64) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                // Duplicates are ignored.
                Ordering::Equal => return false,
            };
        }
        *cursor = Some(Box::new(Node::new(key)));
        self.len += 1;
        true
    }

    /// Returns whether `key` is stored in the tree.
    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(n) = current {
            current = match key.cmp(&n.key) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => n.right.as_deref(),
            };
        }
        false
    }

    /// All keys in ascending order. Each call builds a fresh `Vec`.
    pub fn in_order(&self) -> Vec<i64> {
        node::in_order(self.root())
    }

    /// Returns whether every node's left subtree holds only smaller keys and its right subtree only
    /// larger keys.
    pub fn verify_bst(&self) -> bool {
        self.check_bst().is_ok()
    }

    /// Like [`Tree::verify_bst`] but describes the first out-of-order pair of keys.
    pub fn check_bst(&self) -> Result<(), InvariantViolation> {
        util::check_in_order(&self.in_order())
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

    /// The number of nodes on the longest root-to-leaf path. Computed by walking the whole tree.
    pub fn height(&self) -> usize {
        node::depth(self.root())
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        // Detach children before each node is dropped so no drop recurses.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        // Inserting every parent before its children rebuilds the same shape.
        let mut tree = Self::new();
        let mut stack: Vec<&Node> = self.root().into_iter().collect();
        while let Some(n) = stack.pop() {
            tree.insert(n.key);
            stack.extend(n.right());
            stack.extend(n.left());
        }
        tree
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &self.in_order())
            .finish()
    }
}

/// A BST `Node` has a key and up to two children.
pub struct Node {
    key: i64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(key: i64) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(|n| n.key))
            .field("right", &self.right().map(|n| n.key))
            .finish()
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
