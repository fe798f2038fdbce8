//! The read-only view of a binary tree node shared by [`bst::Node`](crate::bst::Node) and
//! [`avl::Node`](crate::avl::Node).
//!
//! Anything that only needs to walk a tree (a renderer, a verifier, a test) can be written once
//! against [`TreeNode`].
//!
//! # Examples
//!
//! ```
//! use treelab::{avl, bst, node};
//!
//! let mut plain = bst::Tree::new();
//! let mut balanced = avl::Tree::new();
//! for key in [3, 1, 2] {
//!     plain.insert(key);
//!     balanced.insert(key);
//! }
//!
//! assert_eq!(node::in_order(plain.root()), vec![1, 2, 3]);
//! assert_eq!(node::in_order(balanced.root()), vec![1, 2, 3]);
//! ```

/// A binary tree node with an `i64` key and up to two children.
pub trait TreeNode {
    /// The ordering key stored in this node.
    fn key(&self) -> i64;

    /// The root of the left subtree, if any.
    fn left(&self) -> Option<&Self>;

    /// The root of the right subtree, if any.
    fn right(&self) -> Option<&Self>;
}

/// Collects the keys of the subtree rooted at `root` by visiting the left subtree, then the node,
/// then the right subtree. For a valid BST the result is ascending.
///
/// Walks with an explicit stack so an unbalanced tree of any height can be visited.
pub fn in_order<N: TreeNode>(root: Option<&N>) -> Vec<i64> {
    let mut keys = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(n) = current {
            stack.push(n);
            current = n.left();
        }
        let Some(n) = stack.pop() else {
            break;
        };
        keys.push(n.key());
        current = n.right();
    }
    keys
}

/// Counts the nodes in the subtree rooted at `root`.
pub fn size<N: TreeNode>(root: Option<&N>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&N> = root.into_iter().collect();
    while let Some(n) = stack.pop() {
        count += 1;
        stack.extend(n.left());
        stack.extend(n.right());
    }
    count
}

/// Computes the height of the subtree rooted at `root` by walking it. An empty subtree has a
/// height of 0 and a leaf has a height of 1.
pub fn depth<N: TreeNode>(root: Option<&N>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&N, usize)> = root.map(|n| (n, 1)).into_iter().collect();
    while let Some((n, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(n.left().map(|child| (child, level + 1)));
        stack.extend(n.right().map(|child| (child, level + 1)));
    }
    deepest
}
