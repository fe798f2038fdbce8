//! This crate exposes three classic in-memory structures over `i64` keys,
//! mostly for educational purposes: an unbalanced Binary Search Tree, a
//! self-balancing AVL tree and an array-backed max-heap. Each one can verify
//! its own structural invariants after mutation.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is defined recursively using the notion of a `Node`.
//! A `Node` stores a key and sometimes has child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! Searching takes `O(height)`. Without any balancing, inserting keys in
//! sorted order produces a tree whose height equals its size. See [`bst`].
//!
//! ## AVL Tree
//!
//! An AVL tree is a BST that additionally keeps, for every `Node`, the
//! heights of its two subtrees within one of each other. After every insert
//! it walks back up the insertion path and repairs any `Node` that became
//! too lopsided with one or two rotations. This limits the height to
//! `O(lg N)`. See [`avl`].
//!
//! ## Max-Heap
//!
//! A complete binary tree stored in a `Vec` where every parent is at least as
//! large as its children, so the maximum is always at index `0`. See
//! [`heap`].
//!
//! ## Watching the algorithms work
//!
//! The AVL tree and the heap accept an [`Observer`](observer::Observer) that
//! is told about every rotation and sift step. By default these are forwarded
//! to the [`log`] facade.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod bst;
pub mod error;
pub mod heap;
pub mod node;
pub mod observer;

mod util;
