//! # Invariant violations.
//!
//! An `InvariantViolation` describes the first broken structural rule a verifier found. The
//! boolean `verify_*` methods on each structure only report whether one exists; the `check_*`
//! methods hand it back.

use thiserror::Error;

/// A broken BST, AVL or heap invariant.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum InvariantViolation {
    /// The in-order key sequence is not strictly increasing at `index`.
    #[error("in-order keys not strictly increasing at index {index}: {left} then {right}")]
    OutOfOrder {
        /// Position of `left` in the in-order sequence.
        index: usize,
        /// The key at `index`.
        left: i64,
        /// The key at `index + 1`.
        right: i64,
    },
    /// A node's subtrees differ in height by more than one.
    #[error("node {key} has balance factor {balance_factor}")]
    Unbalanced {
        /// Key of the offending node.
        key: i64,
        /// Right subtree height minus left subtree height.
        balance_factor: isize,
    },
    /// A node's cached height disagrees with the height of its subtree.
    #[error("node {key} caches height {cached} but its subtree has height {actual}")]
    StaleHeight {
        /// Key of the offending node.
        key: i64,
        /// The height stored in the node.
        cached: usize,
        /// The recomputed height.
        actual: usize,
    },
    /// A heap child is larger than its parent.
    #[error("heap child {child} at index {child_index} exceeds parent {parent} at index {parent_index}")]
    HeapOrder {
        /// Index of the parent.
        parent_index: usize,
        /// Value at `parent_index`.
        parent: i64,
        /// Index of the child.
        child_index: usize,
        /// Value at `child_index`.
        child: i64,
    },
}
