//! An array-backed binary max-heap.
//!
//! The `Vec` is read as a complete binary tree: the node at index `i` has children at `2i + 1`
//! and `2i + 2` and its parent at `(i - 1) / 2`. Every parent is at least as large as its
//! children, so the largest value is always at index `0`.
//!
//! # Examples
//!
//! ```
//! use treelab::heap::MaxHeap;
//!
//! let mut heap: MaxHeap = [10, 5, 15, 3, 7, 18].into_iter().collect();
//!
//! assert_eq!(heap.peek(), Some(18));
//! assert!(heap.verify_heap());
//!
//! let mut popped = Vec::new();
//! while let Some(max) = heap.pop_max() {
//!     popped.push(max);
//! }
//! assert_eq!(popped, vec![18, 15, 10, 7, 5, 3]);
//!
//! // Popping an empty heap is not an error.
//! assert_eq!(heap.pop_max(), None);
//! ```

use crate::error::InvariantViolation;
use crate::observer::{LogObserver, Observer};

/// The direction a value moves in while the heap is repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sift {
    /// Towards the root, after an insert.
    Up,
    /// Towards the leaves, after the root was replaced by a pop.
    Down,
}

/// A max-heap of `i64` values. `O` is told about every append, swap and pop; see
/// [`crate::observer`].
#[derive(Debug, Clone)]
pub struct MaxHeap<O = LogObserver> {
    data: Vec<i64>,
    observer: O,
}

impl Default for MaxHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxHeap {
    /// Generates a new, empty `MaxHeap` that reports to the [`log`] facade.
    pub fn new() -> Self {
        Self::with_observer(LogObserver)
    }
}

impl<O> MaxHeap<O> {
    /// Generates a new, empty `MaxHeap` that reports to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self {
            data: Vec::new(),
            observer,
        }
    }

    /// Appends `value` as the last leaf and swaps it towards the root while it is strictly larger
    /// than its parent.
    pub fn insert(&mut self, value: i64)
    where
        O: Observer,
    {
        self.data.push(value);
        self.observer.heap_appended(value, &self.data);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the largest value, or `None` if the heap is empty. The last leaf takes
    /// the root's place and is swapped down until neither child is larger.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelab::heap::MaxHeap;
    ///
    /// let mut heap = MaxHeap::new();
    /// assert_eq!(heap.pop_max(), None);
    ///
    /// heap.insert(0);
    /// assert_eq!(heap.pop_max(), Some(0));
    /// assert!(heap.is_empty());
    /// ```
    pub fn pop_max(&mut self) -> Option<i64>
    where
        O: Observer,
    {
        let last = self.data.pop()?;
        let max = match self.data.first_mut() {
            Some(root) => std::mem::replace(root, last),
            // `last` was the root.
            None => last,
        };
        if !self.data.is_empty() {
            self.observer.heap_root_replaced(last, &self.data);
            self.sift_down(0);
        }
        self.observer.heap_popped(max, &self.data);
        Some(max)
    }

    /// The largest value without removing it.
    pub fn peek(&self) -> Option<i64> {
        self.data.first().copied()
    }

    /// Returns whether no child is larger than its parent.
    pub fn verify_heap(&self) -> bool {
        self.check_heap().is_ok()
    }

    /// Like [`MaxHeap::verify_heap`] but describes the first parent found with a larger child.
    pub fn check_heap(&self) -> Result<(), InvariantViolation> {
        for (parent_index, &parent) in self.data.iter().enumerate() {
            for child_index in children(parent_index) {
                match self.data.get(child_index) {
                    Some(&child) if child > parent => {
                        return Err(InvariantViolation::HeapOrder {
                            parent_index,
                            parent,
                            child_index,
                            child,
                        })
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap has no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The backing array in heap order.
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// The backing array cut into the levels of the tree it represents: level `k` holds up to
    /// `2^k` values and only the last one may be partial.
    ///
    /// # Examples
    ///
    /// ```
    /// use treelab::heap::MaxHeap;
    ///
    /// let heap: MaxHeap = (1..=5).collect();
    /// let levels = heap.levels();
    ///
    /// assert_eq!(levels.len(), 3);
    /// assert_eq!(levels[0], &[5]);
    /// assert_eq!(levels[1].len(), 2);
    /// assert_eq!(levels[2].len(), 2);
    /// ```
    pub fn levels(&self) -> Vec<&[i64]> {
        let mut levels = Vec::new();
        let mut start = 0;
        let mut width = 1;
        while start < self.data.len() {
            let end = self.data.len().min(start + width);
            levels.push(&self.data[start..end]);
            start = end;
            width *= 2;
        }
        levels
    }

    /// The observer this heap reports to.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer this heap reports to.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn sift_up(&mut self, mut idx: usize)
    where
        O: Observer,
    {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] <= self.data[parent] {
                break;
            }
            self.data.swap(idx, parent);
            self.observer.heap_swapped(Sift::Up, idx, parent, &self.data);
            idx = parent;
        }
        self.observer.heap_settled(Sift::Up, idx, &self.data);
    }

    fn sift_down(&mut self, mut idx: usize)
    where
        O: Observer,
    {
        loop {
            // Only strictly larger values win, so on a tie the left child is picked and a child
            // equal to its parent stays put.
            let mut largest = idx;
            for child in children(idx) {
                if child < self.data.len() && self.data[child] > self.data[largest] {
                    largest = child;
                }
            }
            if largest == idx {
                break;
            }
            self.data.swap(idx, largest);
            self.observer.heap_swapped(Sift::Down, idx, largest, &self.data);
            idx = largest;
        }
        self.observer.heap_settled(Sift::Down, idx, &self.data);
    }
}

impl<O: Observer> Extend<i64> for MaxHeap<O> {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i64> for MaxHeap {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

/// Indices of the left and right children of `idx`. They may be past the end of the heap.
fn children(idx: usize) -> [usize; 2] {
    [2 * idx + 1, 2 * idx + 2]
}
