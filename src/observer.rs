//! Hooks for watching the [AVL tree](crate::avl::Tree) and the [heap](crate::heap::MaxHeap) work.
//!
//! Both structures are generic over an [`Observer`] and call it at fixed points: when a leaf is
//! created or a duplicate dropped, when an imbalance is classified, around every rotation, after
//! every sift swap and once a sift settles. Observers only ever get shared references so they
//! can't affect the outcome of an operation.
//!
//! # Examples
//!
//! ```
//! use treelab::avl::{Case, Tree};
//! use treelab::observer::{Event, Recorder};
//!
//! let mut tree = Tree::with_observer(Recorder::default());
//! for key in [10, 20, 30] {
//!     tree.insert(key);
//! }
//!
//! let cases: Vec<Case> = tree
//!     .observer()
//!     .events()
//!     .iter()
//!     .filter_map(|event| match event {
//!         Event::Imbalance(imbalance) => Some(imbalance.case),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(cases, vec![Case::RightRight]);
//! ```

use crate::avl::{self, Imbalance, Rotation};
use crate::heap::Sift;

/// Callbacks fired while a structure is being mutated. Every method defaults to doing nothing.
pub trait Observer {
    /// A new AVL leaf holding `key` was created.
    fn leaf_created(&mut self, _key: i64) {}

    /// `key` was already in the AVL tree so nothing was inserted.
    fn duplicate_ignored(&mut self, _key: i64) {}

    /// A node was found outside `[-1, 1]` and is about to be repaired.
    fn imbalance(&mut self, _imbalance: Imbalance) {}

    /// `subtree` is about to be rotated.
    fn before_rotation(&mut self, _rotation: Rotation, _subtree: &avl::Node) {}

    /// `subtree` is the result of a rotation.
    fn after_rotation(&mut self, _rotation: Rotation, _subtree: &avl::Node) {}

    /// `value` was appended to the end of the heap, before sifting up.
    fn heap_appended(&mut self, _value: i64, _heap: &[i64]) {}

    /// The values at indices `from` and `to` were swapped while sifting.
    fn heap_swapped(&mut self, _sift: Sift, _from: usize, _to: usize, _heap: &[i64]) {}

    /// The last leaf `value` replaced the popped root, before sifting down.
    fn heap_root_replaced(&mut self, _value: i64, _heap: &[i64]) {}

    /// Sifting finished with the moved value resting at `index`.
    fn heap_settled(&mut self, _sift: Sift, _index: usize, _heap: &[i64]) {}

    /// `value` was removed from the top of the heap and the heap has been repaired.
    fn heap_popped(&mut self, _value: i64, _heap: &[i64]) {}
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Silent;

impl Observer for Silent {}

/// Forwards every hook to the [`log`] facade. Rotations and imbalances are logged at `debug`,
/// everything else at `trace`. Nothing is printed unless the program installs a logger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn leaf_created(&mut self, key: i64) {
        log::trace!("insert new leaf {}", key);
    }

    fn duplicate_ignored(&mut self, key: i64) {
        log::trace!("duplicate {} ignored", key);
    }

    fn imbalance(&mut self, imbalance: Imbalance) {
        log::debug!(
            "imbalance at {}: bf={}, child bf={} -> {:?}",
            imbalance.key,
            imbalance.balance_factor,
            imbalance.child_balance_factor,
            imbalance.case
        );
    }

    fn before_rotation(&mut self, rotation: Rotation, subtree: &avl::Node) {
        log::debug!(
            "rotate {:?} at {} (h={}, bf={})",
            rotation,
            subtree.key(),
            subtree.height(),
            subtree.balance_factor()
        );
    }

    fn after_rotation(&mut self, rotation: Rotation, subtree: &avl::Node) {
        log::debug!(
            "rotate {:?} done, {} is the new subtree root (h={}, bf={})",
            rotation,
            subtree.key(),
            subtree.height(),
            subtree.balance_factor()
        );
    }

    fn heap_appended(&mut self, value: i64, heap: &[i64]) {
        log::trace!("append {} to heap {:?}", value, heap);
    }

    fn heap_swapped(&mut self, sift: Sift, from: usize, to: usize, heap: &[i64]) {
        log::trace!("sift {:?}: swap idx {} with idx {} -> {:?}", sift, from, to, heap);
    }

    fn heap_root_replaced(&mut self, value: i64, heap: &[i64]) {
        log::trace!("move last {} to root and sift down: {:?}", value, heap);
    }

    fn heap_settled(&mut self, sift: Sift, index: usize, heap: &[i64]) {
        log::trace!("sift {:?} settled at idx {}: {:?}", sift, index, heap);
    }

    fn heap_popped(&mut self, value: i64, heap: &[i64]) {
        log::trace!("popped {}, heap is now {:?}", value, heap);
    }
}

/// One hook call captured by a [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// See [`Observer::leaf_created`].
    LeafCreated(i64),
    /// See [`Observer::duplicate_ignored`].
    DuplicateIgnored(i64),
    /// See [`Observer::imbalance`].
    Imbalance(Imbalance),
    /// See [`Observer::before_rotation`]. Holds the key of the subtree root.
    BeforeRotation(Rotation, i64),
    /// See [`Observer::after_rotation`]. Holds the key of the new subtree root.
    AfterRotation(Rotation, i64),
    /// See [`Observer::heap_appended`].
    HeapAppended(i64),
    /// See [`Observer::heap_swapped`].
    HeapSwapped(Sift, usize, usize),
    /// See [`Observer::heap_root_replaced`].
    HeapRootReplaced(i64),
    /// See [`Observer::heap_settled`].
    HeapSettled(Sift, usize),
    /// See [`Observer::heap_popped`].
    HeapPopped(i64),
}

/// Keeps every hook call, in order, as an [`Event`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    /// Everything recorded so far, oldest first.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the recorded events and starts over with an empty list.
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Just the rotations, in the order they finished.
    pub fn rotations(&self) -> Vec<Rotation> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::AfterRotation(rotation, _) => Some(*rotation),
                _ => None,
            })
            .collect()
    }
}

impl Observer for Recorder {
    fn leaf_created(&mut self, key: i64) {
        self.events.push(Event::LeafCreated(key));
    }

    fn duplicate_ignored(&mut self, key: i64) {
        self.events.push(Event::DuplicateIgnored(key));
    }

    fn imbalance(&mut self, imbalance: Imbalance) {
        self.events.push(Event::Imbalance(imbalance));
    }

    fn before_rotation(&mut self, rotation: Rotation, subtree: &avl::Node) {
        self.events.push(Event::BeforeRotation(rotation, subtree.key()));
    }

    fn after_rotation(&mut self, rotation: Rotation, subtree: &avl::Node) {
        self.events.push(Event::AfterRotation(rotation, subtree.key()));
    }

    fn heap_appended(&mut self, value: i64, _heap: &[i64]) {
        self.events.push(Event::HeapAppended(value));
    }

    fn heap_swapped(&mut self, sift: Sift, from: usize, to: usize, _heap: &[i64]) {
        self.events.push(Event::HeapSwapped(sift, from, to));
    }

    fn heap_root_replaced(&mut self, value: i64, _heap: &[i64]) {
        self.events.push(Event::HeapRootReplaced(value));
    }

    fn heap_settled(&mut self, sift: Sift, index: usize, _heap: &[i64]) {
        self.events.push(Event::HeapSettled(sift, index));
    }

    fn heap_popped(&mut self, value: i64, _heap: &[i64]) {
        self.events.push(Event::HeapPopped(value));
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn leaf_created(&mut self, key: i64) {
        (**self).leaf_created(key)
    }

    fn duplicate_ignored(&mut self, key: i64) {
        (**self).duplicate_ignored(key)
    }

    fn imbalance(&mut self, imbalance: Imbalance) {
        (**self).imbalance(imbalance)
    }

    fn before_rotation(&mut self, rotation: Rotation, subtree: &avl::Node) {
        (**self).before_rotation(rotation, subtree)
    }

    fn after_rotation(&mut self, rotation: Rotation, subtree: &avl::Node) {
        (**self).after_rotation(rotation, subtree)
    }

    fn heap_appended(&mut self, value: i64, heap: &[i64]) {
        (**self).heap_appended(value, heap)
    }

    fn heap_swapped(&mut self, sift: Sift, from: usize, to: usize, heap: &[i64]) {
        (**self).heap_swapped(sift, from, to, heap)
    }

    fn heap_root_replaced(&mut self, value: i64, heap: &[i64]) {
        (**self).heap_root_replaced(value, heap)
    }

    fn heap_settled(&mut self, sift: Sift, index: usize, heap: &[i64]) {
        (**self).heap_settled(sift, index, heap)
    }

    fn heap_popped(&mut self, value: i64, heap: &[i64]) {
        (**self).heap_popped(value, heap)
    }
}
