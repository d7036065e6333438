//! Indexed Binary Heap implementation
//!
//! A binary min-heap paired with a hash index from each element's identity to
//! its current slot in the backing vector. The index turns "find this element"
//! from an O(n) scan into an O(1) lookup, so priority updates and arbitrary
//! removals cost only the O(log n) sift that follows.
//!
//! Every slot move goes through a single placement step that writes the
//! new slot number into the index in the same step. After each public
//! operation the index holds exactly the identities in the vector, each mapped
//! to its true position.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop`      | O(log n)   |
//! | `update`   | O(log n)   |
//! | `remove`   | O(log n)   |
//! | `contains` | O(1)       |
//! | `peek`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::IndexedBinaryHeap;
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.push(1, 1).unwrap();
//! heap.push(2, 2).unwrap();
//! heap.push(3, 3).unwrap();
//!
//! heap.update(&3, 0).unwrap();
//! assert_eq!(heap.peek(), Some((&3, &0)));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(1));
//! assert!(heap.contains(&2));
//! ```

use crate::traits::{AddressableHeap, QueueError};
use log::{debug, trace};
use rustc_hash::FxBuildHasher;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// One enqueued element. Its slot is the position in `data`, mirrored in `slots`.
#[derive(Clone)]
struct Record<T, P> {
    item: T,
    priority: P,
}

/// An addressable binary min-heap
///
/// Items are identified by value: `T` is the key of the position index, so
/// each distinct item can be enqueued at most once. Items are cloned once on
/// `push`, one copy living in the heap vector and one in the index.
///
/// The hasher defaults to [`FxBuildHasher`]. Use
/// [`with_hasher`](Self::with_hasher) to pick a different one, for example
/// `std::collections::hash_map::RandomState` when items come from untrusted
/// input.
///
/// The ordering among items with equal priority is unspecified.
#[derive(Clone)]
pub struct IndexedBinaryHeap<T, P, S = FxBuildHasher> {
    data: Vec<Record<T, P>>,
    slots: HashMap<T, usize, S>,
}

impl<T, P> IndexedBinaryHeap<T, P> {
    /// Creates a new empty heap with the default hasher
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }

    /// Creates a new empty heap with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<T, P, S> IndexedBinaryHeap<T, P, S> {
    /// Creates a new empty heap whose index uses `hasher`
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            data: Vec::new(),
            slots: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new empty heap with room for `capacity` items whose index uses `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of items the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity().min(self.slots.capacity())
    }

    /// Returns the minimum item and its priority without removing it
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.data.first().map(|r| (&r.item, &r.priority))
    }

    /// Removes every item, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
        self.slots.clear();
    }
}

impl<T, P, S> IndexedBinaryHeap<T, P, S>
where
    T: Hash + Eq + Clone,
    P: Ord,
    S: BuildHasher,
{
    /// Inserts `item` with the given priority
    ///
    /// # Errors
    /// Returns [`QueueError::AlreadyExists`] if `item` is already enqueued. The
    /// heap is left untouched and the existing priority is kept.
    pub fn push(&mut self, item: T, priority: P) -> Result<(), QueueError> {
        if self.slots.contains_key(&item) {
            debug!("push rejected: item already enqueued");
            return Err(QueueError::AlreadyExists);
        }
        self.insert_new(item, priority);
        Ok(())
    }

    /// Inserts `item`, or replaces its priority if it is already enqueued
    ///
    /// Returns true if a new item was inserted.
    pub fn push_or_update(&mut self, item: T, priority: P) -> bool {
        match self.slots.get(&item) {
            Some(&slot) => {
                self.set_priority(slot, priority);
                false
            }
            None => {
                self.insert_new(item, priority);
                true
            }
        }
    }

    /// Removes and returns the item with the minimum priority
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    /// Removes and returns the minimum item together with its priority
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the heap is empty.
    pub fn pop_with_priority(&mut self) -> Result<(T, P), QueueError> {
        if self.data.is_empty() {
            debug!("pop rejected: queue is empty");
            return Err(QueueError::EmptyQueue);
        }
        let record = self.remove_at(0);
        trace!("popped minimum, {} items remain", self.data.len());
        Ok((record.item, record.priority))
    }

    /// Replaces the priority of an enqueued item and restores heap order
    ///
    /// # Errors
    /// Returns [`QueueError::NotFound`] if `item` is not enqueued.
    pub fn update<Q>(&mut self, item: &Q, priority: P) -> Result<(), QueueError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.slots.get(item) else {
            debug!("update rejected: item not enqueued");
            return Err(QueueError::NotFound);
        };
        self.set_priority(slot, priority);
        Ok(())
    }

    /// Removes an arbitrary item, returning the priority it had
    ///
    /// # Errors
    /// Returns [`QueueError::NotFound`] if `item` is not enqueued.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<P, QueueError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&slot) = self.slots.get(item) else {
            debug!("remove rejected: item not enqueued");
            return Err(QueueError::NotFound);
        };
        let record = self.remove_at(slot);
        trace!("removed item from slot {slot}, {} items remain", self.data.len());
        Ok(record.priority)
    }

    /// Returns true if `item` is enqueued
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(item)
    }

    /// Returns the current priority of `item`, if it is enqueued
    pub fn priority<Q>(&self, item: &Q) -> Option<&P>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(item).map(|&slot| &self.data[slot].priority)
    }

    /// Consumes the heap and returns its items in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<(T, P)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(entry) = self.pop_with_priority() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks the heap property and the consistency of the position index
    ///
    /// Returns false if any child has a smaller priority than its parent, or if
    /// the index does not map every stored item to its actual slot.
    pub fn verify_invariants(&self) -> bool {
        if self.slots.len() != self.data.len() {
            return false;
        }
        self.data.iter().enumerate().all(|(slot, record)| {
            let indexed = self.slots.get(&record.item) == Some(&slot);
            let ordered = slot == 0 || self.data[(slot - 1) / 2].priority <= record.priority;
            indexed && ordered
        })
    }

    fn insert_new(&mut self, item: T, priority: P) {
        let slot = self.data.len();
        self.slots.insert(item.clone(), slot);
        self.data.push(Record { item, priority });
        let moved = self.sift_up(slot);
        trace!("pushed item at slot {slot} (moved: {moved}), {} items", self.data.len());
    }

    fn set_priority(&mut self, slot: usize, priority: P) {
        self.data[slot].priority = priority;
        if !self.sift_up(slot) {
            self.sift_down(slot);
        }
        trace!("updated priority of item at slot {slot}");
    }

    /// Takes the record out of `slot`, filling the hole with the last record
    fn remove_at(&mut self, slot: usize) -> Record<T, P> {
        let record = self.data.swap_remove(slot);
        self.slots.remove(&record.item);
        if slot < self.data.len() {
            self.place(slot);
            if !self.sift_up(slot) {
                self.sift_down(slot);
            }
        }
        debug_assert_eq!(self.slots.len(), self.data.len());
        record
    }

    /// Records in the index that the item now lives at `slot`
    fn place(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(&self.data[slot].item) {
            *entry = slot;
        } else {
            debug_assert!(false, "item at slot {slot} missing from index");
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.place(a);
        self.place(b);
    }

    /// Move element at slot up to maintain heap property; returns true if it moved
    fn sift_up(&mut self, mut slot: usize) -> bool {
        let start = slot;
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.data[slot].priority < self.data[parent].priority {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
        slot != start
    }

    /// Move element at slot down to maintain heap property
    fn sift_down(&mut self, mut slot: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && self.data[left].priority < self.data[smallest].priority {
                smallest = left;
            }
            if right < len && self.data[right].priority < self.data[smallest].priority {
                smallest = right;
            }

            if smallest != slot {
                self.swap(slot, smallest);
                slot = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, P, S> AddressableHeap<T, P> for IndexedBinaryHeap<T, P, S>
where
    T: Hash + Eq + Clone,
    P: Ord,
    S: BuildHasher + Default,
{
    fn new() -> Self {
        Self::with_hasher(S::default())
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T, priority: P) -> Result<(), QueueError> {
        IndexedBinaryHeap::push(self, item, priority)
    }

    fn pop(&mut self) -> Result<T, QueueError> {
        IndexedBinaryHeap::pop(self)
    }

    fn update(&mut self, item: &T, priority: P) -> Result<(), QueueError> {
        IndexedBinaryHeap::update(self, item, priority)
    }

    fn contains(&self, item: &T) -> bool {
        IndexedBinaryHeap::contains(self, item)
    }

    fn peek(&self) -> Option<(&T, &P)> {
        IndexedBinaryHeap::peek(self)
    }
}

impl<T, P, S: Default> Default for IndexedBinaryHeap<T, P, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: fmt::Debug, P: fmt::Debug, S> fmt::Debug for IndexedBinaryHeap<T, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.data.iter().map(|r| (&r.item, &r.priority)))
            .finish()
    }
}
