//! Common traits for addressable priority queues
//!
//! This module provides the operation set shared by queues that can find an
//! enqueued element again by its identity:
//!
//! - [`AddressableHeap`]: push, pop, update, contains and friends
//! - [`QueueError`]: the three recoverable failure kinds those operations report
//!
//! Unlike handle-based heaps, an addressable heap is keyed by the element value
//! itself. Each identity can be enqueued at most once, and the caller refers to
//! it later by the same value rather than by an opaque handle.

use std::fmt;

/// Error type for queue operations
///
/// Every variant leaves the queue exactly as it was before the failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// `pop` was called on a queue with no elements
    EmptyQueue,
    /// The identity is not currently enqueued
    NotFound,
    /// `push` was called with an identity that is already enqueued
    AlreadyExists,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "queue is empty"),
            QueueError::NotFound => write!(f, "item not found in the queue"),
            QueueError::AlreadyExists => write!(f, "item already exists in the queue"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Base trait for addressable min-priority queues
///
/// Elements are (identity, priority) pairs. The identity is the caller's key and
/// must be unique within the queue; the priority orders extraction, smallest
/// first.
///
/// # Example
///
/// ```rust
/// use rust_indexed_heap::{AddressableHeap, IndexedBinaryHeap, QueueError};
///
/// let mut queue: IndexedBinaryHeap<&str, i32> = AddressableHeap::new();
/// queue.push("a", 3).unwrap();
/// queue.push("b", 1).unwrap();
/// assert_eq!(queue.push("a", 7), Err(QueueError::AlreadyExists));
///
/// queue.update(&"a", 0).unwrap();
/// assert_eq!(queue.pop(), Ok("a"));
/// assert_eq!(queue.pop(), Ok("b"));
/// assert_eq!(queue.pop(), Err(QueueError::EmptyQueue));
/// ```
pub trait AddressableHeap<T, P: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `item` with the given priority
    ///
    /// # Errors
    /// Returns [`QueueError::AlreadyExists`] if `item` is already enqueued.
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T, priority: P) -> Result<(), QueueError>;

    /// Removes and returns the item with the minimum priority
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if there is nothing to pop.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, QueueError>;

    /// Replaces the priority of an enqueued item
    ///
    /// The new priority may be larger or smaller than the old one.
    ///
    /// # Errors
    /// Returns [`QueueError::NotFound`] if `item` is not enqueued.
    ///
    /// # Time Complexity
    /// O(log n)
    fn update(&mut self, item: &T, priority: P) -> Result<(), QueueError>;

    /// Returns true if `item` is enqueued
    ///
    /// # Time Complexity
    /// O(1) expected
    fn contains(&self, item: &T) -> bool;

    /// Returns the minimum item and its priority without removing it
    fn peek(&self) -> Option<(&T, &P)>;
}
