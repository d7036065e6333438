//! Addressable Priority Queues for Rust
//!
//! This crate provides a binary min-heap that can find its elements again by
//! value. Alongside the usual push/pop it offers O(1) membership tests and
//! O(log n) priority updates for items that are already enqueued, which is what
//! algorithms like Dijkstra's shortest path need from their frontier.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: O(log n) push, pop, update and remove; O(1) contains and peek
//! - **Identity keyed**: items are addressed by value, no handles to keep around
//! - **Pluggable hashing**: FxHash by default, any `BuildHasher` on request
//!
//! Priorities only need `Ord`. Wrap floats in `ordered_float::OrderedFloat` to
//! use them as priorities.
//!
//! # Example
//!
//! ```rust
//! use rust_indexed_heap::{IndexedBinaryHeap, QueueError};
//!
//! let mut heap = IndexedBinaryHeap::new();
//! heap.push("item1", 5).unwrap();
//! heap.push("item2", 3).unwrap();
//! heap.update(&"item1", 1).unwrap();
//! assert_eq!(heap.peek(), Some((&"item1", &1)));
//! assert_eq!(heap.push("item2", 0), Err(QueueError::AlreadyExists));
//! ```

pub mod indexed_binary;
pub mod traits;

// Re-export the main types for convenience
pub use indexed_binary::IndexedBinaryHeap;
pub use traits::{AddressableHeap, QueueError};
