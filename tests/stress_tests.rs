//! Stress tests that push the indexed heap with large operation counts
//!
//! These tests perform many operations in various patterns to catch index
//! bookkeeping mistakes that only show up once the tree is several levels deep.

use rust_indexed_heap::{IndexedBinaryHeap, QueueError};

/// Deterministic pseudo-random sequence so failures reproduce
struct Lcg(u64);

impl Lcg {
    fn next_value(&mut self) -> i64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % 100_000) as i64 - 50_000
    }
}

#[test]
fn test_massive_operations() {
    let mut heap = IndexedBinaryHeap::new();

    for i in 0..10_000 {
        heap.push(i, i).unwrap();
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.pop(), Err(QueueError::EmptyQueue));
}

/// Decrease every key, as a shortest-path relaxation would
#[test]
fn test_many_decrease_keys() {
    let mut heap = IndexedBinaryHeap::new();

    for i in 0..5_000 {
        heap.push(i, 100_000 + i).unwrap();
    }
    for i in (0..5_000).rev() {
        heap.update(&i, i).unwrap();
    }
    assert!(heap.verify_invariants());

    for i in 0..5_000 {
        assert_eq!(heap.pop_with_priority(), Ok((i, i)));
    }
}

/// Increase every key so each update sifts down
#[test]
fn test_many_increase_keys() {
    let mut heap = IndexedBinaryHeap::new();

    for i in 0..5_000 {
        heap.push(i, i).unwrap();
    }
    for i in 0..5_000 {
        heap.update(&i, 100_000 - i).unwrap();
    }
    assert!(heap.verify_invariants());

    for i in (0..5_000).rev() {
        assert_eq!(heap.pop(), Ok(i));
    }
}

#[test]
fn test_random_updates_keep_invariants() {
    let mut rng = Lcg(42);
    let mut heap = IndexedBinaryHeap::new();

    for i in 0..2_000u32 {
        heap.push(i, rng.next_value()).unwrap();
    }
    for round in 0..20_000u32 {
        let item = (rng.next_value().unsigned_abs() % 2_000) as u32;
        heap.update(&item, rng.next_value()).unwrap();
        if round % 1_000 == 0 {
            assert!(heap.verify_invariants());
        }
    }
    assert!(heap.verify_invariants());

    let sorted = heap.into_sorted_vec();
    assert_eq!(sorted.len(), 2_000);
    assert!(sorted.windows(2).all(|w| w[0].1 <= w[1].1));
}

/// Interleave every operation kind against a steady-state population
#[test]
fn test_mixed_churn() {
    let mut rng = Lcg(7);
    let mut heap = IndexedBinaryHeap::new();
    let mut live = 0usize;

    for step in 0..50_000u64 {
        let item = rng.next_value().unsigned_abs() % 1_000;
        let priority = rng.next_value();
        match step % 5 {
            0 | 1 => {
                if heap.push(item, priority).is_ok() {
                    live += 1;
                }
            }
            2 => {
                if heap.pop().is_ok() {
                    live -= 1;
                }
            }
            3 => {
                let _ = heap.update(&item, priority);
            }
            _ => {
                if heap.remove(&item).is_ok() {
                    live -= 1;
                }
            }
        }
        assert_eq!(heap.len(), live);
    }
    assert!(heap.verify_invariants());
}

/// Equal priorities still drain completely and every item comes out once
#[test]
fn test_all_equal_priorities() {
    let mut heap = IndexedBinaryHeap::new();

    for i in 0..1_000 {
        heap.push(i, 0).unwrap();
    }
    heap.update(&500, 0).unwrap();
    assert!(heap.verify_invariants());

    let mut seen = vec![false; 1_000];
    while let Ok(i) = heap.pop() {
        assert!(!seen[i]);
        seen[i] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
