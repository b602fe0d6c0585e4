//! Urgency Queue Module
//!
//! Bounded min-priority queue ordering products by urgency level.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::inventory::{Product, Urgency};

// == Urgent Entry ==
/// A product copy together with the urgency it had when inserted.
///
/// The urgency is frozen: it is never re-evaluated while the entry sits in
/// the queue, so it grows stale as days pass.
#[derive(Debug, Clone, PartialEq)]
pub struct UrgentEntry {
    pub product: Product,
    pub urgency: Urgency,
}

/// Heap slot ordered by (urgency, insertion sequence), reversed so that
/// `BinaryHeap`'s max-heap pops the lowest urgency and, among equal levels,
/// the earliest insertion.
#[derive(Debug)]
struct Slot {
    seq: u64,
    entry: UrgentEntry,
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .entry
            .urgency
            .cmp(&self.entry.urgency)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

// == Urgency Queue ==
/// Fixed-capacity min-heap keyed on urgency level.
///
/// Ties are broken by insertion order: of two entries with the same level,
/// the one inserted first is extracted first.
#[derive(Debug)]
pub struct UrgencyQueue {
    heap: BinaryHeap<Slot>,
    capacity: usize,
    /// Next insertion sequence number
    next_seq: u64,
}

impl UrgencyQueue {
    // == Constructor ==
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    // == Insert ==
    /// Inserts a product copy with its urgency computed as of `today`.
    ///
    /// Returns `false` when the queue was full and the product was dropped.
    pub fn insert(&mut self, product: Product, today: NaiveDate) -> bool {
        if self.heap.len() >= self.capacity {
            warn!(id = %product.id, name = %product.name, "Urgency queue full, dropping entry");
            return false;
        }

        let urgency = product.urgency_on(today);
        debug!(id = %product.id, name = %product.name, %urgency, "Inserted into urgency queue");

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Slot {
            seq,
            entry: UrgentEntry { product, urgency },
        });
        true
    }

    // == Extract Min ==
    /// Removes and returns the most urgent entry.
    pub fn extract_min(&mut self) -> Option<UrgentEntry> {
        let entry = self.heap.pop().map(|slot| slot.entry);
        match &entry {
            Some(e) => debug!(id = %e.product.id, "Removed most urgent entry"),
            None => debug!("Urgency queue empty"),
        }
        entry
    }

    // == Peek Min ==
    /// Returns the most urgent entry without removing it.
    pub fn peek_min(&self) -> Option<&UrgentEntry> {
        self.heap.peek().map(|slot| &slot.entry)
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
