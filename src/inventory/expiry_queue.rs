//! Expiry Queue Module
//!
//! Bounded FIFO of products awaiting expiry processing.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::inventory::Product;

// == Expiry Queue ==
/// Fixed-capacity FIFO queue of product copies.
///
/// Enqueueing into a full queue drops the product with a log line; callers get
/// no other signal.
#[derive(Debug)]
pub struct ExpiryQueue {
    /// Front = oldest, back = newest
    queue: VecDeque<Product>,
    capacity: usize,
}

impl ExpiryQueue {
    // == Constructor ==
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    // == Enqueue ==
    /// Appends a product to the back of the queue.
    ///
    /// Returns `false` when the queue was full and the product was dropped.
    pub fn enqueue(&mut self, product: Product) -> bool {
        if self.queue.len() >= self.capacity {
            warn!(id = %product.id, name = %product.name, "Expiry queue full, cannot enqueue");
            return false;
        }
        debug!(id = %product.id, name = %product.name, "Enqueued for expiry processing");
        self.queue.push_back(product);
        true
    }

    // == Dequeue ==
    /// Removes and returns the oldest entry.
    pub fn dequeue(&mut self) -> Option<Product> {
        let product = self.queue.pop_front();
        match &product {
            Some(p) => debug!(id = %p.id, "Dequeued from expiry queue"),
            None => debug!("Expiry queue empty"),
        }
        product
    }

    // == Peek ==
    pub fn peek(&self) -> Option<&Product> {
        self.queue.front()
    }

    pub fn size(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
