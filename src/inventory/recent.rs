//! Recency Buffer Module
//!
//! Bounded LIFO holding the most recently added products.

use tracing::{debug, warn};

use crate::inventory::Product;

// == Recency Buffer ==
/// Fixed-capacity stack of product copies.
///
/// The top of the stack (end of the Vec) is the most recently pushed entry;
/// the bottom (index 0) is the oldest and the one evicted when full.
#[derive(Debug)]
pub struct RecencyBuffer {
    /// Stack storage, bottom at index 0
    stack: Vec<Product>,
    /// Maximum number of entries held
    capacity: usize,
}

impl RecencyBuffer {
    // == Constructor ==
    /// Creates an empty buffer holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
            capacity,
        }
    }

    // == Push ==
    /// Pushes a product, evicting the oldest entry first if the buffer is full.
    ///
    /// A zero-capacity buffer retains nothing.
    pub fn push(&mut self, product: Product) {
        if self.capacity == 0 {
            warn!(id = %product.id, "Recency buffer has no capacity, dropping entry");
            return;
        }
        if self.stack.len() >= self.capacity {
            self.remove_oldest();
        }
        debug!(id = %product.id, name = %product.name, "Pushed to recency buffer");
        self.stack.push(product);
    }

    // == Pop ==
    /// Removes and returns the most recently pushed entry.
    pub fn pop(&mut self) -> Option<Product> {
        let product = self.stack.pop();
        match &product {
            Some(p) => debug!(id = %p.id, "Popped from recency buffer"),
            None => debug!("Recency buffer empty"),
        }
        product
    }

    // == Peek ==
    /// Returns the most recently pushed entry without removing it.
    pub fn peek(&self) -> Option<&Product> {
        self.stack.last()
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.stack.iter().rev()
    }

    pub fn size(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Remove Oldest ==
    /// Drops the bottom entry by unstacking everything above it into a
    /// holder and restacking afterwards. O(n) in the current size.
    fn remove_oldest(&mut self) {
        let mut holder = Vec::with_capacity(self.stack.len().saturating_sub(1));
        while self.stack.len() > 1 {
            if let Some(top) = self.stack.pop() {
                holder.push(top);
            }
        }
        if let Some(oldest) = self.stack.pop() {
            warn!(id = %oldest.id, name = %oldest.name, "Recency buffer full, evicted oldest");
        }
        while let Some(entry) = holder.pop() {
            self.stack.push(entry);
        }
    }
}
