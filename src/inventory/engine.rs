//! Inventory Engine Module
//!
//! Owns the authoritative product collection and fans every addition out to
//! the recency buffer, the expiry queue and the urgency queue.
//!
//! The auxiliary structures hold value copies taken at insertion time. They
//! are not updated when an authoritative entry changes, and removing a product
//! from the collection leaves its copies in place until they drain through
//! their own pop, dequeue or extract operations.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::inventory::{
    current_date, DashboardStats, ExpiryQueue, NewProduct, Product, RecencyBuffer, Urgency,
    UrgencyQueue, UrgentEntry, DEFAULT_EXPIRING_SOON_DAYS, DEFAULT_EXPIRY_QUEUE_CAPACITY,
    DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_RECENT_CAPACITY, DEFAULT_URGENCY_CAPACITY,
};

// == Views ==
/// What survives of a product after it leaves the expiry queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiredProduct {
    pub id: String,
    pub name: String,
    pub expiry_date: NaiveDate,
}

/// What the urgency queue reports about its most urgent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgentProduct {
    pub id: String,
    pub name: String,
    /// Level frozen at insertion time
    pub urgency: Urgency,
}

impl From<&UrgentEntry> for UrgentProduct {
    fn from(entry: &UrgentEntry) -> Self {
        Self {
            id: entry.product.id.clone(),
            name: entry.product.name.clone(),
            urgency: entry.urgency,
        }
    }
}

// == Inventory Engine ==
/// Single-owner inventory state. Not internally synchronized.
#[derive(Debug)]
pub struct InventoryEngine {
    /// Authoritative collection, insertion order preserved
    products: Vec<Product>,
    recent: RecencyBuffer,
    expiry_queue: ExpiryQueue,
    urgency_queue: UrgencyQueue,
    /// Next value of the identifier counter
    next_id: u64,
    low_stock_threshold: u32,
    expiring_soon_days: i64,
}

impl InventoryEngine {
    // == Constructor ==
    /// Creates an empty engine with the given auxiliary structure capacities.
    ///
    /// # Arguments
    /// * `recent_capacity` - Entries kept by the recency buffer
    /// * `expiry_queue_capacity` - Entries accepted by the expiry queue
    /// * `urgency_capacity` - Entries accepted by the urgency queue
    pub fn new(
        recent_capacity: usize,
        expiry_queue_capacity: usize,
        urgency_capacity: usize,
    ) -> Self {
        Self {
            products: Vec::new(),
            recent: RecencyBuffer::new(recent_capacity),
            expiry_queue: ExpiryQueue::new(expiry_queue_capacity),
            urgency_queue: UrgencyQueue::new(urgency_capacity),
            next_id: 1,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
        }
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_expiring_soon_days(mut self, days: i64) -> Self {
        self.expiring_soon_days = days;
        self
    }

    // == Identifiers ==
    /// Hands out the next identifier from a monotonic counter.
    fn next_product_id(&mut self) -> String {
        let id = format!("PROD_{}", self.next_id);
        self.next_id += 1;
        id
    }

    // == Create ==
    /// Assigns an identifier to `new` and adds the resulting product.
    pub fn create_product(&mut self, new: NewProduct) -> Product {
        self.create_product_on(new, current_date())
    }

    /// As [`create_product`](Self::create_product), with urgency evaluated as of `today`.
    pub fn create_product_on(&mut self, new: NewProduct, today: NaiveDate) -> Product {
        let id = self.next_product_id();
        let product = new.into_product(id);
        self.add_product_on(product.clone(), today);
        product
    }

    // == Add ==
    /// Appends a product and copies it into every auxiliary structure.
    pub fn add_product(&mut self, product: Product) {
        self.add_product_on(product, current_date());
    }

    /// As [`add_product`](Self::add_product), with urgency evaluated as of `today`.
    ///
    /// Each auxiliary insertion stands alone: a capacity drop in one structure
    /// does not undo the others.
    pub fn add_product_on(&mut self, product: Product, today: NaiveDate) {
        info!(id = %product.id, name = %product.name, "Adding product");

        self.recent.push(product.clone());
        let queued = self.expiry_queue.enqueue(product.clone());
        let prioritized = self.urgency_queue.insert(product.clone(), today);
        debug!(queued, prioritized, "Fan-out complete");

        self.products.push(product);
    }

    // == Remove ==
    /// Removes the first product with the given identifier from the
    /// authoritative collection. Auxiliary copies are left untouched.
    pub fn remove_product(&mut self, id: &str) -> Option<Product> {
        match self.products.iter().position(|p| p.id == id) {
            Some(index) => {
                let removed = self.products.remove(index);
                info!(id, name = %removed.name, "Removed product from collection");
                Some(removed)
            }
            None => {
                info!(id, "Product not found for removal");
                None
            }
        }
    }

    // == Process Next Expired ==
    /// Dequeues the oldest entry of the expiry queue.
    pub fn process_next_expired(&mut self) -> Option<ExpiredProduct> {
        let product = self.expiry_queue.dequeue()?;
        info!(id = %product.id, name = %product.name, "Processed expiry entry");
        Some(ExpiredProduct {
            id: product.id,
            name: product.name,
            expiry_date: product.expiry_date,
        })
    }

    // == Most Urgent ==
    /// Peeks the urgency queue's minimum without removing it.
    pub fn most_urgent_product(&self) -> Option<UrgentProduct> {
        self.urgency_queue.peek_min().map(UrgentProduct::from)
    }

    /// Removes and returns the urgency queue's minimum.
    pub fn extract_most_urgent(&mut self) -> Option<UrgentEntry> {
        self.urgency_queue.extract_min()
    }

    // == Recent ==
    /// Pops the most recently added copy from the recency buffer.
    pub fn pop_recent(&mut self) -> Option<Product> {
        self.recent.pop()
    }

    /// Recency buffer contents, most recent first.
    pub fn recent_products(&self) -> Vec<Product> {
        self.recent.iter().cloned().collect()
    }

    // == Authoritative Access ==
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Owned copy of the authoritative collection.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Mutable access to an authoritative entry. Changes are not propagated
    /// to auxiliary copies.
    pub fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // == Stats ==
    /// Dashboard counters evaluated against the current date.
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.dashboard_stats_on(current_date())
    }

    pub fn dashboard_stats_on(&self, today: NaiveDate) -> DashboardStats {
        let mut stats = DashboardStats::new();
        stats.count_products(
            &self.products,
            today,
            self.low_stock_threshold,
            self.expiring_soon_days,
        );
        stats.recent_additions = self.recent.size();
        stats.in_queue = self.expiry_queue.size();
        stats.urgent_count = self.urgency_queue.size();
        stats
    }
}

impl Default for InventoryEngine {
    fn default() -> Self {
        Self::new(
            DEFAULT_RECENT_CAPACITY,
            DEFAULT_EXPIRY_QUEUE_CAPACITY,
            DEFAULT_URGENCY_CAPACITY,
        )
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn new_product(name: &str, days: i64, quantity: u32) -> NewProduct {
        let mut new = NewProduct::new(name, today() + Duration::days(days));
        new.quantity = quantity;
        new
    }

    #[test]
    fn test_engine_default() {
        let engine = InventoryEngine::default();
        assert!(engine.is_empty());
        assert_eq!(engine.dashboard_stats_on(today()), DashboardStats::default());
        assert!(engine.most_urgent_product().is_none());
    }

    #[test]
    fn test_identifiers_are_unique_and_sequential() {
        let mut engine = InventoryEngine::default();
        let a = engine.create_product_on(new_product("A", 30, 5), today());
        let b = engine.create_product_on(new_product("B", 30, 5), today());
        assert_eq!(a.id, "PROD_1");
        assert_eq!(b.id, "PROD_2");
    }

    #[test]
    fn test_add_fans_out_to_all_structures() {
        let mut engine = InventoryEngine::default();
        engine.create_product_on(new_product("Milk", 2, 20), today());

        let stats = engine.dashboard_stats_on(today());
        assert_eq!(stats.total_products, 1);
        assert_eq!(stats.recent_additions, 1);
        assert_eq!(stats.in_queue, 1);
        assert_eq!(stats.urgent_count, 1);
    }

    #[test]
    fn test_capacity_drop_does_not_roll_back_others() {
        let mut engine = InventoryEngine::new(5, 1, 5);
        engine.create_product_on(new_product("A", 10, 5), today());
        engine.create_product_on(new_product("B", 10, 5), today());

        let stats = engine.dashboard_stats_on(today());
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.recent_additions, 2);
        assert_eq!(stats.in_queue, 1);
        assert_eq!(stats.urgent_count, 2);
    }

    #[test]
    fn test_remove_only_touches_collection() {
        let mut engine = InventoryEngine::default();
        let milk = engine.create_product_on(new_product("Milk", 1, 20), today());

        let removed = engine.remove_product(&milk.id).unwrap();
        assert_eq!(removed.name, "Milk");
        assert!(engine.is_empty());

        // Copies remain in the auxiliary structures.
        let stats = engine.dashboard_stats_on(today());
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.in_queue, 1);
        assert_eq!(engine.most_urgent_product().unwrap().id, milk.id);
        assert_eq!(engine.process_next_expired().unwrap().id, milk.id);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut engine = InventoryEngine::default();
        assert!(engine.remove_product("PROD_404").is_none());
    }

    #[test]
    fn test_process_next_expired_fifo() {
        let mut engine = InventoryEngine::default();
        let a = engine.create_product_on(new_product("A", 30, 5), today());
        let b = engine.create_product_on(new_product("B", 1, 5), today());

        let first = engine.process_next_expired().unwrap();
        assert_eq!(first.id, a.id);
        assert_eq!(first.expiry_date, a.expiry_date);
        assert_eq!(engine.process_next_expired().unwrap().id, b.id);
        assert!(engine.process_next_expired().is_none());
    }

    #[test]
    fn test_most_urgent_scenario() {
        let mut engine = InventoryEngine::default();
        engine.create_product_on(new_product("A", 1, 5), today());
        engine.create_product_on(new_product("B", 10, 5), today());
        engine.create_product_on(new_product("C", -1, 5), today());

        let urgent = engine.most_urgent_product().unwrap();
        assert_eq!(urgent.name, "C");
        assert_eq!(urgent.urgency, Urgency::Expired);

        let names: Vec<String> = std::iter::from_fn(|| engine.extract_most_urgent())
            .map(|e| e.product.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_mutation_does_not_reach_copies() {
        let mut engine = InventoryEngine::default();
        let milk = engine.create_product_on(new_product("Milk", 30, 20), today());

        let entry = engine.product_mut(&milk.id).unwrap();
        entry.set_expiry_date(today() - Duration::days(2));
        entry.set_quantity(3);

        // Authoritative urgency is derived on read.
        assert_eq!(engine.products()[0].urgency_on(today()), Urgency::Expired);
        // The urgency queue copy keeps its insertion-time level.
        assert_eq!(engine.most_urgent_product().unwrap().urgency, Urgency::Normal);
        assert_eq!(engine.recent_products()[0].quantity, 20);
    }

    #[test]
    fn test_recent_buffer_access() {
        let mut engine = InventoryEngine::new(2, 10, 10);
        for name in ["A", "B", "C"] {
            engine.create_product_on(new_product(name, 30, 5), today());
        }
        let recent: Vec<String> = engine.recent_products().into_iter().map(|p| p.name).collect();
        assert_eq!(recent, vec!["C", "B"]);
        assert_eq!(engine.pop_recent().unwrap().name, "C");
    }

    #[test]
    fn test_dashboard_stats_thresholds() {
        let mut engine = InventoryEngine::default()
            .with_low_stock_threshold(5)
            .with_expiring_soon_days(3);
        engine.create_product_on(new_product("A", 1, 4), today());
        engine.create_product_on(new_product("B", 5, 5), today());

        let stats = engine.dashboard_stats_on(today());
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.expiring_soon, 1);
    }
}
