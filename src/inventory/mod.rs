//! Inventory Module
//!
//! In-memory perishable inventory: the authoritative product collection, its
//! bounded auxiliary structures, and the sorting and searching routines run
//! over collection snapshots.

mod engine;
mod expiry_queue;
mod product;
mod recent;
mod stats;
mod urgency;

pub mod search;
pub mod sorter;


// Re-export public types
pub use engine::{ExpiredProduct, InventoryEngine, UrgentProduct};
pub use expiry_queue::ExpiryQueue;
pub use product::{
    current_date, offset_date, NewProduct, Product, Urgency, DEFAULT_CATEGORY, DEFAULT_NAME,
    DEFAULT_QUANTITY, DEFAULT_STATUS, DEFAULT_SUPPLIER,
};
pub use recent::RecencyBuffer;
pub use sorter::SortKey;
pub use stats::DashboardStats;
pub use urgency::{UrgencyQueue, UrgentEntry};

// == Public Constants ==
/// Default number of entries kept by the recency buffer
pub const DEFAULT_RECENT_CAPACITY: usize = 50;

/// Default capacity of the expiry queue
pub const DEFAULT_EXPIRY_QUEUE_CAPACITY: usize = 100;

/// Default capacity of the urgency queue
pub const DEFAULT_URGENCY_CAPACITY: usize = 100;

/// Products with a quantity below this count as low stock
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// Look-ahead window, in days, for the expiring-soon counter
pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 7;

/// Shelf life given to products created without an explicit expiry date
pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 30;
