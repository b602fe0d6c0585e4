//! ExpirySync - An in-memory perishable inventory server
//!
//! Tracks products by recency, expiry order and urgency, with sorting and
//! searching over the authoritative collection.

pub mod api;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use inventory::InventoryEngine;
