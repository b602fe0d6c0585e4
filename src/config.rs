//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::inventory::{
    DEFAULT_EXPIRING_SOON_DAYS, DEFAULT_EXPIRY_QUEUE_CAPACITY, DEFAULT_LOW_STOCK_THRESHOLD,
    DEFAULT_RECENT_CAPACITY, DEFAULT_SHELF_LIFE_DAYS, DEFAULT_URGENCY_CAPACITY,
};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Entries kept by the recency buffer
    pub recent_capacity: usize,
    /// Entries accepted by the expiry queue
    pub expiry_queue_capacity: usize,
    /// Entries accepted by the urgency queue
    pub urgency_capacity: usize,
    /// Quantity below which a product counts as low stock
    pub low_stock_threshold: u32,
    /// Look-ahead window for the expiring-soon counter, in days
    pub expiring_soon_days: i64,
    /// Shelf life of products created without an explicit expiry, in days
    pub default_shelf_life_days: i64,
    /// Directory of static frontend files, if any
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `RECENT_CAPACITY` - Recency buffer size (default: 50)
    /// - `EXPIRY_QUEUE_CAPACITY` - Expiry queue size (default: 100)
    /// - `URGENCY_CAPACITY` - Urgency queue size (default: 100)
    /// - `LOW_STOCK_THRESHOLD` - Low-stock quantity threshold (default: 10)
    /// - `EXPIRING_SOON_DAYS` - Expiring-soon window in days (default: 7)
    /// - `DEFAULT_SHELF_LIFE_DAYS` - Default expiry offset in days (default: 30)
    /// - `STATIC_DIR` - Static file directory (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("PORT", defaults.server_port),
            recent_capacity: env_or("RECENT_CAPACITY", defaults.recent_capacity),
            expiry_queue_capacity: env_or("EXPIRY_QUEUE_CAPACITY", defaults.expiry_queue_capacity),
            urgency_capacity: env_or("URGENCY_CAPACITY", defaults.urgency_capacity),
            low_stock_threshold: env_or("LOW_STOCK_THRESHOLD", defaults.low_stock_threshold),
            expiring_soon_days: env_or("EXPIRING_SOON_DAYS", defaults.expiring_soon_days),
            default_shelf_life_days: env_or(
                "DEFAULT_SHELF_LIFE_DAYS",
                defaults.default_shelf_life_days,
            ),
            static_dir: env::var("STATIC_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Reads and parses an environment variable, falling back on absence or parse failure.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            expiry_queue_capacity: DEFAULT_EXPIRY_QUEUE_CAPACITY,
            urgency_capacity: DEFAULT_URGENCY_CAPACITY,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            expiring_soon_days: DEFAULT_EXPIRING_SOON_DAYS,
            default_shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.recent_capacity, 50);
        assert_eq!(config.expiry_queue_capacity, 100);
        assert_eq!(config.urgency_capacity, 100);
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.expiring_soon_days, 7);
        assert_eq!(config.default_shelf_life_days, 30);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_env_or_parses_and_falls_back() {
        env::set_var("EXPIRYSYNC_TEST_NUMBER", " 42 ");
        env::set_var("EXPIRYSYNC_TEST_GARBAGE", "forty-two");
        env::remove_var("EXPIRYSYNC_TEST_MISSING");

        assert_eq!(env_or("EXPIRYSYNC_TEST_NUMBER", 7usize), 42);
        assert_eq!(env_or("EXPIRYSYNC_TEST_GARBAGE", 7usize), 7);
        assert_eq!(env_or("EXPIRYSYNC_TEST_MISSING", 7usize), 7);
    }
}
