//! Dashboard Statistics Module
//!
//! Aggregate counts over the inventory and its auxiliary structures.

use chrono::NaiveDate;
use serde::Serialize;

use crate::inventory::{offset_date, Product};

// == Dashboard Stats ==
/// Snapshot of inventory counters for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Products in the authoritative collection
    pub total_products: usize,
    /// Entries in the recency buffer
    pub recent_additions: usize,
    /// Entries waiting in the expiry queue
    pub in_queue: usize,
    /// Entries in the urgency queue
    pub urgent_count: usize,
    /// Products with quantity below the low-stock threshold
    pub low_stock: usize,
    /// Products expiring before the look-ahead horizon
    pub expiring_soon: usize,
}

impl DashboardStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Collection Counters ==
    /// Fills the counters derived from the authoritative collection.
    ///
    /// Expiry is evaluated fresh against `today`: a product counts as expiring
    /// soon when its expiry date falls before `today + horizon_days`, which
    /// includes products that have already expired. A horizon beyond the
    /// representable date range saturates at the earliest or latest date.
    pub fn count_products(
        &mut self,
        products: &[Product],
        today: NaiveDate,
        low_stock_threshold: u32,
        horizon_days: i64,
    ) {
        let horizon = offset_date(today, horizon_days).unwrap_or(if horizon_days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        });
        self.total_products = products.len();
        self.low_stock = products
            .iter()
            .filter(|p| p.quantity < low_stock_threshold)
            .count();
        self.expiring_soon = products
            .iter()
            .filter(|p| p.expiry_date < horizon)
            .count();
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

    fn product(id: &str, days: i64, quantity: u32) -> Product {
        Product::new(id, id, today() + Duration::days(days)).with_quantity(quantity)
    }

    #[test]
    fn test_stats_new() {
        let stats = DashboardStats::new();
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.low_stock, 0);
        assert_eq!(stats.expiring_soon, 0);
    }

    #[test]
    fn test_low_stock_is_strictly_below_threshold() {
        let products = vec![product("a", 30, 9), product("b", 30, 10), product("c", 30, 0)];
        let mut stats = DashboardStats::new();
        stats.count_products(&products, today(), 10, 7);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.low_stock, 2);
    }

    #[test]
    fn test_expiring_soon_horizon() {
        let products = vec![
            product("expired", -3, 50),
            product("today", 0, 50),
            product("six", 6, 50),
            product("seven", 7, 50),
            product("later", 20, 50),
        ];
        let mut stats = DashboardStats::new();
        stats.count_products(&products, today(), 10, 7);
        assert_eq!(stats.expiring_soon, 3);
    }

    #[test]
    fn test_extreme_horizon_saturates() {
        let products = vec![product("expired", -3, 50), product("later", 20, 50)];
        let mut stats = DashboardStats::new();

        stats.count_products(&products, today(), 10, i64::MAX);
        assert_eq!(stats.expiring_soon, 2);

        stats.count_products(&products, today(), 10, i64::MIN);
        assert_eq!(stats.expiring_soon, 0);
    }

    #[test]
    fn test_serialize_camel_case() {
        let stats = DashboardStats {
            total_products: 2,
            recent_additions: 2,
            in_queue: 1,
            urgent_count: 2,
            low_stock: 0,
            expiring_soon: 1,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalProducts"], 2);
        assert_eq!(json["inQueue"], 1);
        assert_eq!(json["expiringSoon"], 1);
    }
}
