//! Request DTOs for the inventory server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.
//! Product creation accepts a loosely typed attribute bag and coerces
//! malformed values to defaults instead of rejecting them.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::inventory::{
    offset_date, NewProduct, DEFAULT_CATEGORY, DEFAULT_NAME, DEFAULT_QUANTITY, DEFAULT_SUPPLIER,
};

/// Request body for POST /api/addProduct
///
/// Every field is optional. Numeric fields may arrive as JSON numbers or as
/// strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddProductRequest {
    pub name: Option<Value>,
    pub category: Option<Value>,
    pub supplier: Option<Value>,
    pub quantity: Option<Value>,
    pub price: Option<Value>,
    /// Explicit expiry date, `YYYY-MM-DD`
    pub expiry_date: Option<Value>,
    /// Expiry relative to today, in days (may be negative)
    pub expires_in_days: Option<Value>,
}

impl AddProductRequest {
    /// Coerces the attribute bag into product attributes.
    ///
    /// # Arguments
    /// * `today` - Date the relative expiry fields are measured from
    /// * `shelf_life_days` - Expiry offset used when no valid expiry is given
    ///
    /// Offsets that leave the representable date range count as invalid. If
    /// the shelf life itself is out of range, the product expires `today`.
    pub fn into_new_product(self, today: NaiveDate, shelf_life_days: i64) -> NewProduct {
        let expiry_date = self
            .expiry_date
            .as_ref()
            .and_then(coerce_date)
            .or_else(|| {
                self.expires_in_days
                    .as_ref()
                    .and_then(coerce_i64)
                    .and_then(|days| offset_date(today, days))
            })
            .or_else(|| offset_date(today, shelf_life_days))
            .unwrap_or(today);

        let mut new = NewProduct::new(coerce_text(self.name.as_ref(), DEFAULT_NAME), expiry_date);
        new.category = coerce_text(self.category.as_ref(), DEFAULT_CATEGORY);
        new.supplier = coerce_text(self.supplier.as_ref(), DEFAULT_SUPPLIER);
        new.quantity = self
            .quantity
            .as_ref()
            .and_then(coerce_quantity)
            .unwrap_or(DEFAULT_QUANTITY);
        new.price = self.price.as_ref().and_then(coerce_price).unwrap_or(0.0);
        new
    }
}

// == Coercion Helpers ==
fn coerce_text(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

/// Non-negative whole quantity. Fractional numbers are truncated.
fn coerce_quantity(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(q) => u32::try_from(q).ok(),
            None => n.as_f64().and_then(truncate_quantity),
        },
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(truncate_quantity),
        _ => None,
    }
}

fn truncate_quantity(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX)).then(|| value as u32)
}

/// Non-negative finite price.
fn coerce_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

/// Request body for POST /api/searchProducts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// `id` or `name`
    pub search_type: String,
    pub query: String,
}

impl SearchRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.search_type.trim().to_lowercase().as_str() {
            "id" | "name" => None,
            other => Some(format!(
                "Unsupported search type '{}', expected 'id' or 'name'",
                other
            )),
        }
    }

    pub fn by_name(&self) -> bool {
        self.search_type.trim().eq_ignore_ascii_case("name")
    }
}

/// Query string for DELETE /api/removeProduct
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveQuery {
    pub id: Option<String>,
}

/// Query string for POST /api/sortProducts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortQuery {
    pub by: Option<String>,
}
