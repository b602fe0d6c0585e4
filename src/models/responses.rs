//! Response DTOs for the inventory server API
//!
//! Defines the structure of outgoing HTTP response bodies. Every body is a
//! flat JSON object with camelCase keys.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::inventory::{ExpiredProduct, Product, SortKey, Urgency, UrgentProduct};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_EMPTY: &str = "empty";
pub const STATUS_NOT_FOUND: &str = "not_found";

/// Full product representation with urgency evaluated at response time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub expiry_date: NaiveDate,
    pub urgency: Urgency,
    pub supplier: String,
    pub status: String,
}

impl ProductResponse {
    /// Builds the representation, deriving urgency as of `today`.
    pub fn from_product(product: &Product, today: NaiveDate) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            quantity: product.quantity,
            price: product.price,
            expiry_date: product.expiry_date,
            urgency: product.urgency_on(today),
            supplier: product.supplier.clone(),
            status: product.status.clone(),
        }
    }
}

/// Response body for POST /api/addProduct
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductResponse {
    pub status: String,
    pub message: String,
    pub product_id: String,
    pub product: ProductResponse,
}

impl AddProductResponse {
    pub fn new(product: ProductResponse) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: format!("Product '{}' added", product.name),
            product_id: product.id.clone(),
            product,
        }
    }
}

/// Response body for DELETE /api/removeProduct
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveProductResponse {
    pub status: String,
    pub message: String,
    pub product_id: String,
}

impl RemoveProductResponse {
    pub fn new(product_id: impl Into<String>) -> Self {
        let product_id = product_id.into();
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: format!("Product '{}' removed from inventory", product_id),
            product_id,
        }
    }
}

/// Response body for POST /api/processExpired
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessExpiredResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ExpiredProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProcessExpiredResponse {
    pub fn processed(product: ExpiredProduct) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            processed: Some(product.name.clone()),
            product: Some(product),
            message: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            status: STATUS_EMPTY.to_string(),
            processed: None,
            product: None,
            message: Some("No products awaiting expiry processing".to_string()),
        }
    }
}

/// Response body for GET /api/getUrgent
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgentResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent_product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Urgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<UrgentProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UrgentResponse {
    pub fn found(product: UrgentProduct) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            urgent_product: Some(product.name.clone()),
            priority: Some(product.urgency),
            product: Some(product),
            message: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            status: STATUS_EMPTY.to_string(),
            urgent_product: None,
            priority: None,
            product: None,
            message: Some("No urgent products".to_string()),
        }
    }
}

/// Response body for POST /api/sortProducts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortResponse {
    pub status: String,
    pub sort_by: String,
    pub algorithm: String,
    pub time: String,
    pub count: usize,
    pub products: Vec<ProductResponse>,
}

impl SortResponse {
    pub fn new(key: SortKey, products: Vec<ProductResponse>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            sort_by: key.as_str().to_string(),
            algorithm: key.algorithm().to_string(),
            time: key.complexity().to_string(),
            count: products.len(),
            products,
        }
    }
}

/// Response body for POST /api/searchProducts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: String,
    pub search_type: String,
    pub query: String,
    pub algorithm: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,
}

impl SearchResponse {
    pub fn new(by_name: bool, query: impl Into<String>, product: Option<ProductResponse>) -> Self {
        let (search_type, algorithm, time) = if by_name {
            ("name", "Binary Search", "O(n log n) with sort, O(log n) search")
        } else {
            ("id", "Linear Search", "O(n)")
        };
        Self {
            status: if product.is_some() { STATUS_SUCCESS } else { STATUS_NOT_FOUND }.to_string(),
            search_type: search_type.to_string(),
            query: query.into(),
            algorithm: algorithm.to_string(),
            time: time.to_string(),
            product,
        }
    }
}

/// Response body for GET /api/operationLog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationLogResponse {
    pub status: String,
    pub total_operations: usize,
    pub operations: BTreeMap<String, String>,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl OperationLogResponse {
    pub fn new(operations: BTreeMap<String, String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            total_operations: operations.len(),
            operations,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for GET /api/simulate
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    pub status: String,
    pub message: String,
    pub steps: Vec<String>,
}

impl SimulationResponse {
    pub fn completed(steps: Vec<String>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: "Simulation completed".to_string(),
            steps,
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    pub service: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "ExpirySync Inventory Backend".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// HTTP status code
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("PROD_1", "Milk", NaiveDate::from_ymd_opt(2024, 6, 17).unwrap())
            .with_category("Dairy")
            .with_quantity(20)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_product_response_serialize() {
        let resp = ProductResponse::from_product(&product(), today());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], "PROD_1");
        assert_eq!(json["expiryDate"], "2024-06-17");
        assert_eq!(json["urgency"], 1);
        assert_eq!(json["quantity"], 20);
    }

    #[test]
    fn test_add_product_response() {
        let resp = AddProductResponse::new(ProductResponse::from_product(&product(), today()));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["productId"], "PROD_1");
    }

    #[test]
    fn test_empty_responses_omit_product() {
        let json = serde_json::to_value(ProcessExpiredResponse::empty()).unwrap();
        assert_eq!(json["status"], "empty");
        assert!(json.get("product").is_none());

        let json = serde_json::to_value(UrgentResponse::empty()).unwrap();
        assert_eq!(json["status"], "empty");
        assert!(json.get("priority").is_none());
    }

    #[test]
    fn test_urgent_response_found() {
        let resp = UrgentResponse::found(UrgentProduct {
            id: "PROD_3".to_string(),
            name: "Yogurt".to_string(),
            urgency: Urgency::Expired,
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["urgentProduct"], "Yogurt");
        assert_eq!(json["priority"], 0);
    }

    #[test]
    fn test_search_response_status() {
        let found = SearchResponse::new(
            true,
            "milk",
            Some(ProductResponse::from_product(&product(), today())),
        );
        assert_eq!(found.status, "success");
        assert_eq!(found.algorithm, "Binary Search");

        let missing = SearchResponse::new(false, "PROD_9", None);
        assert_eq!(missing.status, "not_found");
        assert_eq!(missing.search_type, "id");
    }

    #[test]
    fn test_sort_response_metadata() {
        let resp = SortResponse::new(SortKey::Quantity, Vec::new());
        assert_eq!(resp.sort_by, "quantity");
        assert_eq!(resp.algorithm, "Bubble Sort");
        assert_eq!(resp.count, 0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong", 400);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"], "Something went wrong");
        assert_eq!(json["code"], 400);
    }
}
