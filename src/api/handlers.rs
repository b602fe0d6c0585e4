//! API Handlers
//!
//! HTTP request handlers, one per inventory operation.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use tracing::info;

use crate::api::OperationLog;
use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::inventory::search::{binary_search_by_name, linear_search_by_id};
use crate::inventory::{
    current_date, DashboardStats, InventoryEngine, SortKey, DEFAULT_SHELF_LIFE_DAYS,
};
use crate::models::{
    AddProductRequest, AddProductResponse, HealthResponse, OperationLogResponse,
    ProcessExpiredResponse, ProductResponse, RemoveProductResponse, RemoveQuery, SearchRequest,
    SearchResponse, SimulationResponse, SortQuery, SortResponse, UrgentResponse,
};

/// Application state shared across all handlers.
///
/// The whole engine sits behind one lock: mutations take the write guard for
/// the full fan-out, snapshot reads take the read guard. The operation log has
/// its own lock and is never acquired while the engine guard is held.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<InventoryEngine>>,
    pub log: Arc<RwLock<OperationLog>>,
    /// Expiry offset for products created without one, in days
    pub default_shelf_life_days: i64,
}

impl AppState {
    /// Creates a new AppState around the given engine.
    pub fn new(engine: InventoryEngine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            log: Arc::new(RwLock::new(OperationLog::new())),
            default_shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let engine = InventoryEngine::new(
            config.recent_capacity,
            config.expiry_queue_capacity,
            config.urgency_capacity,
        )
        .with_low_stock_threshold(config.low_stock_threshold)
        .with_expiring_soon_days(config.expiring_soon_days);

        Self {
            default_shelf_life_days: config.default_shelf_life_days,
            ..Self::new(engine)
        }
    }

    async fn record(&self, operation: &str, description: impl Into<String>) {
        self.log.write().await.record(operation, description);
    }
}

fn invalid_body(rejection: JsonRejection) -> InventoryError {
    InventoryError::InvalidRequest(rejection.body_text())
}

/// Handler for POST /api/addProduct
///
/// Coerces the attribute bag, assigns an identifier and fans the product out
/// to every inventory structure.
pub async fn add_product_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddProductRequest>, JsonRejection>,
) -> Result<Json<AddProductResponse>> {
    let Json(req) = payload.map_err(invalid_body)?;
    let today = current_date();
    let new = req.into_new_product(today, state.default_shelf_life_days);

    let product = {
        let mut engine = state.engine.write().await;
        engine.create_product_on(new, today)
    };

    state
        .record(&format!("add_{}", product.id), format!("Added: {}", product.name))
        .await;

    Ok(Json(AddProductResponse::new(ProductResponse::from_product(
        &product, today,
    ))))
}

/// Handler for DELETE /api/removeProduct?id=
///
/// Removes the product from the authoritative collection only.
pub async fn remove_product_handler(
    State(state): State<AppState>,
    Query(query): Query<RemoveQuery>,
) -> Result<Json<RemoveProductResponse>> {
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| InventoryError::InvalidRequest("Missing product ID".to_string()))?;

    let removed = state.engine.write().await.remove_product(&id);
    let product = removed.ok_or_else(|| InventoryError::NotFound(id.clone()))?;

    state
        .record(&format!("remove_{}", id), format!("Removed: {}", product.name))
        .await;

    Ok(Json(RemoveProductResponse::new(id)))
}

/// Handler for POST /api/processExpired
pub async fn process_expired_handler(
    State(state): State<AppState>,
) -> Json<ProcessExpiredResponse> {
    let processed = state.engine.write().await.process_next_expired();

    match processed {
        Some(product) => {
            state
                .record("process_expired", format!("Processed: {}", product.name))
                .await;
            Json(ProcessExpiredResponse::processed(product))
        }
        None => Json(ProcessExpiredResponse::empty()),
    }
}

/// Handler for GET /api/getUrgent
pub async fn get_urgent_handler(State(state): State<AppState>) -> Json<UrgentResponse> {
    let urgent = state.engine.read().await.most_urgent_product();

    match urgent {
        Some(product) => Json(UrgentResponse::found(product)),
        None => Json(UrgentResponse::empty()),
    }
}

/// Handler for POST /api/sortProducts?by=expiry|priority|quantity
///
/// Sorts a snapshot taken under the read guard; the lock is released before
/// sorting starts.
pub async fn sort_products_handler(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Json<SortResponse>> {
    let raw = query
        .by
        .ok_or_else(|| InventoryError::InvalidRequest("Missing sort criteria".to_string()))?;
    let key = SortKey::parse(&raw).ok_or_else(|| {
        InventoryError::InvalidRequest(format!(
            "Unknown sort key '{}', expected expiry, priority or quantity",
            raw
        ))
    })?;

    let snapshot = state.engine.read().await.snapshot();
    let today = current_date();
    let sorted = key.apply(&snapshot, today);
    info!(%key, count = sorted.len(), "Sorted products");

    state.record("sort", format!("Sorted by {}", key)).await;

    let products = sorted
        .iter()
        .map(|p| ProductResponse::from_product(p, today))
        .collect();
    Ok(Json(SortResponse::new(key, products)))
}

/// Handler for POST /api/searchProducts
pub async fn search_products_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>> {
    let Json(req) = payload.map_err(invalid_body)?;
    if let Some(error_msg) = req.validate() {
        return Err(InventoryError::InvalidRequest(error_msg));
    }

    let snapshot = state.engine.read().await.snapshot();
    let found = if req.by_name() {
        binary_search_by_name(&snapshot, &req.query)
    } else {
        linear_search_by_id(&snapshot, &req.query).cloned()
    };

    state
        .record("search", format!("{}: {}", req.search_type, req.query))
        .await;

    let today = current_date();
    let product = found.map(|p| ProductResponse::from_product(&p, today));
    Ok(Json(SearchResponse::new(req.by_name(), req.query, product)))
}

/// Handler for GET /api/dashboardStats
pub async fn dashboard_stats_handler(State(state): State<AppState>) -> Json<DashboardStats> {
    let stats = state.engine.read().await.dashboard_stats();
    state.record("stats", "Dashboard generated").await;
    Json(stats)
}

/// Handler for GET /api/operationLog
pub async fn operation_log_handler(State(state): State<AppState>) -> Json<OperationLogResponse> {
    let operations = state.log.read().await.entries().clone();
    Json(OperationLogResponse::new(operations))
}

/// Handler for GET /api/simulate
///
/// Replays a short demo session through the regular handlers: two dairy
/// products are added, then the urgency peek, an expiry sort, a name search
/// and one expiry dequeue run against them.
pub async fn simulate_handler(State(state): State<AppState>) -> Result<Json<SimulationResponse>> {
    info!("Running inventory simulation");
    let mut steps = Vec::new();

    for (name, quantity, price) in [("Fresh Milk", "20", "2.99"), ("Organic Eggs", "12", "4.50")] {
        let req: AddProductRequest = serde_json::from_value(serde_json::json!({
            "name": name,
            "category": "Dairy",
            "quantity": quantity,
            "price": price,
        }))
        .map_err(|e| InventoryError::Internal(e.to_string()))?;
        let Json(added) = add_product_handler(State(state.clone()), Ok(Json(req))).await?;
        steps.push(format!("Added {} as {}", name, added.product_id));
    }

    let Json(urgent) = get_urgent_handler(State(state.clone())).await;
    steps.push(match urgent.product {
        Some(product) => format!(
            "Most urgent: {} (level {})",
            product.name,
            product.urgency.level()
        ),
        None => "No urgent products".to_string(),
    });

    let by = SortQuery {
        by: Some(SortKey::Expiry.as_str().to_string()),
    };
    let Json(sorted) = sort_products_handler(State(state.clone()), Query(by)).await?;
    steps.push(format!("Sorted {} products with {}", sorted.count, sorted.algorithm));

    let search = SearchRequest {
        search_type: "name".to_string(),
        query: "Fresh Milk".to_string(),
    };
    let Json(found) = search_products_handler(State(state.clone()), Ok(Json(search))).await?;
    steps.push(format!("Search for '{}': {}", found.query, found.status));

    let Json(processed) = process_expired_handler(State(state)).await;
    steps.push(match processed.processed {
        Some(name) => format!("Processed {} from the expiry queue", name),
        None => "Expiry queue empty".to_string(),
    });

    Ok(Json(SimulationResponse::completed(steps)))
}

/// Handler for GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unsupported methods on API paths.
pub async fn method_not_allowed() -> InventoryError {
    InventoryError::MethodNotAllowed
}
