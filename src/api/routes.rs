//! API Routes
//!
//! Configures the Axum router with all inventory endpoints.

use std::path::Path;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    add_product_handler, dashboard_stats_handler, get_urgent_handler, health_handler,
    method_not_allowed, operation_log_handler, process_expired_handler, remove_product_handler,
    search_products_handler, simulate_handler, sort_products_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/addProduct` - Create a product from an attribute bag
/// - `DELETE /api/removeProduct?id=` - Remove a product by identifier
/// - `POST /api/processExpired` - Dequeue the next expiry entry
/// - `GET /api/getUrgent` - Peek the most urgent product
/// - `POST /api/sortProducts?by=` - Sort by expiry, priority or quantity
/// - `POST /api/searchProducts` - Search by id or name
/// - `GET /api/dashboardStats` - Inventory counters
/// - `GET /api/operationLog` - Operations served so far
/// - `GET /api/simulate` - Run the demo session
/// - `GET /api/health` - Health check endpoint
///
/// Any other method on these paths answers 405 with a JSON error body.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/addProduct",
            post(add_product_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/removeProduct",
            delete(remove_product_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/processExpired",
            post(process_expired_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/getUrgent",
            get(get_urgent_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/sortProducts",
            post(sort_products_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/searchProducts",
            post(search_products_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/dashboardStats",
            get(dashboard_stats_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/operationLog",
            get(operation_log_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/simulate",
            get(simulate_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/health",
            get(health_handler).fallback(method_not_allowed),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves files under `dir` for every path no API route matches.
pub fn with_static_files(router: Router, dir: &Path) -> Router {
    router.fallback_service(ServeDir::new(dir))
}
