//! API Module
//!
//! HTTP handlers and routing for the inventory server REST API.
//!
//! # Endpoints
//! - `POST /api/addProduct` - Create a product
//! - `DELETE /api/removeProduct?id=` - Remove a product
//! - `POST /api/processExpired` - Process the next expiry entry
//! - `GET /api/getUrgent` - Most urgent product
//! - `POST /api/sortProducts?by=` - Sorted product view
//! - `POST /api/searchProducts` - Search by id or name
//! - `GET /api/dashboardStats` - Dashboard counters
//! - `GET /api/operationLog` - Operation log
//! - `GET /api/simulate` - Demo session
//! - `GET /api/health` - Health check endpoint

pub mod handlers;
pub mod oplog;
pub mod routes;

pub use handlers::*;
pub use oplog::OperationLog;
pub use routes::{create_router, with_static_files};
