//! Error types for the inventory server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Inventory Error Enum ==
/// Errors surfaced at the HTTP boundary.
///
/// Empty queues and failed searches are not errors; they are reported as
/// ordinary responses with an `empty` or `not_found` status.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// No product with the given identifier
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP method not supported on this path
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InventoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            InventoryError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            InventoryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string(), status.as_u16()));
        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the inventory server.
pub type Result<T> = std::result::Result<T, InventoryError>;
