//! Request and Response models for the inventory server
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AddProductRequest, RemoveQuery, SearchRequest, SortQuery};
pub use responses::{
    AddProductResponse, ErrorResponse, HealthResponse, OperationLogResponse,
    ProcessExpiredResponse, ProductResponse, RemoveProductResponse, SearchResponse,
    SimulationResponse, SortResponse, UrgentResponse,
};
