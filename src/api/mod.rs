//! REST API layer - axum routes, handlers, and request/response models.
//!
//! This layer is a thin mapping between HTTP and the core operations: handlers
//! deserialize a request model, call into [`crate::core`], and serialize a
//! response model. All error mapping lives in [`error`].

/// Error-to-HTTP-response mapping
pub mod error;
/// Request handlers, one module per resource
pub mod handlers;
/// Request and response wire models
pub mod model;
/// Router construction
pub mod routes;

pub use routes::app;
