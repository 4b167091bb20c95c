//! API Module
//!
//! HTTP handlers and routing for the store server REST API.
//!
//! # Endpoints
//! - `GET /*key` - Retrieve the raw value stored under the path
//! - `PUT /*key` - Store the raw request body under the path
//! - `DELETE /*key` - Delete the path's value
//! - `GET /stats` - Cache tier performance counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
