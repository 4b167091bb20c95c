//! Response models for the store server API
//!
//! Values themselves travel as raw bytes; these DTOs cover the JSON
//! endpoints (stats, health) and the error body.

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
