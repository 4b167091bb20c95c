//! API Routes
//!
//! Configures the Axum router with all store server endpoints.

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_value, get_value, health_handler, reject_root, set_value, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /*key` - Retrieve the raw value stored under the path
/// - `PUT /*key` - Store the raw request body under the path
/// - `DELETE /*key` - Delete the path's value from both tiers
/// - `GET /stats` - Cache tier performance counters
/// - `GET /health` - Health check endpoint
/// - `/` - Rejected with 400; the root is not a key
///
/// The static `/stats` and `/health` routes shadow keys of the same name.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/", any(reject_root))
        .route(
            "/*key",
            get(get_value).put(set_value).delete(delete_value),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
