//! API Handlers
//!
//! HTTP request handlers for each store server endpoint. The URL path
//! (minus its leading slash) is the key; values travel as raw bytes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, StatsResponse};
use crate::store::{self, LayeredStore, SyncStore};

/// Application state shared across all handlers.
///
/// Holds the guarded two-tier store behind an Arc. The store is an explicit
/// handle owned by the state, not a process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe two-tier store
    pub store: Arc<SyncStore<LayeredStore>>,
}

impl AppState {
    /// Creates a new AppState around an already-guarded store.
    pub fn new(store: SyncStore<LayeredStore>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Fails when the data directory cannot be created or the configured
    /// capacity is invalid; both are fatal at startup.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = store::layered(&config.data_dir, config.cache_capacity)?;
        Ok(Self::new(store))
    }
}

/// Handler for GET /*key
///
/// Returns the raw value bytes, 404 when the key is absent.
pub async fn get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Vec<u8>> {
    state.store.get(&key)
}

/// Handler for PUT /*key
///
/// Stores the raw request body under the key, creating or overwriting.
pub async fn set_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<StatusCode> {
    state.store.set(&key, body.to_vec())?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /*key
///
/// Removes the key from both tiers; 404 when it was never stored.
pub async fn delete_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode> {
    state.store.delete(&key)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns the cache tier's performance counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.store.with_inner(|store| store.cache_stats());
    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for requests to the bare root path.
///
/// The root is not a key; reject it before it reaches the store.
pub async fn reject_root() -> StatusCode {
    StatusCode::BAD_REQUEST
}
