//! tierkv - A two-tier key-value store
//!
//! An LRU cache in front of file-per-key persistence, behind one backend
//! trait and a concurrency guard, served over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, StoreError};
pub use store::{Backend, FileStore, LayeredStore, LruCache, MemoryStore, SyncStore};
