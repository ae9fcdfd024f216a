use std::sync::Arc;

use catalog_core::service::MovieService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Movie operations, backed by PostgreSQL or the in-memory catalog.
    pub movies: Arc<dyn MovieService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
