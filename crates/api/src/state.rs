use std::sync::Arc;

use mesa_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend selected at startup.
    pub store: Arc<dyn Store>,
    /// Server configuration (the auth gate reads the JWT settings from here).
    pub config: Arc<ServerConfig>,
}
