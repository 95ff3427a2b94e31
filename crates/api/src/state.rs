use std::sync::Arc;

use biztime_db::Store;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence accessor, constructed once at startup.
    pub store: Arc<dyn Store>,
}
