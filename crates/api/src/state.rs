use std::sync::Arc;

use nrl_github::Ledger;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Destination for order rows. `None` when the GitHub environment
    /// is incomplete at startup; the server still serves pages, and
    /// order submissions fail with a generic persistence error until
    /// an operator supplies the configuration.
    pub ledger: Option<Arc<dyn Ledger>>,
}
