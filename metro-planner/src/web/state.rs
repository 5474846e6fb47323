//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// The network is built once at startup and only read afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded transit network
    pub network: Arc<Network>,

    /// Query limits
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, config: PlannerConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}
