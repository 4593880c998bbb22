//! Application state for the Wage Projection API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::insights::InsightsClient;

/// Shared application state.
///
/// Holds the loaded schedule configuration and the insights client. Both are
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    insights: Arc<InsightsClient>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, insights: InsightsClient) -> Self {
        Self {
            config: Arc::new(config),
            insights: Arc::new(insights),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the insights client.
    pub fn insights(&self) -> &InsightsClient {
        &self.insights
    }
}
