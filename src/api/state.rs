use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::models::Match;

/// Shared, read-only server state. The dataset is loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub matches: Arc<[Match]>,
    pub dashboard: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(matches: Vec<Match>, dashboard: DashboardConfig) -> Self {
        Self {
            matches: matches.into(),
            dashboard: Arc::new(dashboard),
        }
    }
}
