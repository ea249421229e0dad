// Application state module
// Immutable state shared by every connection

use super::types::Config;
use crate::handler::endpoints;
use crate::routing::Router;

/// Application state
pub struct AppState {
    pub config: Config,
    pub router: Router,
}

impl AppState {
    /// Create `AppState` with the full endpoint table registered
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            router: endpoints::routes(),
        }
    }
}
