//! API server state

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::CharacterService;
use crate::storage::CharacterStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Character operations
    pub service: CharacterService,

    /// Whether the readiness probe pings the store
    pub check_store: bool,
}

impl AppState {
    /// State over `store` with readiness checks disabled
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self {
            service: CharacterService::new(store),
            check_store: false,
        }
    }

    /// State over `store`, taking readiness behaviour from `config`
    pub fn from_config(config: &AppConfig, store: Arc<dyn CharacterStore>) -> Self {
        Self {
            check_store: config.health.check_store,
            ..Self::new(store)
        }
    }
}
