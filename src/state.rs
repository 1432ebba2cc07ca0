use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::services::{AuthService, StoreAuthService, StoreTargetService, TargetService};
use crate::store::RecordStore;

/// Process-wide state, built once at startup and handed to every handler.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Arc<RecordStore>,

    pub auth_service: Arc<dyn AuthService>,

    pub target_service: Arc<dyn TargetService>,
}

impl SharedState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(RecordStore::new()))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Arc<RecordStore>) -> Self {
        let auth_service: Arc<dyn AuthService> =
            Arc::new(StoreAuthService::new(Arc::clone(&store)));
        let target_service: Arc<dyn TargetService> =
            Arc::new(StoreTargetService::new(Arc::clone(&store)));

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            auth_service,
            target_service,
        }
    }
}
