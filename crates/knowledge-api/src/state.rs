use std::sync::Arc;
use knowledge_persist::StorageClient;
use crate::config::Config;

/// Shared application state passed to all handlers
///
/// Storage is built once at start-up and injected here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<dyn StorageClient>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn StorageClient>) -> Self {
        Self {
            config: Arc::new(config),
            storage,
        }
    }
}
