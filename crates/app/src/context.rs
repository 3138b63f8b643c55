use std::sync::Arc;

use carelink_client::ApiClient;
use carelink_core::errors::CareResult;
use carelink_store::{FileStorage, LocalStorage, Sessions};
use tracing::info;

use crate::config::AppConfig;

/// Everything a controller needs, handed down explicitly instead of living
/// in a global.
pub struct AppContext {
    pub client: ApiClient,
    pub sessions: Sessions,
    pub config: AppConfig,
}

impl AppContext {
    /// Wires a context over `storage` without touching persisted sessions.
    pub fn new(config: AppConfig, storage: Arc<dyn LocalStorage>) -> CareResult<Self> {
        let client = ApiClient::new(&config.client)?;
        Ok(Self {
            client,
            sessions: Sessions::new(storage),
            config,
        })
    }

    /// Opens the file storage from the configuration and restores every
    /// persisted session, as on an application start.
    pub fn open(config: AppConfig) -> CareResult<Self> {
        let storage = FileStorage::open(&config.storage_dir)?;
        let context = Self::new(config, Arc::new(storage))?;
        let roles = context.sessions.restore()?;
        info!("Restored sessions: {:?}", roles);
        Ok(context)
    }
}
