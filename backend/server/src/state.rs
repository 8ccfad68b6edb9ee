use std::sync::Arc;

use super::{
    config::Config,
    storage::{Storage, StorageError},
};

pub struct AppState {
    pub config: Config,
    pub storage: Storage,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>, StorageError> {
        let storage = Storage::connect(&config.storage).await?;

        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: Config, storage: Storage) -> Arc<Self> {
        Arc::new(Self { config, storage })
    }
}
