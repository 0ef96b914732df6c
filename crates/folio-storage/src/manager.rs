//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use folio_core::config::storage::StorageConfig;
use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::traits::store::KeyValueStore;

use crate::keys::StoreKeys;

/// Store manager that wraps the configured key-value provider.
///
/// The provider is selected at construction time based on configuration.
/// Cloning is cheap; all clones share one provider.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn KeyValueStore>,
    /// Key builders for the configured namespace.
    keys: StoreKeys,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let inner: Arc<dyn KeyValueStore> = match config.provider.as_str() {
            #[cfg(feature = "file")]
            "file" => {
                info!(root = %config.file.root_path, "Initializing file store");
                let provider = crate::providers::file::FileStore::new(&config.file.root_path).await?;
                Arc::new(provider)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store");
                Arc::new(crate::providers::memory::MemoryStore::new(&config.memory))
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, file"
                )));
            }
        };

        Ok(Self {
            inner,
            keys: StoreKeys::new(config.namespace.clone()),
        })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn KeyValueStore>, keys: StoreKeys) -> Self {
        Self {
            inner: provider,
            keys,
        }
    }

    /// Get a reference to the inner provider.
    pub fn provider(&self) -> &dyn KeyValueStore {
        self.inner.as_ref()
    }

    /// Key builders for this store's namespace.
    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }
}

#[async_trait]
impl KeyValueStore for StoreManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_selects_memory_provider() {
        let config = StorageConfig {
            provider: "memory".to_string(),
            ..Default::default()
        };
        let manager = StoreManager::new(&config).await.unwrap();
        assert_eq!(manager.provider_type(), "memory");
        assert_eq!(manager.keys().projects(), "portfolio-projects");
    }

    #[tokio::test]
    async fn test_rejects_unknown_provider() {
        let config = StorageConfig {
            provider: "indexeddb".to_string(),
            ..Default::default()
        };
        let err = StoreManager::new(&config).await.unwrap_err();
        assert_eq!(err.kind, folio_core::error::ErrorKind::Configuration);
    }
}
