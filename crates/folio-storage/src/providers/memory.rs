//! In-memory store implementation using dashmap.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, warn};

use folio_core::config::storage::MemoryStoreConfig;
use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::traits::store::KeyValueStore;

/// In-memory store provider.
///
/// With a non-zero quota, a `set` that would push the total stored
/// bytes over the limit is refused with `StorageUnavailable`, the way a
/// full browser store refuses writes.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Stored entries.
    entries: Arc<DashMap<String, String>>,
    /// Maximum total value bytes (0 = unlimited).
    quota_bytes: u64,
    /// When set, every write fails as if storage were disabled.
    disabled: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryStoreConfig) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            quota_bytes: config.quota_bytes,
            disabled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an unlimited in-memory store.
    pub fn unlimited() -> Self {
        Self::new(&MemoryStoreConfig::default())
    }

    /// Simulate storage being switched off (or back on).
    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    fn used_bytes_excluding(&self, key: &str) -> u64 {
        self.entries
            .iter()
            .filter(|entry| entry.key() != key)
            .map(|entry| entry.value().len() as u64)
            .sum()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.disabled.load(Ordering::SeqCst) {
            warn!(key, "Write refused: storage disabled");
            return Err(AppError::storage_unavailable("Storage is disabled"));
        }

        if self.quota_bytes > 0 {
            let needed = self.used_bytes_excluding(key) + value.len() as u64;
            if needed > self.quota_bytes {
                warn!(key, needed, quota = self.quota_bytes, "Write refused: quota exceeded");
                return Err(AppError::storage_unavailable(format!(
                    "Storage quota exceeded ({needed} > {} bytes)",
                    self.quota_bytes
                )));
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        if self.disabled.load(Ordering::SeqCst) {
            return Err(AppError::storage_unavailable("Storage is disabled"));
        }
        self.entries.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(!self.disabled.load(Ordering::SeqCst))
    }
}
