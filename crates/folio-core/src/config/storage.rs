//! Key-value store configuration.

use serde::{Deserialize, Serialize};

/// Top-level key-value store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store provider: `"memory"` or `"file"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Prefix for every key written by the site.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// File-backed store configuration.
    #[serde(default)]
    pub file: FileStoreConfig,
    /// In-memory store configuration.
    #[serde(default)]
    pub memory: MemoryStoreConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            namespace: default_namespace(),
            file: FileStoreConfig::default(),
            memory: MemoryStoreConfig::default(),
        }
    }
}

/// File-backed store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    /// Directory holding one file per key.
    #[serde(default = "default_root_path")]
    pub root_path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
        }
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStoreConfig {
    /// Maximum total bytes of stored values (0 = unlimited).
    #[serde(default)]
    pub quota_bytes: u64,
}

fn default_provider() -> String {
    "file".to_string()
}

fn default_namespace() -> String {
    "portfolio".to_string()
}

fn default_root_path() -> String {
    "./data/store".to_string()
}
