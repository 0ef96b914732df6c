//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every section has defaults so an absent file still
//! produces a usable configuration.

pub mod admin;
pub mod logging;
pub mod projects;
pub mod storage;

use serde::{Deserialize, Serialize};

use self::admin::AdminConfig;
use self::logging::LoggingConfig;
use self::projects::ProjectsConfig;
use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Key-value store settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Project backend settings.
    #[serde(default)]
    pub projects: ProjectsConfig,
    /// Demo admin gate settings.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Export file settings.
    #[serde(default)]
    pub export: ExportConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Export file naming configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Product-identifying prefix for downloaded backups.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables prefixed with
    /// `FOLIO__` override file values, e.g.
    /// `FOLIO__PROJECTS__BACKEND=local`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_file_prefix() -> String {
    "portfolio-projects".to_string()
}
