//! Project backend configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which project backend the site reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendChoice {
    /// The bundled read-only snapshot file.
    #[default]
    Snapshot,
    /// The read-write local persistent store.
    Local,
}

impl fmt::Display for BackendChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot => write!(f, "snapshot"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Project backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsConfig {
    /// Active backend.
    #[serde(default)]
    pub backend: BackendChoice,
    /// Simulated latency of a collection fetch in milliseconds.
    #[serde(default)]
    pub load_delay_ms: u64,
    /// Optional path to a snapshot file replacing the bundled one.
    #[serde(default)]
    pub snapshot_path: Option<String>,
    /// Public path under which snapshot images are served.
    #[serde(default = "default_image_base_path")]
    pub image_base_path: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            backend: BackendChoice::default(),
            load_delay_ms: 0,
            snapshot_path: None,
            image_base_path: default_image_base_path(),
        }
    }
}

fn default_image_base_path() -> String {
    "/images/projects".to_string()
}
