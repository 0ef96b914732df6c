//! Admin gate configuration.
//!
//! The credential pair is checked locally and is a demo gate only. It is
//! not a security boundary.

use serde::{Deserialize, Serialize};

/// Demo admin credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin email.
    #[serde(default = "default_email")]
    pub email: String,
    /// Admin password (plain text, demo only).
    #[serde(default = "default_password")]
    pub password: String,
    /// Identifier stored in the admin session record.
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
            session_id: default_session_id(),
        }
    }
}

fn default_email() -> String {
    "admin@portfolio.dev".to_string()
}

fn default_password() -> String {
    "admin123".to_string()
}

fn default_session_id() -> String {
    "admin-user".to_string()
}
