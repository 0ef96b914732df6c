//! Persisted admin session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The admin session kept in the local store after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    /// Email the admin logged in with.
    pub email: String,
    /// Fixed admin identifier.
    pub id: String,
    /// When the login happened.
    pub login_time: DateTime<Utc>,
}
