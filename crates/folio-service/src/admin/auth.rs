//! Demo admin gate: login, session restore, logout.
//!
//! The credential pair comes from configuration and is compared locally.
//! This keeps casual visitors out of the admin panel and nothing more.

use chrono::Utc;
use tracing::{info, warn};

use folio_core::config::admin::AdminConfig;
use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_core::traits::KeyValueStore;
use folio_entity::admin::AdminSession;
use folio_storage::StoreManager;

/// Admin session manager backed by the local store.
#[derive(Clone)]
pub struct AdminAuth {
    store: StoreManager,
    config: AdminConfig,
}

impl std::fmt::Debug for AdminAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuth")
            .field("email", &self.config.email)
            .finish()
    }
}

impl AdminAuth {
    /// Create the gate.
    pub fn new(store: StoreManager, config: AdminConfig) -> Self {
        Self { store, config }
    }

    /// Check the credentials and persist a session.
    ///
    /// Either part being wrong yields the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AdminSession> {
        if email.trim() != self.config.email || password != self.config.password {
            warn!("Admin login rejected");
            return Err(AppError::authentication("Invalid credentials"));
        }

        let session = AdminSession {
            email: self.config.email.clone(),
            id: self.config.session_id.clone(),
            login_time: Utc::now(),
        };
        self.store
            .set_json(&self.store.keys().admin_session(), &session)
            .await?;

        info!(email = %session.email, "Admin logged in");
        Ok(session)
    }

    /// The persisted session, if any. A corrupt or unreadable record counts as none.
    pub async fn current(&self) -> Option<AdminSession> {
        let key = self.store.keys().admin_session();
        match self.store.get_json::<AdminSession>(&key).await {
            Ok(session) => session,
            Err(e) => {
                warn!(key = %key, error = %e, "Ignoring unreadable admin session");
                None
            }
        }
    }

    /// Return the session or fail with `Authorization`.
    pub async fn require(&self) -> AppResult<AdminSession> {
        self.current()
            .await
            .ok_or_else(|| AppError::authorization("Admin login required"))
    }

    /// Forget the persisted session.
    pub async fn logout(&self) -> AppResult<()> {
        self.store.remove(&self.store.keys().admin_session()).await?;
        info!("Admin logged out");
        Ok(())
    }
}
