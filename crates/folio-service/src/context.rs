//! Wiring of the site services from configuration.

use std::sync::Arc;

use tracing::info;

use folio_core::config::AppConfig;
use folio_core::result::AppResult;
use folio_storage::StoreManager;

use crate::admin::AdminAuth;
use crate::events::EventBus;
use crate::repository::{self, ProjectRepository};
use crate::works::WorksController;

/// Every service a page or command needs, built once per process.
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Shared key-value store.
    pub store: StoreManager,
    /// Collection invalidation events.
    pub events: EventBus,
    /// The configured project backend.
    pub repo: Arc<dyn ProjectRepository>,
    /// Demo admin gate.
    pub auth: AdminAuth,
}

impl SiteContext {
    /// Build the store, event bus, repository and admin gate.
    pub async fn build(config: AppConfig) -> AppResult<Self> {
        let store = StoreManager::new(&config.storage).await?;
        Self::with_store(config, store).await
    }

    /// Build around an existing store.
    pub async fn with_store(config: AppConfig, store: StoreManager) -> AppResult<Self> {
        let events = EventBus::default();
        let repo = repository::build(&config, store.clone(), events.clone()).await?;
        let auth = AdminAuth::new(store.clone(), config.admin.clone());

        info!(backend = %repo.backend(), "Site context ready");
        Ok(Self {
            config,
            store,
            events,
            repo,
            auth,
        })
    }

    /// A works controller wired to this context's invalidation events.
    pub fn works(&self) -> WorksController {
        WorksController::new(self.repo.clone()).with_events(self.events.subscribe())
    }
}
