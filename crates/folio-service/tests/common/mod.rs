//! Shared helpers for service integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use folio_core::config::AppConfig;
use folio_core::config::projects::BackendChoice;
use folio_entity::project::{Category, ProjectInput};
use folio_service::SiteContext;
use folio_storage::providers::memory::MemoryStore;
use folio_storage::{StoreKeys, StoreManager};

/// A fully wired site over an in-memory store.
pub struct TestSite {
    /// The services under test.
    pub ctx: SiteContext,
    /// Direct handle on the backing store.
    pub memory: MemoryStore,
}

impl TestSite {
    /// Build a site on `backend` with an empty store.
    pub async fn new(backend: BackendChoice) -> Self {
        let mut config = AppConfig::default();
        config.projects.backend = backend;

        let memory = MemoryStore::unlimited();
        let store = StoreManager::from_provider(Arc::new(memory.clone()), StoreKeys::default());
        let ctx = SiteContext::with_store(config, store)
            .await
            .expect("Failed to build site context");

        Self { ctx, memory }
    }

    /// Log the demo admin in.
    pub async fn login(&self) {
        self.ctx
            .auth
            .login("admin@portfolio.dev", "admin123")
            .await
            .expect("Demo credentials rejected");
    }
}

/// Minimal valid creation input.
pub fn input(title: &str, category: Category) -> ProjectInput {
    ProjectInput {
        title: title.to_string(),
        description: format!("{title} description"),
        category,
        year: "2024".to_string(),
        live_url: None,
        github_url: None,
        figma_url: None,
        case_study: None,
    }
}
