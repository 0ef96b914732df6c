//! Project repositories.
//!
//! Two backends sit behind [`ProjectRepository`]: the bundled snapshot,
//! which is read-only at runtime and only simulates writes, and the
//! local store, which is fully read-write. The admin affordances depend
//! on which one is active, so the two are never merged.

pub mod image;
pub mod local;
pub mod snapshot;
pub mod transfer;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use folio_core::config::AppConfig;
use folio_core::config::projects::BackendChoice;
use folio_core::result::AppResult;
use folio_core::traits::KeyValueStore;
use folio_core::types::ProjectId;
use folio_entity::project::{ImageUpload, Project, ProjectInput, ProjectPatch};
use folio_storage::StoreManager;

use crate::events::EventBus;

pub use local::LocalRepository;
pub use snapshot::SnapshotRepository;

/// Which backend a repository reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Bundled read-only snapshot.
    Snapshot,
    /// Read-write local store.
    Local,
}

impl BackendKind {
    /// Whether runtime writes are only simulated.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::Snapshot)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot => write!(f, "snapshot"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The project was removed.
    Deleted,
    /// No project had that id; nothing changed.
    NotFound,
    /// The backend cannot delete; show these instructions instead.
    ManualActionRequired {
        /// What the site owner has to do by hand.
        instructions: String,
    },
}

/// Storage contract shared by both project backends.
#[async_trait]
pub trait ProjectRepository: Send + Sync + fmt::Debug + 'static {
    /// Which backend this is.
    fn backend(&self) -> BackendKind;

    /// Return a fresh copy of the full collection.
    async fn load(&self) -> AppResult<Vec<Project>>;

    /// Create a project and return its new id.
    async fn create(&self, input: ProjectInput, image: Option<ImageUpload>) -> AppResult<ProjectId>;

    /// Merge `patch` into the project with `id`. Unknown ids are logged and ignored.
    async fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
        image: Option<ImageUpload>,
    ) -> AppResult<()>;

    /// Delete the project with `id`.
    async fn delete(&self, id: &ProjectId) -> AppResult<DeleteOutcome>;

    /// Serialize the whole collection as pretty-printed JSON.
    async fn export(&self) -> AppResult<String>;

    /// Replace the whole collection with `payload`. Returns the imported count.
    async fn import(&self, payload: &str) -> AppResult<usize>;

    /// Generated records awaiting manual merge into the snapshot file.
    async fn drafts(&self) -> AppResult<Vec<Project>> {
        Ok(Vec::new())
    }

    /// Discard pending drafts.
    async fn clear_drafts(&self) -> AppResult<()> {
        Ok(())
    }

    /// The record an edit starts from: a pending draft if one exists,
    /// otherwise the stored project. `None` when the id is unknown.
    async fn editable(&self, id: &ProjectId) -> AppResult<Option<Project>> {
        if let Some(draft) = self.drafts().await?.into_iter().find(|p| &p.id == id) {
            return Ok(Some(draft));
        }
        Ok(self.load().await?.into_iter().find(|p| &p.id == id))
    }
}

/// Build the repository selected by `config.projects.backend`.
pub async fn build(
    config: &AppConfig,
    store: StoreManager,
    events: EventBus,
) -> AppResult<Arc<dyn ProjectRepository>> {
    let delay = Duration::from_millis(config.projects.load_delay_ms);

    let repo: Arc<dyn ProjectRepository> = match config.projects.backend {
        BackendChoice::Snapshot => {
            let snapshot = match &config.projects.snapshot_path {
                Some(path) => snapshot::read_snapshot_file(path).await?,
                None => snapshot::bundled_snapshot()?,
            };
            info!(count = snapshot.len(), "Using snapshot project backend");
            Arc::new(
                SnapshotRepository::new(snapshot, store, events)
                    .with_image_base_path(&config.projects.image_base_path)
                    .with_load_delay(delay),
            )
        }
        BackendChoice::Local => {
            info!(provider = store.provider_type(), "Using local project backend");
            Arc::new(LocalRepository::new(store, events).with_load_delay(delay))
        }
    };

    Ok(repo)
}

/// Sleep for the simulated fetch latency, if any.
pub(crate) async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
