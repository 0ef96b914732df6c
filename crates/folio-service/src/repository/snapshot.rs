//! Bundled snapshot backend.
//!
//! The snapshot is read-only at runtime. Creating or editing a project
//! produces a draft record instead: the pretty JSON goes to the
//! `folio::draft` log target for the developer to paste into
//! `data/projects.json`, and a copy lands in a scratch area of the local
//! store so it can be previewed. Deleting only returns instructions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use folio_core::error::AppError;
use folio_core::events::{DomainEvent, ProjectEvent};
use folio_core::result::AppResult;
use folio_core::traits::KeyValueStore;
use folio_core::types::ProjectId;
use folio_entity::project::{ImageUpload, Project, ProjectInput, ProjectPatch};
use folio_storage::StoreManager;

use super::transfer::{export_collection, parse_collection};
use super::{BackendKind, DeleteOutcome, ProjectRepository, image, simulate_latency};
use crate::events::EventBus;

/// The snapshot compiled into the binary.
const BUNDLED_SNAPSHOT: &str = include_str!("../../../../data/projects.json");

/// Relative path of the snapshot source file, used in instructions.
pub const SNAPSHOT_SOURCE: &str = "data/projects.json";

/// Parse the bundled snapshot.
pub fn bundled_snapshot() -> AppResult<Vec<Project>> {
    parse_collection(BUNDLED_SNAPSHOT)
        .map_err(|e| AppError::configuration(format!("Bundled snapshot is invalid: {}", e.message)))
}

/// Read and parse a snapshot file from disk.
pub async fn read_snapshot_file(path: &str) -> AppResult<Vec<Project>> {
    let payload = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::configuration(format!("Failed to read snapshot file '{path}': {e}"))
    })?;
    parse_collection(&payload)
        .map_err(|e| AppError::configuration(format!("Snapshot '{path}' is invalid: {}", e.message)))
}

/// Read-only project backend over a fixed snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    /// The snapshot records, in display order.
    snapshot: Arc<Vec<Project>>,
    /// Store holding the draft scratch area.
    scratch: StoreManager,
    /// Event bus for draft notifications.
    events: EventBus,
    /// Public path prefix for snapshot images.
    image_base_path: String,
    /// Simulated fetch latency.
    load_delay: Duration,
}

impl SnapshotRepository {
    /// Create a snapshot backend over `snapshot`.
    pub fn new(snapshot: Vec<Project>, scratch: StoreManager, events: EventBus) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            scratch,
            events,
            image_base_path: "/images/projects".to_string(),
            load_delay: Duration::ZERO,
        }
    }

    /// Set the public path prefix for snapshot images.
    pub fn with_image_base_path(mut self, base_path: &str) -> Self {
        self.image_base_path = base_path.to_string();
        self
    }

    /// Set the simulated fetch latency.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    async fn read_drafts(&self) -> Vec<Project> {
        let key = self.scratch.keys().draft_projects();
        match self.scratch.get_json::<Vec<Project>>(&key).await {
            Ok(drafts) => drafts.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable snapshot drafts");
                Vec::new()
            }
        }
    }

    /// Emit a generated record and keep it in the scratch area.
    ///
    /// A draft with the same id replaces the previous one.
    async fn emit_draft(&self, project: &Project) -> AppResult<()> {
        let json = serde_json::to_string_pretty(project)?;
        info!(
            target: "folio::draft",
            project_id = %project.id,
            "Add this record to {SNAPSHOT_SOURCE}:\n{json}"
        );

        let mut drafts = self.read_drafts().await;
        match drafts.iter_mut().find(|d| d.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => drafts.push(project.clone()),
        }
        self.scratch
            .set_json(&self.scratch.keys().draft_projects(), &drafts)
            .await?;

        self.events.publish(DomainEvent::project(ProjectEvent::DraftGenerated {
            project_id: project.id.to_string(),
        }));
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for SnapshotRepository {
    fn backend(&self) -> BackendKind {
        BackendKind::Snapshot
    }

    async fn load(&self) -> AppResult<Vec<Project>> {
        simulate_latency(self.load_delay).await;
        Ok(self.snapshot.as_ref().clone())
    }

    async fn create(&self, input: ProjectInput, image: Option<ImageUpload>) -> AppResult<ProjectId> {
        let drafts = self.read_drafts().await;
        let id = ProjectId::generate(
            &input.title,
            self.snapshot.iter().chain(drafts.iter()).map(|p| &p.id),
        );
        let image = image.map(|upload| image::asset_path(&self.image_base_path, &upload));

        let project = Project::from_input(id.clone(), input, image, Utc::now());
        self.emit_draft(&project).await?;
        Ok(id)
    }

    async fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
        image: Option<ImageUpload>,
    ) -> AppResult<()> {
        let drafts = self.read_drafts().await;
        let current = drafts
            .iter()
            .find(|p| &p.id == id)
            .or_else(|| self.snapshot.iter().find(|p| &p.id == id));

        let Some(current) = current else {
            warn!(project_id = %id, "Update ignored: project not in snapshot");
            return Ok(());
        };

        let mut project = current.clone();
        let image = image.map(|upload| image::asset_path(&self.image_base_path, &upload));
        project.apply(patch, image, Utc::now());
        self.emit_draft(&project).await
    }

    async fn delete(&self, id: &ProjectId) -> AppResult<DeleteOutcome> {
        if !self.snapshot.iter().any(|p| &p.id == id) {
            return Ok(DeleteOutcome::NotFound);
        }
        Ok(DeleteOutcome::ManualActionRequired {
            instructions: format!(
                "To delete '{id}', remove it from {SNAPSHOT_SOURCE} and redeploy."
            ),
        })
    }

    async fn export(&self) -> AppResult<String> {
        export_collection(&self.snapshot)
    }

    async fn import(&self, payload: &str) -> AppResult<usize> {
        let projects = parse_collection(payload)?;
        Err(AppError::read_only(format!(
            "The bundled snapshot is read-only. Replace {SNAPSHOT_SOURCE} with this file \
             ({} projects) and redeploy.",
            projects.len()
        )))
    }

    async fn drafts(&self) -> AppResult<Vec<Project>> {
        Ok(self.read_drafts().await)
    }

    async fn clear_drafts(&self) -> AppResult<()> {
        self.scratch
            .remove(&self.scratch.keys().draft_projects())
            .await?;
        info!("Snapshot drafts cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::ErrorKind;
    use folio_entity::project::Category;
    use folio_storage::StoreKeys;
    use folio_storage::providers::memory::MemoryStore;

    fn repo() -> (SnapshotRepository, MemoryStore) {
        let memory = MemoryStore::unlimited();
        let store = StoreManager::from_provider(Arc::new(memory.clone()), StoreKeys::default());
        let snapshot = parse_collection(
            r#"[{"id": "atlas", "title": "Atlas", "description": "Maps", "category": "uiux",
                 "year": "2023", "createdAt": "2024-01-01T00:00:00Z",
                 "updatedAt": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        (SnapshotRepository::new(snapshot, store, EventBus::default()), memory)
    }

    fn input(title: &str) -> ProjectInput {
        ProjectInput {
            title: title.to_string(),
            description: "desc".to_string(),
            category: Category::Frontend,
            year: "2025".to_string(),
            live_url: None,
            github_url: None,
            figma_url: None,
            case_study: None,
        }
    }

    #[test]
    fn test_bundled_snapshot_parses() {
        let snapshot = bundled_snapshot().unwrap();
        assert!(!snapshot.is_empty());
    }

    #[tokio::test]
    async fn test_create_generates_draft_without_touching_snapshot() {
        let (repo, _) = repo();
        let id = repo
            .create(input("Atlas"), Some(ImageUpload::new("atlas.png", b"x".to_vec())))
            .await
            .unwrap();

        assert_eq!(id.as_str(), "atlas-2");
        assert_eq!(repo.load().await.unwrap().len(), 1);

        let drafts = repo.drafts().await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].image.as_deref(), Some("/images/projects/atlas.png"));
        assert_eq!(drafts[0].created_at, drafts[0].updated_at);
    }

    #[tokio::test]
    async fn test_update_replaces_existing_draft() {
        let (repo, _) = repo();
        let id = ProjectId::from("atlas");
        repo.update(
            &id,
            ProjectPatch {
                year: Some("2024".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
        repo.update(
            &id,
            ProjectPatch {
                title: Some("Atlas v2".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

        let drafts = repo.drafts().await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].year, "2024");
        assert_eq!(drafts[0].title, "Atlas v2");
        assert_eq!(repo.load().await.unwrap()[0].title, "Atlas");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_silent() {
        let (repo, _) = repo();
        repo.update(&ProjectId::from("ghost"), ProjectPatch::default(), None)
            .await
            .unwrap();
        assert!(repo.drafts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_only_returns_instructions() {
        let (repo, _) = repo();
        let outcome = repo.delete(&ProjectId::from("atlas")).await.unwrap();
        assert!(matches!(outcome, DeleteOutcome::ManualActionRequired { .. }));
        assert_eq!(repo.load().await.unwrap().len(), 1);
        assert_eq!(
            repo.delete(&ProjectId::from("ghost")).await.unwrap(),
            DeleteOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_import_is_refused() {
        let (repo, memory) = repo();
        let exported = repo.export().await.unwrap();

        let err = repo.import(&exported).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ReadOnly);

        let err = repo.import("{not json").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedImport);

        assert_eq!(memory.get("portfolio-projects").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scratch_failure_is_reported() {
        let (repo, memory) = repo();
        memory.set_disabled(true);
        let err = repo.create(input("New"), None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::StorageUnavailable);
    }

    #[tokio::test]
    async fn test_clear_drafts() {
        let (repo, _) = repo();
        repo.create(input("New"), None).await.unwrap();
        repo.clear_drafts().await.unwrap();
        assert!(repo.drafts().await.unwrap().is_empty());
    }
}
