//! Read-write project backend over the local key-value store.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

use folio_core::error::{AppError, ErrorKind};
use folio_core::events::{DomainEvent, ProjectEvent};
use folio_core::result::AppResult;
use folio_core::traits::KeyValueStore;
use folio_core::types::ProjectId;
use folio_entity::project::{ImageUpload, Project, ProjectInput, ProjectPatch};
use folio_storage::StoreManager;

use super::transfer::{export_collection, parse_collection};
use super::{BackendKind, DeleteOutcome, ProjectRepository, image, simulate_latency};
use crate::events::EventBus;

/// Project backend that persists the whole collection under one store key.
///
/// Every read deserializes a fresh copy, so callers never share a mutable
/// collection. Uploaded images are inlined as `data:` URIs.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    store: StoreManager,
    events: EventBus,
    load_delay: Duration,
}

impl LocalRepository {
    /// Create a local backend over `store`.
    pub fn new(store: StoreManager, events: EventBus) -> Self {
        Self {
            store,
            events,
            load_delay: Duration::ZERO,
        }
    }

    /// Set the simulated fetch latency.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    /// Read the persisted collection for display. Unreadable data is empty.
    async fn read_collection_lenient(&self) -> Vec<Project> {
        match self.read_collection().await {
            Ok(projects) => projects,
            Err(e) => {
                warn!(error = %e, "Project store unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Read the persisted collection before a write or export.
    ///
    /// An absent key is an empty collection. A failed read or corrupt data
    /// is an error, so a mutation never overwrites records it could not see.
    async fn read_collection(&self) -> AppResult<Vec<Project>> {
        let key = self.store.keys().projects();
        let raw = match self.store.get(&key).await? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        serde_json::from_str::<Vec<Project>>(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Persisted projects under '{key}' are corrupt"),
                e,
            )
        })
    }

    async fn write_collection(&self, projects: &[Project]) -> AppResult<()> {
        let key = self.store.keys().projects();
        self.store.set_json(&key, &projects).await?;
        debug!(key = %key, count = projects.len(), "Persisted project collection");
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for LocalRepository {
    fn backend(&self) -> BackendKind {
        BackendKind::Local
    }

    async fn load(&self) -> AppResult<Vec<Project>> {
        simulate_latency(self.load_delay).await;
        Ok(self.read_collection_lenient().await)
    }

    async fn create(&self, input: ProjectInput, image: Option<ImageUpload>) -> AppResult<ProjectId> {
        let mut projects = self.read_collection().await?;
        let id = ProjectId::generate(&input.title, projects.iter().map(|p| &p.id));
        let image = image.as_ref().map(image::data_uri);

        projects.push(Project::from_input(id.clone(), input, image, Utc::now()));
        self.write_collection(&projects).await?;

        info!(project_id = %id, "Project created");
        self.events.publish(DomainEvent::project(ProjectEvent::Created {
            project_id: id.to_string(),
        }));
        Ok(id)
    }

    async fn update(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
        image: Option<ImageUpload>,
    ) -> AppResult<()> {
        let mut projects = self.read_collection().await?;
        let Some(project) = projects.iter_mut().find(|p| &p.id == id) else {
            warn!(project_id = %id, "Update ignored: project not found");
            return Ok(());
        };

        let changed = project.apply(patch, image.as_ref().map(image::data_uri), Utc::now());
        self.write_collection(&projects).await?;

        info!(project_id = %id, ?changed, "Project updated");
        self.events.publish(DomainEvent::project(ProjectEvent::Updated {
            project_id: id.to_string(),
        }));
        Ok(())
    }

    async fn delete(&self, id: &ProjectId) -> AppResult<DeleteOutcome> {
        let mut projects = self.read_collection().await?;
        let before = projects.len();
        projects.retain(|p| &p.id != id);

        if projects.len() == before {
            debug!(project_id = %id, "Delete skipped: project not found");
            return Ok(DeleteOutcome::NotFound);
        }

        self.write_collection(&projects).await?;
        info!(project_id = %id, "Project deleted");
        self.events.publish(DomainEvent::project(ProjectEvent::Deleted {
            project_id: id.to_string(),
        }));
        Ok(DeleteOutcome::Deleted)
    }

    async fn export(&self) -> AppResult<String> {
        export_collection(&self.read_collection().await?)
    }

    async fn import(&self, payload: &str) -> AppResult<usize> {
        let projects = parse_collection(payload)?;
        self.write_collection(&projects).await?;

        let count = projects.len();
        info!(count, "Project collection imported");
        self.events
            .publish(DomainEvent::project(ProjectEvent::Imported { count }));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use folio_entity::project::Category;
    use folio_storage::StoreKeys;
    use folio_storage::providers::memory::MemoryStore;

    fn repo() -> (LocalRepository, MemoryStore) {
        let memory = MemoryStore::unlimited();
        let store = StoreManager::from_provider(Arc::new(memory.clone()), StoreKeys::default());
        (LocalRepository::new(store, EventBus::default()), memory)
    }

    /// Memory store whose reads can be switched to fail while writes succeed.
    #[derive(Debug, Clone)]
    struct FlakyReads {
        inner: MemoryStore,
        fail_reads: Arc<AtomicBool>,
    }

    #[async_trait]
    impl KeyValueStore for FlakyReads {
        fn provider_type(&self) -> &str {
            "flaky"
        }

        async fn get(&self, key: &str) -> AppResult<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(AppError::storage_unavailable("read refused"));
            }
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> AppResult<()> {
            self.inner.remove(key).await
        }

        async fn health_check(&self) -> AppResult<bool> {
            Ok(true)
        }
    }

    fn flaky_repo() -> (LocalRepository, FlakyReads) {
        let flaky = FlakyReads {
            inner: MemoryStore::unlimited(),
            fail_reads: Arc::new(AtomicBool::new(false)),
        };
        let store = StoreManager::from_provider(Arc::new(flaky.clone()), StoreKeys::default());
        (LocalRepository::new(store, EventBus::default()), flaky)
    }

    fn input(title: &str, category: Category) -> ProjectInput {
        ProjectInput {
            title: title.to_string(),
            description: "A project".to_string(),
            category,
            year: "2024".to_string(),
            live_url: Some("https://example.com".to_string()),
            github_url: None,
            figma_url: Some(String::new()),
            case_study: None,
        }
    }

    #[tokio::test]
    async fn test_load_absent_is_empty() {
        let (repo, _) = repo();
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_is_empty() {
        let (repo, memory) = repo();
        memory.set("portfolio-projects", "[{oops").await.unwrap();
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_load() {
        let (repo, _) = repo();
        let id = repo.create(input("Night Owl", Category::Uiux), None).await.unwrap();

        let projects = repo.load().await.unwrap();
        assert_eq!(projects.len(), 1);
        let project = &projects[0];
        assert_eq!(project.id, id);
        assert_eq!(id.as_str(), "night-owl");
        assert_eq!(project.title, "Night Owl");
        assert_eq!(project.live_url.as_deref(), Some("https://example.com"));
        assert_eq!(project.figma_url, None);
        assert_eq!(project.created_at, project.updated_at);
    }

    #[tokio::test]
    async fn test_create_ids_are_unique() {
        let (repo, _) = repo();
        let first = repo.create(input("Same", Category::Uiux), None).await.unwrap();
        let second = repo.create(input("Same", Category::Frontend), None).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(second.as_str(), "same-2");
    }

    #[tokio::test]
    async fn test_create_inlines_image() {
        let (repo, _) = repo();
        repo.create(
            input("Pic", Category::Frontend),
            Some(ImageUpload::new("shot.jpg", b"abc".to_vec())),
        )
        .await
        .unwrap();
        let projects = repo.load().await.unwrap();
        assert_eq!(
            projects[0].image.as_deref(),
            Some("data:image/jpeg;base64,YWJj")
        );
    }

    #[tokio::test]
    async fn test_update_changes_only_patched_fields() {
        let (repo, _) = repo();
        let id = repo.create(input("Edit Me", Category::Uiux), None).await.unwrap();
        let before = repo.load().await.unwrap().remove(0);

        repo.update(
            &id,
            ProjectPatch {
                year: Some("2025".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

        let after = repo.load().await.unwrap().remove(0);
        assert_eq!(after.id, before.id);
        assert_eq!(after.year, "2025");
        assert_eq!(after.title, before.title);
        assert_eq!(after.category, before.category);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= after.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let (repo, _) = repo();
        repo.create(input("Keep", Category::Uiux), None).await.unwrap();
        repo.update(&ProjectId::from("ghost"), ProjectPatch::default(), None)
            .await
            .unwrap();
        assert_eq!(repo.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_and_redelete() {
        let (repo, _) = repo();
        let id = repo.create(input("Gone", Category::Uiux), None).await.unwrap();

        assert_eq!(repo.delete(&id).await.unwrap(), DeleteOutcome::Deleted);
        assert!(repo.load().await.unwrap().iter().all(|p| p.id != id));
        assert_eq!(repo.delete(&id).await.unwrap(), DeleteOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_malformed_import_leaves_store_untouched() {
        let (repo, _) = repo();
        repo.create(input("Stays", Category::Frontend), None).await.unwrap();
        let before = repo.load().await.unwrap();

        let err = repo.import("{not json").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedImport);
        assert_eq!(repo.load().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_import_replaces_collection() {
        let (source, _) = repo();
        source.create(input("One", Category::Uiux), None).await.unwrap();
        source.create(input("Two", Category::Frontend), None).await.unwrap();
        let exported = source.export().await.unwrap();

        let (target, _) = repo();
        target.create(input("Old", Category::Uiux), None).await.unwrap();
        assert_eq!(target.import(&exported).await.unwrap(), 2);
        assert_eq!(target.load().await.unwrap(), source.load().await.unwrap());
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let (repo, memory) = repo();
        memory.set_disabled(true);
        let err = repo
            .create(input("Nope", Category::Uiux), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::StorageUnavailable);
        memory.set_disabled(false);
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_publish_events() {
        let memory = MemoryStore::unlimited();
        let store = StoreManager::from_provider(Arc::new(memory), StoreKeys::default());
        let events = EventBus::default();
        let mut rx = events.subscribe();
        let repo = LocalRepository::new(store, events);

        let id = repo.create(input("Evt", Category::Uiux), None).await.unwrap();
        repo.delete(&id).await.unwrap();

        let created = rx.recv().await.unwrap();
        let deleted = rx.recv().await.unwrap();
        assert!(created.invalidates_collection());
        assert!(deleted.invalidates_collection());
    }

    #[tokio::test]
    async fn test_unreadable_store_blocks_mutations() {
        let (repo, flaky) = flaky_repo();
        let mut ids = Vec::new();
        for title in ["One", "Two", "Three"] {
            ids.push(repo.create(input(title, Category::Uiux), None).await.unwrap());
        }

        flaky.fail_reads.store(true, Ordering::SeqCst);
        assert!(repo.load().await.unwrap().is_empty());

        let err = repo
            .create(input("Four", Category::Frontend), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::StorageUnavailable);
        let err = repo
            .update(&ids[0], ProjectPatch::default(), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::StorageUnavailable);
        assert!(repo.delete(&ids[1]).await.is_err());
        assert!(repo.export().await.is_err());

        flaky.fail_reads.store(false, Ordering::SeqCst);
        let ids_after: Vec<_> = repo.load().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids_after, ids);
    }

    #[tokio::test]
    async fn test_corrupt_store_blocks_create() {
        let (repo, memory) = repo();
        memory.set("portfolio-projects", "[{oops").await.unwrap();

        let err = repo
            .create(input("Later", Category::Uiux), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
        assert_eq!(
            memory.get("portfolio-projects").await.unwrap().as_deref(),
            Some("[{oops")
        );
    }
}
