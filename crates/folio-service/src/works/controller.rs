//! Works page controller.
//!
//! The controller owns one loaded copy of the collection. The badge
//! counts (`full_collection`) and the grid (`active_view`) are both
//! derived from that copy, so they cannot drift apart no matter which
//! category is selected or in which order fetches complete.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use folio_core::events::DomainEvent;
use folio_entity::project::{Category, Project};

use super::view::WorksView;
use crate::query::{self, CategoryCounts};
use crate::repository::ProjectRepository;

/// Category selection state machine for the works gallery.
///
/// Every state change is published on a `watch` channel so a renderer
/// can observe the `loading` flag while a fetch is in flight.
#[derive(Debug)]
pub struct WorksController {
    repo: Arc<dyn ProjectRepository>,
    events: Option<broadcast::Receiver<DomainEvent>>,
    full: Vec<Project>,
    selected: Option<Category>,
    failed: bool,
    view: watch::Sender<WorksView>,
}

impl WorksController {
    /// Create a controller in the unselected state with nothing loaded.
    pub fn new(repo: Arc<dyn ProjectRepository>) -> Self {
        let (view, _) = watch::channel(WorksView::default());
        Self {
            repo,
            events: None,
            full: Vec::new(),
            selected: None,
            failed: false,
            view,
        }
    }

    /// Reload whenever an event on `events` invalidates the collection.
    pub fn with_events(mut self, events: broadcast::Receiver<DomainEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Initial fetch: enter the unselected state with the full collection cached.
    pub async fn mount(&mut self) {
        self.select_category(None).await;
    }

    /// Switch the filter and refetch.
    ///
    /// Selecting the same category again simply re-derives the same view.
    /// A failed fetch falls back to the unselected state with an empty grid.
    pub async fn select_category(&mut self, category: Option<Category>) {
        debug!(category = ?category, "Selecting works category");
        self.selected = category;
        self.view.send_modify(|view| {
            view.loading = true;
            view.selected_category = category;
        });

        match self.repo.load().await {
            Ok(projects) => {
                self.full = projects;
                self.failed = false;
                self.publish();
            }
            Err(e) => {
                warn!(error = %e, "Works fetch failed");
                self.selected = None;
                self.failed = true;
                self.view.send_modify(|view| {
                    view.loading = false;
                    view.selected_category = None;
                    view.filtered_projects.clear();
                    view.error = Some(e.user_message());
                });
            }
        }
    }

    /// Apply pending invalidation events. Returns whether a refetch happened.
    pub async fn sync(&mut self) -> bool {
        let Some(rx) = self.events.as_mut() else {
            return false;
        };

        let mut stale = false;
        let mut closed = false;
        loop {
            match rx.try_recv() {
                Ok(event) => stale |= event.invalidates_collection(),
                Err(broadcast::error::TryRecvError::Empty) => break,
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "Works controller lagged behind events");
                    stale = true;
                }
                Err(broadcast::error::TryRecvError::Closed) => {
                    closed = true;
                    break;
                }
            }
        }
        if closed {
            self.events = None;
        }

        if stale {
            info!("Collection changed, refreshing works view");
            self.select_category(self.selected).await;
        }
        stale
    }

    /// The current render snapshot.
    pub fn view(&self) -> WorksView {
        self.view.borrow().clone()
    }

    /// Watch every render snapshot from now on.
    pub fn subscribe(&self) -> watch::Receiver<WorksView> {
        self.view.subscribe()
    }

    /// The unfiltered collection from the last successful fetch.
    pub fn full_collection(&self) -> &[Project] {
        &self.full
    }

    /// The projects matching the active filter. Empty after a failed fetch.
    pub fn active_view(&self) -> Vec<Project> {
        if self.failed {
            return Vec::new();
        }
        query::by_category(&self.full, self.selected)
    }

    /// The active filter.
    pub fn selected_category(&self) -> Option<Category> {
        self.selected
    }

    fn publish(&self) {
        let snapshot = WorksView {
            loading: false,
            full_counts: CategoryCounts::of(&self.full),
            filtered_projects: self.active_view(),
            selected_category: self.selected,
            error: None,
        };
        self.view.send_replace(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use folio_core::error::AppError;
    use folio_core::result::AppResult;
    use folio_core::types::ProjectId;
    use folio_entity::project::{ImageUpload, ProjectInput, ProjectPatch};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Notify;

    use crate::repository::{BackendKind, DeleteOutcome};

    fn project(id: &str, category: Category) -> Project {
        Project::from_input(
            ProjectId::from(id),
            ProjectInput {
                title: id.to_string(),
                description: "d".to_string(),
                category,
                year: "2024".to_string(),
                live_url: None,
                github_url: None,
                figma_url: None,
                case_study: None,
            },
            None,
            Utc::now(),
        )
    }

    fn scenario() -> Vec<Project> {
        vec![
            project("a", Category::Uiux),
            project("b", Category::Frontend),
            project("c", Category::Uiux),
        ]
    }

    /// Read-only fake whose loads can be gated, failed, and counted.
    #[derive(Debug, Default)]
    struct FakeRepo {
        projects: Vec<Project>,
        fail: AtomicBool,
        loads: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl ProjectRepository for FakeRepo {
        fn backend(&self) -> BackendKind {
            BackendKind::Snapshot
        }

        async fn load(&self) -> AppResult<Vec<Project>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(AppError::storage_unavailable("store offline"));
            }
            Ok(self.projects.clone())
        }

        async fn create(&self, _: ProjectInput, _: Option<ImageUpload>) -> AppResult<ProjectId> {
            Err(AppError::read_only("fake"))
        }

        async fn update(
            &self,
            _: &ProjectId,
            _: ProjectPatch,
            _: Option<ImageUpload>,
        ) -> AppResult<()> {
            Ok(())
        }

        async fn delete(&self, _: &ProjectId) -> AppResult<DeleteOutcome> {
            Ok(DeleteOutcome::NotFound)
        }

        async fn export(&self) -> AppResult<String> {
            Ok("[]".to_string())
        }

        async fn import(&self, _: &str) -> AppResult<usize> {
            Err(AppError::read_only("fake"))
        }
    }

    fn fake(projects: Vec<Project>) -> Arc<FakeRepo> {
        Arc::new(FakeRepo {
            projects,
            ..Default::default()
        })
    }

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_mount_caches_full_collection() {
        let mut controller = WorksController::new(fake(scenario()));
        controller.mount().await;

        let view = controller.view();
        assert!(!view.loading);
        assert_eq!(view.selected_category, None);
        assert_eq!(view.filtered_projects.len(), 3);
        assert_eq!(view.full_counts, CategoryCounts { uiux: 2, frontend: 1 });
    }

    #[tokio::test]
    async fn test_counts_ignore_active_filter() {
        let mut controller = WorksController::new(fake(scenario()));
        controller.mount().await;
        controller.select_category(Some(Category::Uiux)).await;

        let view = controller.view();
        assert_eq!(ids(&view.filtered_projects), vec!["a", "c"]);
        assert_eq!(view.full_counts.get(Category::Frontend), 1);
        assert_eq!(controller.full_collection().len(), 3);
        assert!(view.cards().all(|(_, accent)| accent == "orange"));
    }

    #[tokio::test]
    async fn test_select_is_idempotent() {
        let mut controller = WorksController::new(fake(scenario()));
        controller.select_category(Some(Category::Uiux)).await;
        let once = controller.view();
        controller.select_category(Some(Category::Uiux)).await;
        assert_eq!(controller.view(), once);
    }

    #[tokio::test]
    async fn test_toggle_back_to_unselected() {
        let mut controller = WorksController::new(fake(scenario()));
        controller.select_category(Some(Category::Frontend)).await;
        controller.select_category(None).await;
        assert_eq!(controller.view().filtered_projects.len(), 3);
        assert_eq!(controller.selected_category(), None);
    }

    #[tokio::test]
    async fn test_fetch_error_is_safe_state() {
        let repo = fake(scenario());
        let mut controller = WorksController::new(repo.clone());
        controller.mount().await;

        repo.fail.store(true, Ordering::SeqCst);
        controller.select_category(Some(Category::Uiux)).await;

        let view = controller.view();
        assert!(!view.loading);
        assert_eq!(view.selected_category, None);
        assert!(view.filtered_projects.is_empty());
        assert_eq!(controller.active_view(), view.filtered_projects);
        assert_eq!(
            view.error.as_deref(),
            Some("Project storage could not be reached.")
        );
        assert_eq!(view.full_counts.total(), 3);
        assert_eq!(controller.full_collection().len(), view.full_counts.total());
    }

    #[tokio::test]
    async fn test_recovers_after_error() {
        let repo = fake(scenario());
        let mut controller = WorksController::new(repo.clone());
        repo.fail.store(true, Ordering::SeqCst);
        controller.mount().await;
        assert!(controller.view().error.is_some());

        repo.fail.store(false, Ordering::SeqCst);
        controller.mount().await;
        assert_eq!(controller.view().error, None);
        assert_eq!(controller.view().filtered_projects.len(), 3);
        assert_eq!(controller.active_view().len(), 3);

        let accents: Vec<_> = controller.view().cards().map(|(_, accent)| accent).collect();
        assert_eq!(accents, vec!["orange", "cyan", "orange"]);
    }

    #[tokio::test]
    async fn test_loading_visible_while_fetching() {
        let gate = Arc::new(Notify::new());
        let repo = Arc::new(FakeRepo {
            projects: scenario(),
            gate: Some(gate.clone()),
            ..Default::default()
        });
        let mut controller = WorksController::new(repo);
        let mut rx = controller.subscribe();

        let task = tokio::spawn(async move {
            controller.select_category(Some(Category::Frontend)).await;
            controller
        });

        rx.wait_for(|view| view.loading).await.unwrap();
        gate.notify_one();

        let controller = task.await.unwrap();
        let view = controller.view();
        assert!(!view.loading);
        assert_eq!(ids(&view.filtered_projects), vec!["b"]);
    }

    #[tokio::test]
    async fn test_sync_without_events_is_noop() {
        let repo = fake(scenario());
        let mut controller = WorksController::new(repo.clone());
        controller.mount().await;
        assert!(!controller.sync().await);
        assert_eq!(repo.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sync_reloads_on_invalidation_only() {
        use folio_core::events::ProjectEvent;

        let bus = crate::events::EventBus::default();
        let repo = fake(scenario());
        let mut controller = WorksController::new(repo.clone()).with_events(bus.subscribe());
        controller.mount().await;

        bus.publish(DomainEvent::project(ProjectEvent::DraftGenerated {
            project_id: "x".to_string(),
        }));
        assert!(!controller.sync().await);

        bus.publish(DomainEvent::project(ProjectEvent::Imported { count: 3 }));
        bus.publish(DomainEvent::project(ProjectEvent::Deleted {
            project_id: "a".to_string(),
        }));
        assert!(controller.sync().await);
        assert_eq!(repo.loads.load(Ordering::SeqCst), 2);
    }
}
