//! Case-study detail route.

use tracing::{debug, warn};

use folio_entity::project::Project;

use crate::query;
use crate::repository::ProjectRepository;

/// Where unreachable case studies send the visitor.
pub const WORKS_ROUTE: &str = "/works";

/// Outcome of resolving `/case-study/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStudyRoute {
    /// Render the detail page for this project.
    Found(Box<Project>),
    /// Send the visitor elsewhere.
    Redirect {
        /// Target route.
        to: &'static str,
    },
}

impl CaseStudyRoute {
    fn redirect() -> Self {
        Self::Redirect { to: WORKS_ROUTE }
    }
}

/// Resolve a case-study page.
///
/// Unknown ids, projects without an enabled case study, and fetch
/// failures all redirect to the works page.
pub async fn resolve(repo: &dyn ProjectRepository, id: &str) -> CaseStudyRoute {
    let projects = match repo.load().await {
        Ok(projects) => projects,
        Err(e) => {
            warn!(project_id = id, error = %e, "Case study fetch failed");
            return CaseStudyRoute::redirect();
        }
    };

    match query::by_id(&projects, id) {
        Some(project) if project.has_detailed_study() => {
            CaseStudyRoute::Found(Box::new(project.clone()))
        }
        Some(_) => {
            debug!(project_id = id, "Case study not enabled");
            CaseStudyRoute::redirect()
        }
        None => {
            debug!(project_id = id, "Case study not found");
            CaseStudyRoute::redirect()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use folio_entity::project::CaseStudy;
    use folio_storage::providers::memory::MemoryStore;
    use folio_storage::{StoreKeys, StoreManager};

    use crate::events::EventBus;
    use crate::repository::SnapshotRepository;
    use crate::repository::transfer::parse_collection;

    fn repo() -> SnapshotRepository {
        let mut projects = parse_collection(
            r#"[
                {"id": "plain", "title": "Plain", "description": "d", "category": "uiux",
                 "year": "2023", "createdAt": "2024-01-01T00:00:00Z",
                 "updatedAt": "2024-01-01T00:00:00Z"},
                {"id": "deep", "title": "Deep", "description": "d", "category": "frontend",
                 "year": "2024", "createdAt": "2024-01-01T00:00:00Z",
                 "updatedAt": "2024-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();
        projects[1].case_study = Some(CaseStudy {
            has_detailed_study: true,
            overview: "Long story".to_string(),
            ..Default::default()
        });
        let store = StoreManager::from_provider(
            Arc::new(MemoryStore::unlimited()),
            StoreKeys::default(),
        );
        SnapshotRepository::new(projects, store, EventBus::default())
    }

    #[tokio::test]
    async fn test_found() {
        match resolve(&repo(), "deep").await {
            CaseStudyRoute::Found(project) => assert_eq!(project.title, "Deep"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_redirects() {
        assert_eq!(
            resolve(&repo(), "missing").await,
            CaseStudyRoute::Redirect { to: "/works" }
        );
    }

    #[tokio::test]
    async fn test_disabled_study_redirects() {
        assert_eq!(
            resolve(&repo(), "plain").await,
            CaseStudyRoute::Redirect { to: WORKS_ROUTE }
        );
    }
}
