//! Render snapshot of the works page.

use serde::Serialize;

use folio_entity::project::{Category, Project};

use crate::query::CategoryCounts;

/// Everything the gallery needs to render one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksView {
    /// A fetch is in flight.
    pub loading: bool,
    /// Badge totals, always over the full collection.
    pub full_counts: CategoryCounts,
    /// Projects shown in the grid.
    pub filtered_projects: Vec<Project>,
    /// The active filter, if any.
    pub selected_category: Option<Category>,
    /// User-facing message from the last failed fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WorksView {
    /// Whether the grid should show its empty state.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.filtered_projects.is_empty()
    }

    /// Grid cards, each themed by its own project's category.
    pub fn cards(&self) -> impl Iterator<Item = (&Project, &'static str)> {
        self.filtered_projects
            .iter()
            .map(|project| (project, project.category.accent()))
    }
}
