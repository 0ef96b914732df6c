//! Derived views over a project collection.
//!
//! Nothing here mutates the collection it is given. Category totals are
//! always computed from a full collection, never from a filtered view,
//! so switching categories cannot zero out the other category's badge.

use serde::{Deserialize, Serialize};

use folio_entity::project::{Category, Project};

/// Stable-order subset of `projects` in `category`. `None` returns everything.
pub fn by_category(projects: &[Project], category: Option<Category>) -> Vec<Project> {
    match category {
        None => projects.to_vec(),
        Some(category) => projects
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
    }
}

/// Find a project by id.
pub fn by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id.as_str() == id)
}

/// Number of projects in `category`.
pub fn count_by_category(projects: &[Project], category: Category) -> usize {
    projects.iter().filter(|p| p.category == category).count()
}

/// Projects whose case-study page is enabled.
pub fn with_case_study(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.has_detailed_study()).collect()
}

/// Per-category totals shown on the gallery badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// UI/UX projects.
    pub uiux: usize,
    /// Frontend projects.
    pub frontend: usize,
}

impl CategoryCounts {
    /// Count a full collection.
    pub fn of(projects: &[Project]) -> Self {
        Self {
            uiux: count_by_category(projects, Category::Uiux),
            frontend: count_by_category(projects, Category::Frontend),
        }
    }

    /// Count for one category.
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Uiux => self.uiux,
            Category::Frontend => self.frontend,
        }
    }

    /// Sum over every category.
    pub fn total(&self) -> usize {
        self.uiux + self.frontend
    }
}
