//! Project-collection domain events.

use serde::{Deserialize, Serialize};

/// Events related to the project collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectEvent {
    /// A project was added to the persisted collection.
    Created {
        /// The new project ID.
        project_id: String,
    },
    /// A project's fields were replaced.
    Updated {
        /// The project ID.
        project_id: String,
    },
    /// A project was removed.
    Deleted {
        /// The project ID.
        project_id: String,
    },
    /// The whole collection was replaced by an import.
    Imported {
        /// Number of projects in the imported collection.
        count: usize,
    },
    /// A snapshot record was generated for manual merge into the bundled file.
    DraftGenerated {
        /// The generated project ID.
        project_id: String,
    },
}

impl ProjectEvent {
    /// Whether the persisted collection changed.
    ///
    /// Drafts do not touch the snapshot, so they leave views as they are.
    pub fn invalidates_collection(&self) -> bool {
        !matches!(self, Self::DraftGenerated { .. })
    }
}
