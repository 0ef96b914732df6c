//! Store key builders for every entry the site persists.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Key builder bound to a namespace (e.g. `portfolio`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    namespace: String,
}

impl StoreKeys {
    /// Create key builders for `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The serialized project collection of the local backend.
    pub fn projects(&self) -> String {
        format!("{}-projects", self.namespace)
    }

    /// The persisted admin session.
    pub fn admin_session(&self) -> String {
        format!("{}-admin", self.namespace)
    }

    /// Scratch area holding snapshot drafts awaiting manual merge.
    pub fn draft_projects(&self) -> String {
        format!("{}-temp-projects", self.namespace)
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::new("portfolio")
    }
}
