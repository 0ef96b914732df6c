//! Project identifier.
//!
//! Ids are human-readable slugs derived from the project title. The same
//! strategy is used whichever backend creates the record, so ids never
//! diverge in format between the snapshot file and the local store.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Unique identifier for a project within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Wrap an existing identifier without normalising it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an id for `title` that is not already in `taken`.
    ///
    /// The slug gets a `-2`, `-3`, ... suffix on collision. A title with
    /// no usable characters falls back to `project-{unix_millis}`.
    pub fn generate<'a, I>(title: &str, taken: I) -> Self
    where
        I: IntoIterator<Item = &'a ProjectId>,
    {
        let taken: Vec<&str> = taken.into_iter().map(ProjectId::as_str).collect();
        let mut base = slugify(title);
        if base.is_empty() {
            base = format!("project-{}", Utc::now().timestamp_millis());
        }

        if !taken.contains(&base.as_str()) {
            return Self(base);
        }

        let mut n = 2u32;
        loop {
            let candidate = format!("{base}-{n}");
            if !taken.contains(&candidate.as_str()) {
                return Self(candidate);
            }
            n += 1;
        }
    }

    /// Return the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Lowercase, collapse whitespace runs into `-`, drop anything outside `[a-z0-9-]`.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Project id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
