//! Collection export and import.
//!
//! An import payload is parsed and validated in full before anything is
//! written, so a malformed file can never partially overwrite a store.

use std::collections::HashSet;

use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_entity::project::Project;

use super::BackendKind;

/// Serialize a collection as human-readable JSON.
pub fn export_collection(projects: &[Project]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(projects)?)
}

/// Parse and validate a user-supplied collection.
///
/// The payload must be a JSON array of project records with non-empty,
/// unique ids and non-empty titles.
pub fn parse_collection(payload: &str) -> AppResult<Vec<Project>> {
    let projects: Vec<Project> = serde_json::from_str(payload)
        .map_err(|e| AppError::malformed_import(format!("Not a valid project collection: {e}")))?;

    let mut seen = HashSet::new();
    for (index, project) in projects.iter().enumerate() {
        if project.id.as_str().trim().is_empty() {
            return Err(AppError::malformed_import(format!(
                "Project at position {index} has an empty id"
            )));
        }
        if project.title.trim().is_empty() {
            return Err(AppError::malformed_import(format!(
                "Project '{}' has an empty title",
                project.id
            )));
        }
        if !seen.insert(project.id.as_str()) {
            return Err(AppError::malformed_import(format!(
                "Duplicate project id '{}'",
                project.id
            )));
        }
    }

    Ok(projects)
}

/// File name offered when downloading an export.
///
/// Snapshot exports are named like the bundled file so they can replace
/// it directly.
pub fn export_file_name(prefix: &str, backend: BackendKind) -> String {
    match backend {
        BackendKind::Snapshot => "projects.json".to_string(),
        BackendKind::Local => format!("{prefix}-backup.json"),
    }
}
