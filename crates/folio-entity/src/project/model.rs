//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use folio_core::types::ProjectId;

use super::case_study::CaseStudy;
use super::category::Category;
use super::image::ImageSource;

/// A project shown in the works gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique project identifier.
    pub id: ProjectId,
    /// Project title.
    pub title: String,
    /// Short description for the gallery card.
    pub description: String,
    /// Gallery partition.
    pub category: Category,
    /// Display year (free text).
    pub year: String,
    /// Static asset path or `data:` URI.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    /// Live site link.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub live_url: Option<String>,
    /// Source repository link.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_url: Option<String>,
    /// Figma file link.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub figma_url: Option<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
    /// Optional case study.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<CaseStudy>,
}

impl Project {
    /// Build a new record from form input, stamping both timestamps with `now`.
    pub fn from_input(
        id: ProjectId,
        input: ProjectInput,
        image: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            year: input.year,
            image: image.and_then(non_empty),
            live_url: input.live_url.and_then(non_empty),
            github_url: input.github_url.and_then(non_empty),
            figma_url: input.figma_url.and_then(non_empty),
            created_at: now,
            updated_at: now,
            case_study: input.case_study,
        }
    }

    /// Merge `patch` into this record and refresh `updated_at`.
    ///
    /// Returns the names of the fields the patch touched. The id and
    /// `created_at` never change, and `updated_at` never moves before
    /// `created_at`.
    pub fn apply(
        &mut self,
        patch: ProjectPatch,
        image: Option<String>,
        now: DateTime<Utc>,
    ) -> Vec<&'static str> {
        let mut changed = Vec::new();

        if let Some(title) = patch.title {
            self.title = title;
            changed.push("title");
        }
        if let Some(description) = patch.description {
            self.description = description;
            changed.push("description");
        }
        if let Some(category) = patch.category {
            self.category = category;
            changed.push("category");
        }
        if let Some(year) = patch.year {
            self.year = year;
            changed.push("year");
        }
        if let Some(url) = patch.live_url {
            self.live_url = non_empty(url);
            changed.push("liveUrl");
        }
        if let Some(url) = patch.github_url {
            self.github_url = non_empty(url);
            changed.push("githubUrl");
        }
        if let Some(url) = patch.figma_url {
            self.figma_url = non_empty(url);
            changed.push("figmaUrl");
        }
        if let Some(case_study) = patch.case_study {
            self.case_study = case_study;
            changed.push("caseStudy");
        }
        if let Some(image) = image {
            self.image = non_empty(image);
            changed.push("image");
        }

        self.updated_at = now.max(self.created_at);
        changed
    }

    /// Whether the case-study detail page is reachable.
    pub fn has_detailed_study(&self) -> bool {
        self.case_study
            .as_ref()
            .is_some_and(|study| study.has_detailed_study)
    }

    /// How the card image should be presented.
    pub fn image_source(&self) -> ImageSource<'_> {
        ImageSource::from_stored(self.image.as_deref())
    }
}

/// Data required to create a new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    /// Project title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Gallery partition.
    pub category: Category,
    /// Display year.
    pub year: String,
    /// Live site link.
    pub live_url: Option<String>,
    /// Source repository link.
    pub github_url: Option<String>,
    /// Figma file link.
    pub figma_url: Option<String>,
    /// Optional case study.
    pub case_study: Option<CaseStudy>,
}

/// Partial update of a project. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<Category>,
    /// New year.
    pub year: Option<String>,
    /// New live link (empty clears it).
    pub live_url: Option<String>,
    /// New repository link (empty clears it).
    pub github_url: Option<String>,
    /// New Figma link (empty clears it).
    pub figma_url: Option<String>,
    /// New case study (`Some(None)` removes it).
    pub case_study: Option<Option<CaseStudy>>,
}

impl ProjectPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(non_empty))
}
