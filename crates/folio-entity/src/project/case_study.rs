//! Case-study sub-record.

use serde::{Deserialize, Serialize};

/// Detailed case study attached to a project.
///
/// Only `has_detailed_study` gates the detail page; every other field is
/// display-only and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    /// Whether the detail page is reachable.
    #[serde(default)]
    pub has_detailed_study: bool,
    /// Logo image path.
    #[serde(default)]
    pub logo: String,
    /// Hero video path.
    #[serde(default)]
    pub hero_video: String,
    /// Overview paragraph.
    #[serde(default)]
    pub overview: String,
    /// Problem statements.
    #[serde(default)]
    pub problem: Vec<String>,
    /// Solution statements.
    #[serde(default)]
    pub solution: Vec<String>,
    /// Gallery image paths.
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Technologies used.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Project duration text.
    #[serde(default)]
    pub duration: String,
    /// Role on the project.
    #[serde(default)]
    pub role: String,
    /// Figma prototype link.
    #[serde(default)]
    pub figma_url: String,
}
