//! Admin project form.
//!
//! Fields arrive as raw text exactly as typed into the panel. List
//! fields are one entry per line, except technologies which are comma
//! separated.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_entity::project::{CaseStudy, Category, Project, ProjectInput, ProjectPatch};

/// Raw admin form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectForm {
    /// Project title.
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    /// Short description.
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
    /// `uiux` or `frontend`.
    pub category: String,
    /// Display year.
    #[validate(custom(function = "not_blank", message = "Year is required"))]
    pub year: String,
    /// Live site link.
    pub live_url: String,
    /// Repository link.
    pub github_url: String,
    /// Figma file link.
    pub figma_url: String,

    /// Enables the case-study page and the fields below.
    pub has_detailed_study: bool,
    /// Logo image path.
    pub logo: String,
    /// Hero video path.
    pub hero_video: String,
    /// Overview paragraph.
    pub overview: String,
    /// Problem statements, one per line.
    pub problem: String,
    /// Solution statements, one per line.
    pub solution: String,
    /// Gallery image paths, one per line.
    pub gallery: String,
    /// Comma-separated technologies.
    pub technologies: String,
    /// Duration text.
    pub duration: String,
    /// Role text.
    pub role: String,
    /// Figma prototype link for the case study.
    pub case_study_figma_url: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn optional(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

impl ProjectForm {
    /// Pre-populate an edit form from an existing project.
    pub fn from_project(project: &Project) -> Self {
        let study = project.case_study.clone().unwrap_or_default();
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            category: project.category.to_string(),
            year: project.year.clone(),
            live_url: project.live_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            figma_url: project.figma_url.clone().unwrap_or_default(),
            has_detailed_study: study.has_detailed_study,
            logo: study.logo,
            hero_video: study.hero_video,
            overview: study.overview,
            problem: study.problem.join("\n"),
            solution: study.solution.join("\n"),
            gallery: study.gallery.join("\n"),
            technologies: study.technologies.join(", "),
            duration: study.duration,
            role: study.role,
            case_study_figma_url: study.figma_url,
        }
    }

    /// Validate the form and build creation input.
    pub fn into_input(self) -> AppResult<ProjectInput> {
        self.check()?;
        let category = self.category.parse::<Category>()?;
        let case_study = self.case_study();

        Ok(ProjectInput {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            year: self.year.trim().to_string(),
            live_url: optional(&self.live_url),
            github_url: optional(&self.github_url),
            figma_url: optional(&self.figma_url),
            case_study,
        })
    }

    /// Validate the form and build a full-replacement patch.
    ///
    /// Empty links clear the stored link. Unticking the case study removes it.
    pub fn into_patch(self) -> AppResult<ProjectPatch> {
        let input = self.into_input()?;
        Ok(ProjectPatch {
            title: Some(input.title),
            description: Some(input.description),
            category: Some(input.category),
            year: Some(input.year),
            live_url: Some(input.live_url.unwrap_or_default()),
            github_url: Some(input.github_url.unwrap_or_default()),
            figma_url: Some(input.figma_url.unwrap_or_default()),
            case_study: Some(input.case_study),
        })
    }

    fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::validation(format!("Invalid project form: {e}")))
    }

    fn case_study(&self) -> Option<CaseStudy> {
        if !self.has_detailed_study {
            return None;
        }
        Some(CaseStudy {
            has_detailed_study: true,
            logo: self.logo.trim().to_string(),
            hero_video: self.hero_video.trim().to_string(),
            overview: self.overview.trim().to_string(),
            problem: lines(&self.problem),
            solution: lines(&self.solution),
            gallery: lines(&self.gallery),
            technologies: comma_list(&self.technologies),
            duration: self.duration.trim().to_string(),
            role: self.role.trim().to_string(),
            figma_url: self.case_study_figma_url.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_core::error::ErrorKind;
    use folio_core::types::ProjectId;
    use pretty_assertions::assert_eq;

    fn filled() -> ProjectForm {
        ProjectForm {
            title: "  Orbit ".to_string(),
            description: "Space dashboard".to_string(),
            category: "frontend".to_string(),
            year: "2024".to_string(),
            github_url: "https://github.com/me/orbit".to_string(),
            has_detailed_study: true,
            problem: "Slow\n\n  Confusing  \n".to_string(),
            technologies: "React, , TypeScript ,Vite".to_string(),
            gallery: "/a.png\n/b.png".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_into_input_parses_lists() {
        let input = filled().into_input().unwrap();
        assert_eq!(input.title, "Orbit");
        assert_eq!(input.category, Category::Frontend);
        assert_eq!(input.live_url, None);

        let study = input.case_study.unwrap();
        assert_eq!(study.problem, vec!["Slow", "Confusing"]);
        assert_eq!(study.technologies, vec!["React", "TypeScript", "Vite"]);
        assert_eq!(study.gallery, vec!["/a.png", "/b.png"]);
        assert!(study.solution.is_empty());
    }

    #[test]
    fn test_required_fields() {
        let form = ProjectForm {
            title: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.into_input().unwrap_err().kind, ErrorKind::Validation);

        let form = ProjectForm {
            year: String::new(),
            ..filled()
        };
        assert_eq!(form.into_input().unwrap_err().kind, ErrorKind::Validation);
    }

    #[test]
    fn test_unknown_category() {
        let form = ProjectForm {
            category: "backend".to_string(),
            ..filled()
        };
        assert_eq!(form.into_input().unwrap_err().kind, ErrorKind::Validation);
    }

    #[test]
    fn test_unticked_case_study_is_dropped() {
        let form = ProjectForm {
            has_detailed_study: false,
            ..filled()
        };
        assert_eq!(form.into_input().unwrap().case_study, None);
    }

    #[test]
    fn test_edit_form_roundtrip() {
        let input = filled().into_input().unwrap();
        let project = Project::from_input(ProjectId::from("orbit"), input, None, Utc::now());

        let form = ProjectForm::from_project(&project);
        assert_eq!(form.problem, "Slow\nConfusing");
        assert_eq!(form.technologies, "React, TypeScript, Vite");
        assert_eq!(form.category, "frontend");

        let patch = form.into_patch().unwrap();
        let mut edited = project.clone();
        edited.apply(patch, None, project.created_at);
        assert_eq!(edited, project);
    }
}
