//! Project management commands (the admin panel).

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use folio_core::error::AppError;
use folio_core::types::ProjectId;
use folio_entity::project::{Category, ImageUpload};
use folio_service::repository::snapshot::SNAPSHOT_SOURCE;
use folio_service::{CategoryCounts, DeleteOutcome, ProjectForm, SiteContext, query};

use crate::output::{self, OutputFormat};

/// Arguments for project commands
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project subcommand
    #[command(subcommand)]
    pub command: ProjectCommand,
}

/// Project subcommands
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// List projects with dashboard totals
    List {
        /// Filter by category
        #[arg(short = 'k', long)]
        category: Option<Category>,
        /// Show pending snapshot drafts instead
        #[arg(long)]
        drafts: bool,
    },
    /// Show one project
    Show {
        /// Project ID
        id: String,
    },
    /// Add a project
    Add(FormArgs),
    /// Edit a project
    Edit {
        /// Project ID
        id: String,
        /// Fields to change
        #[command(flatten)]
        form: FormArgs,
    },
    /// Discard pending snapshot drafts
    ClearDrafts,
    /// Delete a project
    Delete {
        /// Project ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Form fields accepted on the command line
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Read the whole form from a JSON file
    #[arg(long)]
    pub from_file: Option<PathBuf>,
    /// Title
    #[arg(long)]
    pub title: Option<String>,
    /// Description
    #[arg(long)]
    pub description: Option<String>,
    /// Category (uiux or frontend)
    #[arg(long)]
    pub category: Option<String>,
    /// Year
    #[arg(long)]
    pub year: Option<String>,
    /// Live site URL
    #[arg(long)]
    pub live_url: Option<String>,
    /// Repository URL
    #[arg(long)]
    pub github_url: Option<String>,
    /// Figma URL
    #[arg(long)]
    pub figma_url: Option<String>,
    /// Card image file
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl FormArgs {
    /// Overlay the given flags onto `form`.
    fn apply_to(&self, form: &mut ProjectForm) {
        let fields = [
            (&self.title, &mut form.title),
            (&self.description, &mut form.description),
            (&self.category, &mut form.category),
            (&self.year, &mut form.year),
            (&self.live_url, &mut form.live_url),
            (&self.github_url, &mut form.github_url),
            (&self.figma_url, &mut form.figma_url),
        ];
        for (flag, field) in fields {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }
    }

    async fn base_form(&self) -> Result<Option<ProjectForm>, AppError> {
        let Some(path) = &self.from_file else {
            return Ok(None);
        };
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::not_found(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let form = serde_json::from_str(&raw)
            .map_err(|e| AppError::validation(format!("Invalid form file: {}", e)))?;
        Ok(Some(form))
    }

    async fn image(&self) -> Result<Option<ImageUpload>, AppError> {
        let Some(path) = &self.image else {
            return Ok(None);
        };
        let data = tokio::fs::read(path).await.map_err(|e| {
            AppError::not_found(format!("Image not found: {} ({})", path.display(), e))
        })?;
        Ok(Some(ImageUpload::new(file_name(path), data)))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string()
}

fn prompt_missing(field: &mut String, prompt: &str) -> Result<(), AppError> {
    if field.trim().is_empty() {
        *field = dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(super::input_error)?;
    }
    Ok(())
}

/// Execute project commands
pub async fn execute(
    args: &ProjectArgs,
    ctx: &SiteContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ProjectCommand::List { category, drafts } => {
            if *drafts {
                output::print_projects(&ctx.repo.drafts().await?, format);
                return Ok(());
            }

            let projects = ctx.repo.load().await?;
            output::print_projects(&query::by_category(&projects, *category), format);

            if format == OutputFormat::Table {
                let counts = CategoryCounts::of(&projects);
                println!();
                output::print_kv("Backend", &ctx.repo.backend().to_string());
                output::print_kv("Total", &counts.total().to_string());
                for category in Category::ALL {
                    output::print_kv(category.label(), &counts.get(category).to_string());
                }
                output::print_kv(
                    "Case studies",
                    &query::with_case_study(&projects).len().to_string(),
                );
            }
        }
        ProjectCommand::Show { id } => {
            let projects = ctx.repo.load().await?;
            let project = query::by_id(&projects, id)
                .ok_or_else(|| AppError::not_found(format!("Project '{}' not found", id)))?;
            output::print_item(project, format);
        }
        ProjectCommand::Add(form_args) => {
            ctx.auth.require().await?;

            let mut form = form_args.base_form().await?.unwrap_or_default();
            form_args.apply_to(&mut form);
            prompt_missing(&mut form.title, "Title")?;
            prompt_missing(&mut form.description, "Description")?;
            prompt_missing(&mut form.category, "Category (uiux/frontend)")?;
            prompt_missing(&mut form.year, "Year")?;

            let input = form.into_input()?;
            let image = form_args.image().await?;
            let id = ctx.repo.create(input, image).await?;

            if ctx.repo.backend().is_read_only() {
                print_draft(ctx, &id).await?;
            } else {
                output::print_success(&format!("Project '{}' created", id));
            }
        }
        ProjectCommand::Edit { id, form: form_args } => {
            ctx.auth.require().await?;

            let project_id = ProjectId::from(id.as_str());
            let current = ctx
                .repo
                .editable(&project_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Project '{}' not found", id)))?;
            let mut form = match form_args.base_form().await? {
                Some(form) => form,
                None => ProjectForm::from_project(&current),
            };
            form_args.apply_to(&mut form);

            let patch = form.into_patch()?;
            let image = form_args.image().await?;
            ctx.repo.update(&project_id, patch, image).await?;

            if ctx.repo.backend().is_read_only() {
                print_draft(ctx, &project_id).await?;
            } else {
                output::print_success(&format!("Project '{}' updated", id));
            }
        }
        ProjectCommand::ClearDrafts => {
            ctx.auth.require().await?;
            ctx.repo.clear_drafts().await?;
            output::print_success("Drafts cleared");
        }
        ProjectCommand::Delete { id, yes } => {
            ctx.auth.require().await?;

            if !*yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete project '{}'?", id))
                    .default(false)
                    .interact()
                    .map_err(super::input_error)?;
                if !confirmed {
                    output::print_warning("Cancelled");
                    return Ok(());
                }
            }

            match ctx.repo.delete(&ProjectId::from(id.as_str())).await? {
                DeleteOutcome::Deleted => output::print_success(&format!("Project '{}' deleted", id)),
                DeleteOutcome::NotFound => {
                    output::print_warning(&format!("Project '{}' does not exist", id))
                }
                DeleteOutcome::ManualActionRequired { instructions } => {
                    output::print_warning(&instructions)
                }
            }
        }
    }

    Ok(())
}

/// Show the generated snapshot record and what to do with it.
async fn print_draft(ctx: &SiteContext, id: &ProjectId) -> Result<(), AppError> {
    let drafts = ctx.repo.drafts().await?;
    let Some(draft) = drafts.iter().find(|d| &d.id == id) else {
        return Ok(());
    };

    output::print_warning(&format!(
        "The snapshot is read-only. Add this record to {} and redeploy:",
        SNAPSHOT_SOURCE
    ));
    println!("{}", serde_json::to_string_pretty(draft)?);
    if let Some(image) = &draft.image {
        output::print_kv("Copy image to", &format!("public{}", image));
    }
    Ok(())
}
