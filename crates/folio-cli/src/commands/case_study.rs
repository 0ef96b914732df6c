//! Case-study command.

use clap::Args;

use folio_core::error::AppError;
use folio_service::SiteContext;
use folio_service::case_study::{self, CaseStudyRoute};

use crate::output::{self, OutputFormat};

/// Arguments for the case-study command
#[derive(Debug, Args)]
pub struct CaseStudyArgs {
    /// Project ID
    pub id: String,
}

/// Execute the case-study command
pub async fn execute(
    args: &CaseStudyArgs,
    ctx: &SiteContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let project = match case_study::resolve(ctx.repo.as_ref(), &args.id).await {
        CaseStudyRoute::Found(project) => project,
        CaseStudyRoute::Redirect { to } => {
            output::print_warning(&format!(
                "No case study for '{}'. Redirecting to {}",
                args.id, to
            ));
            return Ok(());
        }
    };

    if format == OutputFormat::Json {
        output::print_item(&project, format);
        return Ok(());
    }

    let Some(study) = &project.case_study else {
        return Ok(());
    };

    println!("{} ({})\n", project.title, project.category.label());
    output::print_kv("Year", &project.year);
    output::print_kv("Role", &study.role);
    output::print_kv("Duration", &study.duration);
    output::print_kv("Technologies", &study.technologies.join(", "));
    if !study.figma_url.is_empty() {
        output::print_kv("Prototype", &study.figma_url);
    }
    if !study.overview.is_empty() {
        println!("\n{}", study.overview);
    }

    for (heading, items) in [("Problem", &study.problem), ("Solution", &study.solution)] {
        if items.is_empty() {
            continue;
        }
        println!("\n{}:", heading);
        for item in items {
            println!("  - {}", item);
        }
    }
    Ok(())
}
