//! Works gallery command.

use clap::Args;

use folio_core::error::AppError;
use folio_entity::project::Category;
use folio_service::SiteContext;

use crate::output::{self, OutputFormat};

/// Arguments for the works command
#[derive(Debug, Args)]
pub struct WorksArgs {
    /// Only show this category
    #[arg(short = 'k', long)]
    pub category: Option<Category>,
}

/// Execute the works command
pub async fn execute(
    args: &WorksArgs,
    ctx: &SiteContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut works = ctx.works();
    works.mount().await;
    if args.category.is_some() {
        works.select_category(args.category).await;
    }
    let view = works.view();

    if format == OutputFormat::Json {
        output::print_item(&view, format);
        return Ok(());
    }

    if let Some(message) = &view.error {
        output::print_error(message);
    }

    let tabs: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            let marker = if view.selected_category == Some(*c) { "*" } else { " " };
            format!("{}{} ({})", marker, c.label(), view.full_counts.get(*c))
        })
        .collect();
    println!("{}\n", tabs.join("   "));

    output::print_projects(&view.filtered_projects, format);
    Ok(())
}
