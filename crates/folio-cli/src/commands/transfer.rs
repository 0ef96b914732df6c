//! Collection export and import commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use folio_core::error::AppError;
use folio_service::SiteContext;
use folio_service::repository::transfer::export_file_name;

use crate::output;

/// Arguments for transfer commands
#[derive(Debug, Args)]
pub struct TransferArgs {
    /// Transfer subcommand
    #[command(subcommand)]
    pub command: TransferCommand,
}

/// Transfer subcommands
#[derive(Debug, Subcommand)]
pub enum TransferCommand {
    /// Write the whole collection to a JSON file
    Export {
        /// Output file (defaults to the backup file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace the whole collection from a JSON file
    Import {
        /// File to import
        file: PathBuf,
    },
}

/// Execute transfer commands
pub async fn execute(args: &TransferArgs, ctx: &SiteContext) -> Result<(), AppError> {
    match &args.command {
        TransferCommand::Export { output: out_path } => {
            let json = ctx.repo.export().await?;
            let path = out_path.clone().unwrap_or_else(|| {
                PathBuf::from(export_file_name(
                    &ctx.config.export.file_prefix,
                    ctx.repo.backend(),
                ))
            });

            tokio::fs::write(&path, json)
                .await
                .map_err(|e| AppError::storage(format!("Failed to write export: {}", e)))?;
            output::print_success(&format!("Exported projects to '{}'", path.display()));
        }
        TransferCommand::Import { file } => {
            ctx.auth.require().await?;

            let payload = tokio::fs::read_to_string(file).await.map_err(|e| {
                AppError::malformed_import(format!("Failed to read '{}': {}", file.display(), e))
            })?;
            let count = ctx.repo.import(&payload).await?;
            output::print_success(&format!("Imported {} projects", count));
        }
    }

    Ok(())
}
