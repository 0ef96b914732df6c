//! CLI command definitions and dispatch.

pub mod admin;
pub mod case_study;
pub mod config;
pub mod project;
pub mod transfer;
pub mod works;

use clap::{Parser, Subcommand};

use folio_core::config::AppConfig;
use folio_core::error::AppError;
use folio_service::SiteContext;

use crate::output::OutputFormat;

/// Folio: portfolio project manager
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Admin session (demo gate)
    Admin(admin::AdminArgs),
    /// Project management
    Project(project::ProjectArgs),
    /// Browse the works gallery
    Works(works::WorksArgs),
    /// Show a project's case study
    CaseStudy(case_study::CaseStudyArgs),
    /// Export or import the whole collection
    Transfer(transfer::TransferArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config, config, self.format).await;
        }

        let ctx = SiteContext::build(config).await?;
        match &self.command {
            Commands::Admin(args) => admin::execute(args, &ctx, self.format).await,
            Commands::Project(args) => project::execute(args, &ctx, self.format).await,
            Commands::Works(args) => works::execute(args, &ctx, self.format).await,
            Commands::CaseStudy(args) => case_study::execute(args, &ctx, self.format).await,
            Commands::Transfer(args) => transfer::execute(args, &ctx).await,
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: map a prompt failure
pub(crate) fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}
