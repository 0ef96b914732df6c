//! Admin session commands.

use clap::{Args, Subcommand};

use folio_core::error::AppError;
use folio_service::SiteContext;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Log in to the admin panel
    Login {
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Log out
    Logout,
    /// Show the current admin session
    Whoami,
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    ctx: &SiteContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::Login { email, password } => {
            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(super::input_error)?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(super::input_error)?,
            };

            let session = ctx.auth.login(&email, &password).await?;
            output::print_success(&format!("Logged in as {}", session.email));
        }
        AdminCommand::Logout => {
            ctx.auth.logout().await?;
            output::print_success("Logged out");
        }
        AdminCommand::Whoami => match ctx.auth.current().await {
            Some(session) => match format {
                OutputFormat::Json => output::print_item(&session, format),
                OutputFormat::Table => {
                    output::print_kv("Email", &session.email);
                    output::print_kv("ID", &session.id);
                    output::print_kv("Logged in", &session.login_time.to_rfc3339());
                }
            },
            None => output::print_warning("Not logged in"),
        },
    }

    Ok(())
}
