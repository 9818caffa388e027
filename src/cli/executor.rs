//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler, TokenCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// This function dispatches to the appropriate command handler based on
/// the parsed CLI arguments.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
///
/// # Returns
/// Returns Ok(()) on success, or AppError on failure
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    // Validate CLI arguments and configuration
    validate_command_args(cli, &settings)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => {
            // Return Ok to signal that server should start
            // Actual server startup is handled in main.rs
            Ok(())
        }
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
        Some(Commands::Token {
            subject,
            expires_in_hours,
        }) => {
            TokenCommandHandler::new(settings)
                .execute(subject, *expires_in_hours)
                .await
        }
    }
}

/// Validate command arguments and configuration before execution
///
/// This function performs comprehensive validation of both CLI arguments
/// and configuration values, providing specific error messages for
/// validation failures.
fn validate_command_args(cli: &Cli, _settings: &Settings) -> AppResult<()> {
    // Validate CLI arguments first
    if let Err(msg) = cli.validate() {
        return Err(crate::error::AppError::Validation {
            field: "cli_arguments".to_string(),
            reason: msg,
        });
    }

    // Validate command-specific requirements
    if let Some(ref command) = cli.command {
        match command {
            Commands::Serve {
                host,
                port,
                log_level: _,
                dry_run: _,
            } => {
                validate_serve_args(host.as_ref(), *port);
            }
            Commands::Migrate {
                dry_run: _,
                rollback,
            } => {
                validate_migrate_args(*rollback);
            }
            Commands::Token { .. } => {
                // Subject emptiness is covered by Cli::validate
            }
        }
    }

    Ok(())
}

/// Warn about serve argument combinations that are legal but surprising
fn validate_serve_args(host: Option<&String>, port: Option<u16>) {
    if let (Some(host_addr), Some(port_num)) = (host, port)
        && host_addr == "localhost"
        && port_num == 80
    {
        eprintln!("Warning: Using port 80 with localhost may conflict with other services");
    }
}

/// Warn about large rollback operations
fn validate_migrate_args(rollback: Option<u32>) {
    if let Some(steps) = rollback
        && steps > 50
    {
        eprintln!(
            "Warning: Rolling back {} migrations is a large operation. Consider using smaller steps.",
            steps
        );
    }
}
