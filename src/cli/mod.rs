//! CLI module for tidyhub
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution and validation
//! - Command handlers for serve, migrate, and token operations

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Load and merge configuration from CLI arguments
///
/// This function handles the complete configuration loading process:
/// 1. Load base configuration honoring `--config` and `--env`
/// 2. Merge CLI argument overrides
/// 3. Validate the final configuration
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
///
/// # Returns
/// Merged and validated Settings
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> Result<Settings, ConfigError> {
    let merger = ConfigurationMerger::from_cli(cli)?;
    merger.merge_cli_args(cli)
}
