//! Entry point shared by the binary: resolves configuration, initializes
//! logging and routes each subcommand to its handler.

use std::path::Path;

use tracing::debug;

use super::command::{Cli, Commands, ManagerCommand};
use super::output::{self, OutputConfig};
use super::{check, histogram, manager, ratings};
use crate::adapter::outbound::sqlite::SqliteDeliveryStore;
use crate::config::Config;
use crate::error::Result;

/// Resolve configuration from the config file, the environment and CLI
/// overrides, in increasing precedence.
///
/// # Errors
/// Returns a configuration error if the file exists but is invalid.
pub fn resolve_config(
    config_path: &Path,
    database: Option<&Path>,
    log_level: Option<&str>,
) -> Result<Config> {
    let mut config = Config::load_or_default(config_path)?;
    config.apply_env_overrides();
    if let Some(database) = database {
        config.database = database.to_path_buf();
    }
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
    Ok(config)
}

/// Run the parsed command line.
///
/// # Errors
/// Returns the first error raised by configuration or the selected command.
pub fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig { json: cli.json }, &cli.color);

    let config = resolve_config(&cli.config, cli.database.as_deref(), cli.log_level.as_deref())?;
    config.logging.init();
    debug!(database = %config.database.display(), "configuration resolved");

    let store = SqliteDeliveryStore::new(&config.database);

    match cli.command {
        Commands::Manager(ManagerCommand::Update(args)) => manager::execute_update(&store, &config, &args),
        Commands::Manager(ManagerCommand::Show(args)) => manager::execute_show(&store, &args),
        Commands::Histogram(args) => histogram::execute(&store, &config, &args),
        Commands::Ratings => ratings::execute(&store),
        Commands::Check => check::execute(&store),
    }
}
