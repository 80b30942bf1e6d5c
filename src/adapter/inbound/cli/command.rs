//! Command-line interface definitions.
//!
//! Defines the CLI structure for the `delivery` binary using `clap`. Each
//! subcommand maps onto one operation over the delivery service database.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Restaurant manager updates and order reports over a delivery service database
#[derive(Parser, Debug)]
#[command(name = "delivery")]
#[command(version, about)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "delivery.toml")]
    pub config: PathBuf,

    /// Override the database path (takes precedence over DELIVERY_DATABASE)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the delivery CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Update or inspect restaurant manager details
    #[command(subcommand)]
    Manager(ManagerCommand),

    /// Plot a histogram of delivery times
    Histogram(HistogramArgs),

    /// Show mean food rating per restaurant
    Ratings,

    /// Verify the database exposes the expected tables and columns
    Check,
}

/// Subcommands for `delivery manager`.
#[derive(Subcommand, Debug)]
pub enum ManagerCommand {
    /// Update manager, email and years as manager; omitted fields are kept
    Update(ManagerUpdateArgs),
    /// Show the stored manager details of a restaurant
    Show(ManagerShowArgs),
}

/// Arguments for `delivery manager update`.
#[derive(Parser, Debug)]
pub struct ManagerUpdateArgs {
    /// Restaurant identifier
    pub restaurant_id: String,

    /// New manager name
    #[arg(long)]
    pub manager: Option<String>,

    /// New manager email (letters@letters.letters)
    #[arg(long)]
    pub email: Option<String>,

    /// New number of years as manager
    #[arg(long)]
    pub years: Option<i32>,
}

/// Arguments for `delivery manager show`.
#[derive(Parser, Debug)]
pub struct ManagerShowArgs {
    /// Restaurant identifier
    pub restaurant_id: String,
}

/// Arguments for `delivery histogram`.
#[derive(Parser, Debug)]
pub struct HistogramArgs {
    /// Number of equal-width bins (defaults to the configured value)
    #[arg(short, long)]
    pub bins: Option<usize>,
}
