use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::PlanArgs;

/// Livestock batch planner for small homesteads
///
/// Works out birth or hatch windows, processing dates, feed totals and
/// storage barrels for a batch of chickens, turkeys or kunekune pigs. Runs
/// either as a command-line tool or as an MCP (Model Context Protocol) server
/// for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "homestead")]
pub struct Args {
    /// Path to the settings file. Defaults to
    /// $XDG_CONFIG_HOME/homestead/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Homestead CLI
///
/// - `plan`: Compute the timeline, feed and storage for a batch
/// - `species`: Show the supported species and their assumptions
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Plan a batch of animals
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// List supported species
    #[command(aliases = ["s", "ls"])]
    Species,
    /// Start the MCP server
    Serve,
}
