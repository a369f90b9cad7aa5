//! Homestead CLI Application
//!
//! Command-line interface and MCP server for the livestock batch planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use homestead_core::SettingsBuilder;
use log::info;
use mcp::{run_stdio_server, HomesteadMcpServer};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        command,
    } = Args::parse();

    let settings = SettingsBuilder::new()
        .with_config_path(config_file)
        .build()
        .context("Failed to load settings")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Homestead started");

    match command {
        Some(Commands::Plan(args)) => Cli::new(settings, renderer).plan(args),
        Some(Commands::Serve) => {
            info!("Starting Homestead MCP server");
            run_stdio_server(HomesteadMcpServer::new(settings))
                .await
                .context("MCP server failed")
        }
        Some(Commands::Species) | None => Cli::new(settings, renderer).list_species(),
    }
}
