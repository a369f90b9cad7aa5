//! MCP server implementation for Homestead
//!
//! This module exposes the planning engine over the Model Context Protocol so
//! that AI assistants can plan batches on a user's behalf.

use anyhow::Result;
use homestead_core::Settings;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{McpResult, PlanBatch};

/// MCP server for Homestead
#[derive(Clone)]
pub struct HomesteadMcpServer {
    settings: Settings,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HomesteadMcpServer {
    /// Create a new Homestead MCP server
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "plan_batch",
        description = "Plan a batch of livestock. Provide species ('chicken eggs', 'chicken chicks', 'turkey chicks' or 'kunekune pigs'), start_date and end_date (YYYY-MM-DD) of the arrival or breeding range, and quantity (default 1). Omitting both dates uses the configured default range. Returns the birth/hatch window, processing date, total feed, 300lb barrel count, timeline and assumptions."
    )]
    async fn plan_batch(&self, Parameters(params): Parameters<PlanBatch>) -> McpResult {
        handlers::McpHandlers::new(self.settings).plan_batch(params)
    }

    #[tool(
        name = "plan_calendar",
        description = "Plan a batch (same parameters as plan_batch) and return add-to-calendar links for the birth/hatch window and the processing date."
    )]
    async fn plan_calendar(&self, Parameters(params): Parameters<PlanBatch>) -> McpResult {
        handlers::McpHandlers::new(self.settings).plan_calendar(params)
    }

    #[tool(
        name = "list_species",
        description = "List the supported species with their gestation/incubation days, weeks to processing and feed per animal."
    )]
    async fn list_species(&self) -> McpResult {
        handlers::McpHandlers::new(self.settings).list_species()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HomesteadMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "homestead".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Homestead plans small livestock batches: when animals are born or hatch, when they are ready for processing, how much feed they need and how many 300lb storage barrels that feed fills.

## Workflow
1. Use `list_species` to see the supported species and their assumptions
2. Call `plan_batch` with a species, the arrival or breeding date range and a quantity
3. Call `plan_calendar` with the same parameters for add-to-calendar links

## Notes
- Chicks arrive already hatched; growth is counted from the start of the range
- Eggs and pigs get a birth/hatch window; growth is counted from its last day
- Invalid species, inverted date ranges and quantities below 1 are rejected"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: HomesteadMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Homestead MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_registers_tools() {
        let server = HomesteadMcpServer::new(Settings::default());
        let names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();

        assert_eq!(names.len(), 3);
        for expected in ["plan_batch", "plan_calendar", "list_species"] {
            assert!(names.iter().any(|name| name == expected), "{expected}");
        }
    }

    #[test]
    fn test_server_info_names_homestead() {
        let info = HomesteadMcpServer::new(Settings::default()).get_info();
        assert_eq!(info.server_info.name, "homestead");
        assert!(info.instructions.unwrap().contains("plan_batch"));
    }
}
