//! MCP tool handlers implementation

use homestead_core::{
    calendar_events, params as core, planner, CalendarLinks, PlanReport, PlanningResult,
    Settings, SpeciesTable,
};
use jiff::Zoned;
use log::debug;
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// The wrapper adds MCP-specific derives (Deserialize, JsonSchema) around a
// core parameter type. #[serde(transparent)] passes the JSON straight through
// to the wrapped type so the core stays free of protocol concerns.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type PlanBatch = McpParams<core::PlanBatch>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    settings: Settings,
}

impl McpHandlers {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn run(&self, params: PlanBatch) -> Result<PlanningResult, ErrorData> {
        let params = self
            .settings
            .apply_default_range(params.into_inner(), Zoned::now().date())
            .map_err(|e| to_mcp_error("Failed to compute the default date range", &e))?;
        debug!("plan_batch: {:?}", params);

        planner::plan_batch(&params).map_err(|e| to_mcp_error("Failed to plan batch", &e))
    }

    pub fn plan_batch(&self, params: PlanBatch) -> McpResult {
        let result = self.run(params)?;
        Ok(CallToolResult::success(vec![Content::text(
            PlanReport::new(&result).to_string(),
        )]))
    }

    pub fn plan_calendar(&self, params: PlanBatch) -> McpResult {
        let result = self.run(params)?;
        let events = calendar_events(&result);
        Ok(CallToolResult::success(vec![Content::text(
            CalendarLinks(&events).to_string(),
        )]))
    }

    pub fn list_species(&self) -> McpResult {
        Ok(CallToolResult::success(vec![Content::text(
            SpeciesTable::all().to_string(),
        )]))
    }
}
