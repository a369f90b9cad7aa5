//! Error handling utilities for MCP server

use homestead_core::PlannerError;
use rmcp::ErrorData;

/// Helper to convert planner errors to MCP errors
///
/// Rejected input maps to `invalid_params` so the client can correct the
/// request; anything else is an internal error.
pub fn to_mcp_error(message: &str, error: &PlannerError) -> ErrorData {
    let text = format!("{}: {}", message, error);
    if error.is_validation() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
