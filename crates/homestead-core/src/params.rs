//! Parameter structures for Homestead operations
//!
//! These structures are shared by the CLI and the MCP server without
//! framework-specific derives. Interface layers build a [`PlanBatch`] from
//! their own argument types and hand it to the engine, which validates it
//! into a [`PlanningRequest`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is available behind the `schema` feature so that
//! only the MCP server pays for it.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::PlannerError, models::PlanningRequest, species::Species};

fn default_quantity() -> i64 {
    1
}

/// Parameters for planning a batch of animals.
///
/// Everything is kept in its raw form (species as text, dates optional,
/// quantity signed) so that the same validation runs for every interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanBatch {
    /// Species key: 'chicken eggs', 'chicken chicks', 'turkey chicks' or
    /// 'kunekune pigs'
    pub species: String,
    /// First day of the arrival or breeding range (YYYY-MM-DD)
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub start_date: Option<Date>,
    /// Last day of the arrival or breeding range (YYYY-MM-DD)
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub end_date: Option<Date>,
    /// Number of animals in the batch
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

impl PlanBatch {
    /// Validate the parameters into a request the engine can run.
    ///
    /// Checks run in order: species, date range, quantity. The first
    /// failure is returned and nothing is computed.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidSpecies` - When the key is not in the table
    /// * `PlannerError::InvalidDateRange` - When a date is missing or the
    ///   range is inverted
    /// * `PlannerError::InvalidQuantity` - When quantity is below 1
    ///
    /// # Examples
    ///
    /// ```rust
    /// use homestead_core::params::PlanBatch;
    /// use jiff::civil::date;
    ///
    /// let params = PlanBatch {
    ///     species: "turkey chicks".to_string(),
    ///     start_date: Some(date(2025, 4, 1)),
    ///     end_date: Some(date(2025, 4, 5)),
    ///     quantity: 10,
    /// };
    /// let request = params.validate()?;
    /// assert_eq!(request.quantity(), 10);
    ///
    /// let missing_end = PlanBatch { end_date: None, ..params };
    /// assert!(missing_end.validate().is_err());
    /// # Ok::<(), homestead_core::PlannerError>(())
    /// ```
    pub fn validate(&self) -> crate::Result<PlanningRequest> {
        let species: Species = self.species.parse()?;

        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(PlannerError::invalid_range(
                "both a start date and an end date are required",
            ));
        };

        PlanningRequest::new(species, start, end, self.quantity)
    }
}
