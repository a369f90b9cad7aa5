//! Command handlers and their clap argument wrappers.
//!
//! Argument structures carry clap-specific attributes and convert into the
//! interface-agnostic [`PlanBatch`] before reaching the engine:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planning Engine
//! ```

use anyhow::{Context, Result};
use clap::Args;
use homestead_core::{
    calendar_events, planner, Banner, CalendarLinks, PlanBatch, PlanReport, Settings,
    SpeciesTable,
};
use jiff::{civil::Date, Zoned};
use log::{debug, info};
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// Plan a batch of animals
///
/// When neither --start nor --end is given, the range defaults to one week
/// starting a week from today (configurable through the settings file).
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Species key, e.g. "chicken eggs" or kunekune-pigs
    #[arg(help = "Species key: chicken eggs, chicken chicks, turkey chicks, kunekune pigs")]
    pub species: String,
    /// First day of the arrival or breeding range
    #[arg(long, help = "First day of the arrival or breeding range (YYYY-MM-DD)")]
    pub start: Option<Date>,
    /// Last day of the arrival or breeding range
    #[arg(long, help = "Last day of the arrival or breeding range (YYYY-MM-DD)")]
    pub end: Option<Date>,
    /// Number of animals in the batch
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "Number of animals in the batch (defaults to the configured quantity)"
    )]
    pub quantity: Option<i64>,
    /// Print the result as JSON instead of a report
    #[arg(long, help = "Print the result as JSON instead of a markdown report")]
    pub json: bool,
    /// Append calendar links for the key dates
    #[arg(long, help = "Append add-to-calendar links for the key dates")]
    pub calendar: bool,
}

impl PlanArgs {
    /// Convert CLI arguments to core parameters, filling gaps from settings.
    fn into_params(self, settings: &Settings, today: Date) -> Result<PlanBatch> {
        let params = PlanBatch {
            species: self.species,
            start_date: self.start,
            end_date: self.end,
            quantity: self.quantity.unwrap_or(settings.quantity),
        };
        settings
            .apply_default_range(params, today)
            .context("Failed to compute the default date range")
    }
}

/// Runs CLI commands against the planning engine.
pub struct Cli {
    settings: Settings,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(settings: Settings, renderer: TerminalRenderer) -> Self {
        Self { settings, renderer }
    }

    /// Plan a batch and print the report, or JSON with `--json`.
    pub fn plan(&self, args: PlanArgs) -> Result<()> {
        let (as_json, with_calendar) = (args.json, args.calendar);
        let params = args.into_params(&self.settings, Zoned::now().date())?;
        debug!("plan: {:?}", params);

        let result = match planner::plan_batch(&params) {
            Ok(result) => result,
            Err(e) if e.is_validation() => {
                self.renderer.render(&Banner::warning(e.to_string()).to_string())?;
                return Err(e).context("Planning request rejected");
            }
            Err(e) => return Err(e).context("Failed to plan batch"),
        };
        info!(
            "Planned {} {} through {}",
            result.quantity, result.species, result.processing_date
        );

        let events = calendar_events(&result);

        if as_json {
            let output = if with_calendar {
                let links: Vec<_> = events
                    .iter()
                    .map(|event| json!({ "title": event.title, "link": event.link() }))
                    .collect();
                json!({ "plan": result, "calendar": links })
            } else {
                serde_json::to_value(&result).context("Failed to serialize plan")?
            };
            let text = serde_json::to_string_pretty(&output).context("Failed to serialize plan")?;
            println!("{text}");
            return Ok(());
        }

        let mut markdown = PlanReport::new(&result).to_string();
        if with_calendar {
            markdown.push('\n');
            markdown.push_str(&CalendarLinks(&events).to_string());
        }
        self.renderer.render(&markdown)
    }

    /// Print the species table.
    pub fn list_species(&self) -> Result<()> {
        self.renderer.render(&SpeciesTable::all().to_string())
    }
}
