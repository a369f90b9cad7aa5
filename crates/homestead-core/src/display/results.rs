//! Full plan report.

use std::fmt;

use super::{collections::Timeline, status::Banner};
use crate::{models::PlanningResult, species::BARREL_CAPACITY_LBS};

/// Markdown report for a computed plan.
///
/// Sections, in order: title, banners, metrics, timeline, assumptions.
///
/// # Examples
///
/// ```rust
/// use homestead_core::{display::PlanReport, params::PlanBatch, planner};
/// use jiff::civil::date;
///
/// let result = planner::plan_batch(&PlanBatch {
///     species: "turkey chicks".to_string(),
///     start_date: Some(date(2025, 4, 1)),
///     end_date: Some(date(2025, 4, 5)),
///     quantity: 10,
/// })?;
///
/// let output = PlanReport::new(&result).to_string();
/// assert!(output.contains("Arrival: Immediate start (already hatched)."));
/// assert!(output.contains("Starting around 2025-08-05"));
/// assert!(output.contains("- **300lb Barrels**: 3"));
/// # Ok::<(), homestead_core::PlannerError>(())
/// ```
pub struct PlanReport<'a> {
    pub result: &'a PlanningResult,
}

impl<'a> PlanReport<'a> {
    pub fn new(result: &'a PlanningResult) -> Self {
        Self { result }
    }

    /// Headline messages: the birth window (or immediate arrival) and the
    /// processing date.
    pub fn banners(&self) -> Vec<Banner> {
        let window = match self.result.window {
            Some(window) => Banner::info(format!(
                "Estimated Birth/Hatch Window: {} to {}",
                window.start, window.end
            )),
            None => Banner::info("Arrival: Immediate start (already hatched)."),
        };

        vec![
            window,
            Banner::success(format!(
                "Approximate Processing Date: Starting around {}",
                self.result.processing_date
            )),
        ]
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        let profile = result.species.profile();

        writeln!(
            f,
            "# Plan: {} {}",
            result.quantity,
            result.species.display_name()
        )?;
        writeln!(f)?;

        for banner in self.banners() {
            write!(f, "{banner}")?;
        }

        writeln!(f, "\n## Metrics")?;
        writeln!(f)?;
        writeln!(f, "- **Total Feed Needed**: {} lbs", result.total_feed_lbs())?;
        writeln!(f, "- **300lb Barrels**: {}", result.barrels())?;

        writeln!(f, "\n## Timeline")?;
        writeln!(f)?;
        write!(f, "{}", Timeline(&result.timeline))?;

        writeln!(f, "\n## Assumptions")?;
        writeln!(f)?;
        writeln!(f, "- **Species**: {}", result.species.display_name())?;
        writeln!(f, "- **Gestation/Incubation**: {} days", profile.gestation_days)?;
        writeln!(f, "- **Time to Maturity**: {} weeks", profile.weeks_to_processing)?;
        writeln!(
            f,
            "- **Estimated Grain per Animal**: {} lbs",
            profile.feed_per_animal_lbs
        )?;
        writeln!(
            f,
            "- **Storage Capacity**: {} lbs per barrel",
            BARREL_CAPACITY_LBS
        )?;

        if let Some(note) = profile.note {
            writeln!(f)?;
            writeln!(f, "*Note: {note}*")?;
        }

        Ok(())
    }
}
