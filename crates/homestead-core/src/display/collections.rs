//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::{calendar::CalendarEvent, models::TimelineSegment, species::Species};

/// Newtype wrapper rendering timeline segments as a markdown table.
///
/// Point events show `-` in the end column.
///
/// # Examples
///
/// ```rust
/// use homestead_core::{
///     display::Timeline,
///     models::{Phase, TimelineSegment},
/// };
/// use jiff::civil::date;
///
/// let segments = vec![TimelineSegment {
///     id: 1,
///     label: Phase::Processing,
///     start: date(2025, 5, 24),
///     end: None,
/// }];
/// let output = Timeline(&segments).to_string();
/// assert!(output.contains("| 1 | Processing | 2025-05-24 | - |"));
/// ```
pub struct Timeline<'a>(pub &'a [TimelineSegment]);

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No timeline segments.");
        }

        writeln!(f, "| # | Phase | Start | End |")?;
        writeln!(f, "|---|-------|-------|-----|")?;
        for segment in self.0 {
            match segment.end {
                Some(end) => writeln!(
                    f,
                    "| {} | {} | {} | {} |",
                    segment.id, segment.label, segment.start, end
                )?,
                None => writeln!(
                    f,
                    "| {} | {} | {} | - |",
                    segment.id, segment.label, segment.start
                )?,
            }
        }
        Ok(())
    }
}

/// Newtype wrapper listing every species with its profile.
pub struct SpeciesTable<'a>(pub &'a [Species]);

impl SpeciesTable<'static> {
    /// Table of the whole species catalogue.
    pub fn all() -> Self {
        Self(&Species::ALL)
    }
}

impl fmt::Display for SpeciesTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Species")?;
        writeln!(f)?;
        writeln!(
            f,
            "| Key | Gestation/Incubation | Time to Maturity | Feed per Animal | Dates Asked For |"
        )?;
        writeln!(f, "|-----|------|-------|------|------|")?;
        for species in self.0 {
            let profile = species.profile();
            writeln!(
                f,
                "| {} | {} days | {} weeks | {} lbs | {} |",
                species.key(),
                profile.gestation_days,
                profile.weeks_to_processing,
                profile.feed_per_animal_lbs,
                profile.category.date_prompt()
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper listing calendar deep links.
pub struct CalendarLinks<'a>(pub &'a [CalendarEvent]);

impl fmt::Display for CalendarLinks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Calendar")?;
        writeln!(f)?;
        for event in self.0 {
            writeln!(f, "- **{}**: {}", event.title, event.link())?;
        }
        Ok(())
    }
}
