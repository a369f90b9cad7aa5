//! The planning engine.
//!
//! Every function here is pure: given the same profile and dates it returns
//! the same answer, touches no I/O and shares nothing but the read-only
//! species table. [`plan`] wires the steps together:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ compute_     │   │ compute_     │   │ compute_feed │   │ build_       │
//! │ window       │──▶│ processing_  │──▶│ _and_storage │──▶│ timeline     │
//! │              │   │ date         │   │              │   │              │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use homestead_core::{params::PlanBatch, planner};
//! use jiff::civil::date;
//!
//! let result = planner::plan_batch(&PlanBatch {
//!     species: "chicken eggs".to_string(),
//!     start_date: Some(date(2025, 3, 1)),
//!     end_date: Some(date(2025, 3, 8)),
//!     quantity: 1,
//! })?;
//!
//! assert_eq!(result.processing_date, date(2025, 5, 24));
//! assert_eq!(result.barrels(), 1);
//! assert_eq!(result.timeline.len(), 4);
//! # Ok::<(), homestead_core::PlannerError>(())
//! ```

use jiff::{civil::Date, Span};

use crate::{
    error::Result,
    models::{BirthWindow, FeedStorage, Phase, PlanningRequest, PlanningResult, TimelineSegment},
    params::PlanBatch,
    species::{SpeciesProfile, BARREL_CAPACITY_LBS},
};


fn add_days(date: Date, days: i64) -> Result<Date> {
    Ok(date.checked_add(Span::new().days(days))?)
}

/// Shift both ends of the range by the gestation or incubation period.
///
/// Returns `None` for species that arrive already born or hatched.
pub fn compute_window(
    profile: &SpeciesProfile,
    start: Date,
    end: Date,
) -> Result<Option<BirthWindow>> {
    if profile.gestation_days == 0 {
        return Ok(None);
    }

    let days = i64::from(profile.gestation_days);
    Ok(Some(BirthWindow {
        start: add_days(start, days)?,
        end: add_days(end, days)?,
    }))
}

/// Date the batch is ready for harvest when growth starts on `base`.
pub fn compute_processing_date(profile: &SpeciesProfile, base: Date) -> Result<Date> {
    add_days(base, 7 * i64::from(profile.weeks_to_processing))
}

/// Total feed for `quantity` animals and the barrels needed to hold it.
///
/// Any partial barrel rounds up to a whole one.
pub fn compute_feed_and_storage(profile: &SpeciesProfile, quantity: u32) -> FeedStorage {
    let total_feed_lbs = f64::from(quantity) * profile.feed_per_animal_lbs;
    let barrels = (total_feed_lbs / BARREL_CAPACITY_LBS).ceil() as u64;

    FeedStorage {
        total_feed_lbs,
        barrels,
    }
}

/// Lay out the batch's phases from already computed dates.
///
/// The development segment runs from the *end* of the intake range to the
/// end of the window, since the window already spans the whole intake range.
pub fn build_timeline(
    profile: &SpeciesProfile,
    start: Date,
    end: Date,
    window: Option<BirthWindow>,
    growth_start: Date,
    processing_date: Date,
) -> Vec<TimelineSegment> {
    let mut phases = vec![(profile.category.intake_phase(), start, Some(end))];

    if let Some(window) = window {
        phases.push((profile.category.development_phase(), end, Some(window.end)));
    }

    phases.push((Phase::Growing, growth_start, Some(processing_date)));
    phases.push((Phase::Processing, processing_date, None));

    phases
        .into_iter()
        .zip(1..)
        .map(|((label, start, end), id)| TimelineSegment {
            id,
            label,
            start,
            end,
        })
        .collect()
}

/// Run the engine for a validated request.
///
/// Growth is measured from the end of the birth window when there is one,
/// i.e. from the latest plausible birth in the batch, otherwise from the
/// start of the arrival range.
pub fn plan(request: &PlanningRequest) -> Result<PlanningResult> {
    let species = request.species();
    let profile = species.profile();
    let (start, end) = (request.start(), request.end());

    let window = compute_window(profile, start, end)?;
    let growth_start = match window {
        Some(window) => window.end,
        None => start,
    };
    let processing_date = compute_processing_date(profile, growth_start)?;
    let feed = compute_feed_and_storage(profile, request.quantity());
    let timeline = build_timeline(profile, start, end, window, growth_start, processing_date);

    Ok(PlanningResult {
        species,
        quantity: request.quantity(),
        window,
        growth_start,
        processing_date,
        feed,
        timeline,
    })
}

/// Validate raw parameters and run the engine.
///
/// Validation failures are returned before any date arithmetic happens.
pub fn plan_batch(params: &PlanBatch) -> Result<PlanningResult> {
    let request = params.validate()?;
    plan(&request)
}
