//! Core library for the Homestead livestock planner.
//!
//! Given a species, an arrival or breeding date range and a head count, the
//! engine works out when the batch is born or hatched, when it is ready for
//! processing, how much feed it needs and how many storage barrels that feed
//! fills. Results are plain data; presentation lives in [`display`] and
//! calendar deep links in [`calendar`].
//!
//! # Quick Start
//!
//! ```rust
//! use homestead_core::{display::PlanReport, params::PlanBatch, planner};
//! use jiff::civil::date;
//!
//! let result = planner::plan_batch(&PlanBatch {
//!     species: "kunekune pigs".to_string(),
//!     start_date: Some(date(2025, 1, 1)),
//!     end_date: Some(date(2025, 1, 10)),
//!     quantity: 2,
//! })?;
//!
//! assert_eq!(result.total_feed_lbs(), 1300.0);
//! assert_eq!(result.barrels(), 5);
//! println!("{}", PlanReport::new(&result));
//! # Ok::<(), homestead_core::PlannerError>(())
//! ```

pub mod calendar;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod species;

// Re-export commonly used types
pub use calendar::{calendar_events, CalendarEvent};
pub use config::{Settings, SettingsBuilder};
pub use display::{Banner, CalendarLinks, PlanReport, SpeciesTable, Timeline};
pub use error::{PlannerError, Result};
pub use models::{BirthWindow, FeedStorage, Phase, PlanningRequest, PlanningResult, TimelineSegment};
pub use params::PlanBatch;
pub use planner::{plan, plan_batch};
pub use species::{Category, Species, SpeciesProfile, BARREL_CAPACITY_LBS};
