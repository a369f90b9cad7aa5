//! Display formatting wrappers.
//!
//! Domain models stay free of presentation; this module provides newtype
//! wrappers implementing [`std::fmt::Display`] that produce markdown for the
//! terminal renderer and the MCP server alike.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (PlanningResult)│───▶│ (PlanReport,    │───▶│    Output       │
//! │                 │    │  Timeline, ...) │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`results`]: the full plan report
//! - [`collections`]: timeline, species and calendar link lists
//! - [`status`]: info, success and warning banners

pub mod collections;
pub mod results;
pub mod status;

pub use collections::{CalendarLinks, SpeciesTable, Timeline};
pub use results::PlanReport;
pub use status::{Banner, BannerKind};
