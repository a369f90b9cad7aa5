//! Planning result bundle.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{BirthWindow, FeedStorage, TimelineSegment};
use crate::species::Species;

/// Everything the engine derives for a batch.
///
/// Recomputed on every request and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanningResult {
    pub species: Species,
    pub quantity: u32,
    /// Present only for species that are bred or incubated on site.
    pub window: Option<BirthWindow>,
    /// Day growth is measured from: window end, or the range start.
    pub growth_start: Date,
    pub processing_date: Date,
    pub feed: FeedStorage,
    pub timeline: Vec<TimelineSegment>,
}

impl PlanningResult {
    pub fn total_feed_lbs(&self) -> f64 {
        self.feed.total_feed_lbs
    }

    pub fn barrels(&self) -> u64 {
        self.feed.barrels
    }
}
