//! Timeline segments.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Named stage of a batch's life.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Arrival,
    Breeding,
    Gestation,
    Incubation,
    Growing,
    Processing,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Arrival => "Arrival",
            Phase::Breeding => "Breeding",
            Phase::Gestation => "Gestation",
            Phase::Incubation => "Incubation",
            Phase::Growing => "Growing",
            Phase::Processing => "Processing",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bar on the timeline.
///
/// `end` is `None` only for point events (processing day). Ids are sequential
/// from 1 and carry no meaning beyond list identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineSegment {
    pub id: u32,
    pub label: Phase,
    pub start: Date,
    pub end: Option<Date>,
}

impl TimelineSegment {
    /// Whether the segment is a single day rather than a span.
    pub fn is_point(&self) -> bool {
        self.end.is_none()
    }
}
