//! Birth/hatch window and feed totals.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Dates between which the batch is expected to be born or hatched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BirthWindow {
    pub start: Date,
    pub end: Date,
}

/// Feed required for the whole batch and the barrels to store it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeedStorage {
    pub total_feed_lbs: f64,
    pub barrels: u64,
}
