//! Data models for planning requests and results.
//!
//! Display implementations for these models live in [`crate::display`] to
//! keep data structures separate from presentation.
//!
//! # Examples
//!
//! ```rust
//! use homestead_core::models::{Phase, TimelineSegment};
//! use jiff::civil::date;
//!
//! let processing = TimelineSegment {
//!     id: 4,
//!     label: Phase::Processing,
//!     start: date(2025, 5, 24),
//!     end: None,
//! };
//! assert!(processing.is_point());
//! assert_eq!(processing.label.to_string(), "Processing");
//! ```

pub mod request;
pub mod result;
pub mod timeline;
pub mod window;


pub use request::PlanningRequest;
pub use result::PlanningResult;
pub use timeline::{Phase, TimelineSegment};
pub use window::{BirthWindow, FeedStorage};
