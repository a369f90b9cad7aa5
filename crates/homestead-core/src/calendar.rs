//! Google Calendar deep links.
//!
//! Builds "add to calendar" URLs from plan dates. Nothing here performs any
//! network access; the link is only a string.
//!
//! The link format (`action=TEMPLATE`, `text`, `dates=YYYYMMDD/YYYYMMDD`,
//! `details`) is a compatibility contract with Google Calendar and must not
//! change.

use jiff::civil::Date;
use serde::Serialize;

use crate::models::PlanningResult;

const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

/// An all-day event to offer as a calendar entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: Date,
    pub end: Date,
    pub description: String,
}

impl CalendarEvent {
    /// Google Calendar deep link that pre-fills a new event.
    ///
    /// Dates are written as `YYYYMMDD/YYYYMMDD` and every value is
    /// percent-encoded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use homestead_core::calendar::CalendarEvent;
    /// use jiff::civil::date;
    ///
    /// let event = CalendarEvent {
    ///     title: "Hatch Window".to_string(),
    ///     start: date(2025, 3, 22),
    ///     end: date(2025, 3, 29),
    ///     description: "12 eggs".to_string(),
    /// };
    /// assert_eq!(
    ///     event.link(),
    ///     "https://calendar.google.com/calendar/render?action=TEMPLATE\
    ///      &text=Hatch%20Window&dates=20250322%2F20250329&details=12%20eggs"
    /// );
    /// ```
    pub fn link(&self) -> String {
        let dates = format!("{}/{}", compact_date(self.start), compact_date(self.end));
        format!(
            "{GOOGLE_CALENDAR_URL}?action=TEMPLATE&text={}&dates={}&details={}",
            urlencoding::encode(&self.title),
            urlencoding::encode(&dates),
            urlencoding::encode(&self.description),
        )
    }
}

/// Format a date as `YYYYMMDD`.
pub fn compact_date(date: Date) -> String {
    date.strftime("%Y%m%d").to_string()
}

/// Events worth putting on a calendar for a plan.
///
/// The birth/hatch window comes first when the species has one, followed by
/// the processing day as a single-day event.
pub fn calendar_events(result: &PlanningResult) -> Vec<CalendarEvent> {
    let name = result.species.display_name();
    let profile = result.species.profile();
    let mut events = Vec::with_capacity(2);

    if let Some(window) = result.window {
        let phase = profile.category.development_phase();
        events.push(CalendarEvent {
            title: format!("{name}: Birth/Hatch Window"),
            start: window.start,
            end: window.end,
            description: format!(
                "{} ends for {} {}. Growth is measured from {}.",
                phase,
                result.quantity,
                result.species,
                result.growth_start
            ),
        });
    }

    events.push(CalendarEvent {
        title: format!("{name}: Processing"),
        start: result.processing_date,
        end: result.processing_date,
        description: format!(
            "Approximate processing date for {} {}. Total feed: {} lbs in {} barrel(s).",
            result.quantity,
            result.species,
            result.total_feed_lbs(),
            result.barrels()
        ),
    });

    events
}
