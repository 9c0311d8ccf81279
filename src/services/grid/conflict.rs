//! Overlap checks between a candidate time range and existing events.

use crate::models::event::{Event, EventId};

/// A candidate occupancy on a single day, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub day: u8,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl TimeRange {
    pub fn new(day: u8, start_hour: u8, start_minutes: u8, duration_hours: u8) -> Self {
        let start = start_hour as u32 * 60 + start_minutes as u32;
        Self {
            day,
            start_minutes: start,
            end_minutes: start + duration_hours as u32 * 60,
        }
    }
}

/// Half-open interval overlap on the same day.
pub fn overlaps(range: TimeRange, event: &Event) -> bool {
    event.day == range.day
        && range.start_minutes < event.end_total_minutes()
        && range.end_minutes > event.start_total_minutes()
}

/// Whether the range collides with any event other than `exclude` (the one
/// being dragged).
pub fn conflicts_with_any(range: TimeRange, events: &[Event], exclude: EventId) -> bool {
    events
        .iter()
        .filter(|event| event.id != exclude)
        .any(|event| overlaps(range, event))
}
