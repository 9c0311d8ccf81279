//! Maps events onto grid cells.

use crate::models::event::{Event, EventId};
use crate::services::grid::{slot_row_for_hour, WORK_END_HOUR, WORK_START_HOUR};

/// An event resolved to its grid position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEvent {
    pub event_id: EventId,
    /// Day column, 0 = Sunday.
    pub column: usize,
    /// Row on the hour axis.
    pub row: usize,
    /// Offset within the starting row, in minutes.
    pub minute_offset: u8,
    /// Vertical extent in whole slots, at least 1.
    pub height_slots: u8,
}

/// Places every event that starts inside the working window. Events outside
/// 9 AM - 6 PM are not drawn; they still count for conflicts and
/// availability elsewhere.
pub fn place(events: &[Event]) -> Vec<PlacedEvent> {
    events
        .iter()
        .filter(|event| (WORK_START_HOUR..WORK_END_HOUR).contains(&event.start_hour))
        .map(|event| PlacedEvent {
            event_id: event.id,
            column: event.day as usize,
            row: slot_row_for_hour(event.start_hour),
            minute_offset: event.start_minutes,
            height_slots: event.duration_hours().max(1),
        })
        .collect()
}
