// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::NaiveDate;

use slotweek::models::event::{Event, EventKind, EventSource};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// A Wednesday in the first week of 2025
    pub fn first_week_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// A Thursday in the second week of 2025
    pub fn second_week_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
    }

    /// A Friday in the third week of 2025
    pub fn third_week_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A one-hour Monday morning meeting
    pub fn monday_sync() -> Event {
        Event::new(1, 9, 10, "Morning Sync", EventKind::Meeting, EventSource::Google).unwrap()
    }

    /// A two-hour Wednesday workshop
    pub fn wednesday_workshop() -> Event {
        Event::new(
            3,
            14,
            16,
            "Design Workshop",
            EventKind::Workshop,
            EventSource::Iclosed,
        )
        .unwrap()
    }

    /// An afternoon review on Friday
    pub fn friday_review() -> Event {
        Event::new(5, 15, 16, "Code Review", EventKind::Review, EventSource::Google).unwrap()
    }

    /// A full busy weekday: three events totalling 8 hours on Tuesday
    pub fn packed_tuesday() -> Vec<Event> {
        vec![
            Event::new(2, 9, 12, "Deep Work", EventKind::Session, EventSource::Google).unwrap(),
            Event::new(2, 12, 15, "Workshop", EventKind::Workshop, EventSource::Iclosed).unwrap(),
            Event::new(2, 16, 18, "Late Review", EventKind::Review, EventSource::Google).unwrap(),
        ]
    }
}
