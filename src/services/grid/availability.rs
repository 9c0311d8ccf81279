//! Free working hours per day.

use crate::models::event::Event;
use crate::services::grid::is_weekend;

/// Working hours per weekday before any meetings land.
pub const DAILY_CAPACITY: u8 = 8;

/// Remaining free hours for a day column. Weekends have none; weekdays
/// start at 8 and lose the whole-hour span of every busy event, floored
/// at zero. Available-marked events do not consume capacity.
pub fn available_hours(day: u8, events: &[Event]) -> u8 {
    if is_weekend(day) {
        return 0;
    }
    let busy: u32 = events
        .iter()
        .filter(|event| event.day == day && event.is_busy())
        .map(|event| event.duration_hours() as u32)
        .sum();
    (DAILY_CAPACITY as u32).saturating_sub(busy) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventKind, EventSource, EventStatus};

    fn event(day: u8, start: u8, end: u8) -> Event {
        Event::new(day, start, end, "Busy", EventKind::Meeting, EventSource::Google).unwrap()
    }

    #[test]
    fn test_empty_weekday_has_full_capacity() {
        assert_eq!(available_hours(3, &[]), 8);
    }

    #[test]
    fn test_weekends_have_no_capacity() {
        let events = vec![event(0, 10, 11)];
        assert_eq!(available_hours(0, &events), 0);
        assert_eq!(available_hours(6, &[]), 0);
    }

    #[test]
    fn test_busy_hours_reduce_capacity() {
        let events = vec![event(2, 9, 10), event(2, 14, 16)];
        assert_eq!(available_hours(2, &events), 5);
    }

    #[test]
    fn test_other_days_do_not_count() {
        let events = vec![event(1, 9, 17)];
        assert_eq!(available_hours(2, &events), 8);
    }

    #[test]
    fn test_available_status_does_not_consume() {
        let events = vec![event(4, 9, 12).with_status(EventStatus::Available)];
        assert_eq!(available_hours(4, &events), 8);
    }

    #[test]
    fn test_floors_at_zero() {
        let events = vec![event(5, 9, 18), event(5, 9, 12)];
        assert_eq!(available_hours(5, &events), 0);
    }
}
