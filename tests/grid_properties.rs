// Property-based tests for the hour mapper and the grid math.

use egui::{pos2, vec2, Rect};
use proptest::prelude::*;

use slotweek::models::event::{Event, EventKind, EventSource};
use slotweek::services::grid::availability::available_hours;
use slotweek::services::grid::conflict::{overlaps, TimeRange};
use slotweek::services::grid::drag::GridMetrics;
use slotweek::services::grid::{hour_slots, slot_row_for_hour};
use slotweek::services::timezone::{display_hour, is_americas_zone};

const ZONES: [&str; 12] = [
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Sao_Paulo",
    "Asia/Karachi",
    "Asia/Kolkata",
    "Europe/London",
    "Europe/Berlin",
    "Australia/Sydney",
    "Africa/Cairo",
    "Asia/Dubai",
];

fn any_zone() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ZONES.as_slice())
}

proptest! {
    /// The mapped hour stays inside the zone family's display window and
    /// never lands on the break hour.
    #[test]
    fn prop_display_hour_window(hour in 0..24u8, zone in any_zone()) {
        let mapped = display_hour(hour, zone);
        prop_assert_ne!(mapped, 13);
        if is_americas_zone(zone) {
            prop_assert!((8..=18).contains(&mapped));
        } else {
            prop_assert!((9..=16).contains(&mapped));
        }
    }

    /// Mapping is deterministic.
    #[test]
    fn prop_display_hour_deterministic(hour in 0..24u8, zone in any_zone()) {
        prop_assert_eq!(display_hour(hour, zone), display_hour(hour, zone));
    }

    /// Overlap against an event is symmetric in the two time spans.
    #[test]
    fn prop_overlap_symmetry(
        day in 0..7u8,
        a_start in 9..17u8,
        a_len in 1..3u8,
        b_start in 9..17u8,
        b_len in 1..3u8,
    ) {
        let a = Event::new(
            day,
            a_start,
            (a_start + a_len).min(18),
            "A",
            EventKind::Meeting,
            EventSource::Google,
        ).unwrap();
        let b = Event::new(
            day,
            b_start,
            (b_start + b_len).min(18),
            "B",
            EventKind::Review,
            EventSource::Google,
        ).unwrap();

        let range_a = TimeRange::new(day, a.start_hour, 0, a.end_hour - a.start_hour);
        let range_b = TimeRange::new(day, b.start_hour, 0, b.end_hour - b.start_hour);
        prop_assert_eq!(overlaps(range_a, &b), overlaps(range_b, &a));
    }

    /// Any pointer position resolves to a real grid slot with quarter-hour
    /// minutes.
    #[test]
    fn prop_slot_at_is_always_on_grid(x in -200.0..2000.0f32, y in -200.0..3000.0f32) {
        let metrics = GridMetrics::new(
            Rect::from_min_size(pos2(0.0, 0.0), vec2(700.0, 72.0 * 24.0)),
            72.0,
        );
        let slot = metrics.slot_at(pos2(x, y));
        prop_assert!(slot.day <= 6);
        prop_assert!(hour_slots().contains(&slot.hour));
        prop_assert!(matches!(slot.minutes, 0 | 15 | 30 | 45));
    }

    /// Row lookup inverts the hour axis for every hour.
    #[test]
    fn prop_slot_rows_round_trip(hour in 0..24u8) {
        let row = slot_row_for_hour(hour);
        prop_assert!(row < 24);
        prop_assert_eq!(hour_slots()[row], hour);
    }

    /// Availability is always within the daily capacity.
    #[test]
    fn prop_availability_bounded(
        day in 0..7u8,
        starts in prop::collection::vec(9..16u8, 0..4),
    ) {
        let events: Vec<Event> = starts
            .iter()
            .map(|&start| {
                Event::new(day, start, start + 2, "Busy", EventKind::Meeting, EventSource::Google)
                    .unwrap()
            })
            .collect();
        let free = available_hours(day, &events);
        prop_assert!(free <= 8);
        if day == 0 || day == 6 {
            prop_assert_eq!(free, 0);
        }
    }
}
