// Integration tests for the week pipeline: mock generation, grid layout,
// drag commits, and the availability footer numbers.

mod fixtures;

use egui::{pos2, vec2, Rect, Vec2};
use pretty_assertions::assert_eq;

use slotweek::services::grid::availability::available_hours;
use slotweek::services::grid::drag::{DragController, DragOutcome, GridMetrics, SlotPosition};
use slotweek::services::grid::layout::place;
use slotweek::services::grid::{hour_slots, week_days};
use slotweek::services::mock::events_for_week;

fn metrics() -> GridMetrics {
    GridMetrics::new(
        Rect::from_min_size(pos2(0.0, 0.0), vec2(700.0, 72.0 * 24.0)),
        72.0,
    )
}

#[test]
fn test_generated_week_lays_out_on_the_grid() {
    let anchor = fixtures::dates::first_week_2025();
    let events = events_for_week(anchor, "Asia/Karachi");
    assert!(!events.is_empty());

    let placed = place(&events);
    assert_eq!(placed.len(), events.len());

    let slots = hour_slots();
    for placement in &placed {
        assert!(placement.column <= 6);
        let hour = slots[placement.row];
        assert!((9..18).contains(&hour));
    }
}

#[test]
fn test_week_days_cover_generated_events() {
    let anchor = fixtures::dates::second_week_2025();
    let days = week_days(anchor);
    assert!(days.contains(&anchor));

    // Every mock event day index maps onto one of the seven columns.
    for event in events_for_week(anchor, "Asia/Karachi") {
        assert!((event.day as usize) < days.len());
    }
}

#[test]
fn test_drag_commit_updates_availability() {
    let mut events = vec![fixtures::events::monday_sync()];
    let id = events[0].id;
    assert_eq!(available_hours(1, &events), 7);

    let mut controller = DragController::new();
    controller.begin(&events[0], pos2(150.0, 80.0), Vec2::ZERO, &metrics());
    // Drop on Wednesday 10 AM (column 3, row 1).
    controller.update(pos2(350.0, 72.0 + 1.0), &metrics(), &events);
    let outcome = controller.release(&events);

    match outcome {
        DragOutcome::Moved { event_id, position } => {
            assert_eq!(event_id, id);
            assert_eq!(
                position,
                SlotPosition {
                    day: 3,
                    hour: 10,
                    minutes: 0
                }
            );
            let duration = events[0].end_hour - events[0].start_hour;
            events[0].move_to(position.day, position.hour, position.minutes);
            assert_eq!(events[0].end_hour - events[0].start_hour, duration);
        }
        other => panic!("expected a committed move, got {:?}", other),
    }

    assert_eq!(available_hours(1, &events), 8);
    assert_eq!(available_hours(3, &events), 7);
}

#[test]
fn test_break_drop_round_trip() {
    let events = vec![fixtures::events::friday_review()];
    let id = events[0].id;

    let mut controller = DragController::new();
    controller.begin(&events[0], pos2(550.0, 80.0), Vec2::ZERO, &metrics());
    // 1 PM on Thursday (column 4, row 4).
    controller.update(pos2(450.0, 72.0 * 4.0 + 1.0), &metrics(), &events);

    match controller.release(&events) {
        DragOutcome::AwaitingBreakConfirm(pending) => {
            assert_eq!(pending.event_id, id);
            assert_eq!(pending.position.hour, 13);
        }
        other => panic!("expected a break confirmation request, got {:?}", other),
    }

    match controller.confirm_break() {
        DragOutcome::Moved { position, .. } => assert_eq!(position.day, 4),
        other => panic!("expected the confirmed move, got {:?}", other),
    }
}

#[test]
fn test_packed_day_has_no_availability() {
    let events = fixtures::events::packed_tuesday();
    assert_eq!(available_hours(2, &events), 0);

    // The packed day blocks drops into its occupied window.
    let mover = fixtures::events::monday_sync();
    let mut all = events;
    all.push(mover.clone());

    let mut controller = DragController::new();
    controller.begin(&mover, pos2(150.0, 80.0), Vec2::ZERO, &metrics());
    // Tuesday 10 AM collides with the 9-12 block.
    controller.update(pos2(250.0, 72.0 + 1.0), &metrics(), &all);
    assert_eq!(controller.release(&all), DragOutcome::Cancelled);
}

#[test]
fn test_timezone_switch_regenerates_consistent_week() {
    let anchor = fixtures::dates::third_week_2025();
    let reference = events_for_week(anchor, "Asia/Karachi");
    let eastern = events_for_week(anchor, "America/New_York");

    assert_eq!(reference.len(), eastern.len());
    for (a, b) in reference.iter().zip(eastern.iter()) {
        assert_eq!(a.title, b.title);
        assert_eq!(a.day, b.day);
        assert_eq!(a.time_label, b.time_label);
        // The mapped hours differ but the span stays positive.
        assert!(b.end_hour > b.start_hour);
    }
}
