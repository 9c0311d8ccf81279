//! Drag-and-drop state machine for moving events on the week grid.
//!
//! A drag is begun from an event body, tracked against the grid geometry
//! while the pointer moves, and resolved on release. Releases over the
//! break hour do not commit directly; they park the move until the user
//! confirms or dismisses it.

use egui::{Pos2, Rect, Vec2};

use crate::models::event::{Event, EventId};
use crate::services::grid::conflict::{conflicts_with_any, TimeRange};
use crate::services::grid::{hour_slots, BREAK_HOUR, SLOT_COUNT, WORK_END_HOUR, WORK_START_HOUR};

/// Pointer travel below this is treated as a click, not a drag.
const CLICK_SLOP: f32 = 4.0;
/// Minute snapping granularity.
const SNAP_MINUTES: u8 = 15;

/// Geometry of the rendered grid body for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct GridMetrics {
    /// Screen rect covering the 7x24 cell area (no headers).
    pub rect: Rect,
    pub column_width: f32,
    pub row_height: f32,
}

impl GridMetrics {
    pub fn new(rect: Rect, row_height: f32) -> Self {
        Self {
            rect,
            column_width: rect.width() / 7.0,
            row_height,
        }
    }

    /// Resolve a pointer position to a day/hour/minute slot. Positions
    /// outside the grid clamp to the nearest cell; rows past the axis fall
    /// back to the 9 AM slot.
    pub fn slot_at(&self, pos: Pos2) -> SlotPosition {
        let local = pos - self.rect.min;
        let day = ((local.x / self.column_width).floor() as i64).clamp(0, 6) as u8;
        let row = (local.y / self.row_height).floor() as i64;

        let slots = hour_slots();
        let hour = if (0..SLOT_COUNT as i64).contains(&row) {
            slots[row as usize]
        } else {
            WORK_START_HOUR
        };

        let within = local.y.rem_euclid(self.row_height);
        let raw_minutes = (within / self.row_height * 60.0).round();
        let snapped = ((raw_minutes / SNAP_MINUTES as f32).round() as u32 * SNAP_MINUTES as u32)
            .min(60 - SNAP_MINUTES as u32) as u8;

        SlotPosition {
            day,
            hour,
            minutes: snapped,
        }
    }
}

/// A day/hour/minute cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPosition {
    pub day: u8,
    pub hour: u8,
    pub minutes: u8,
}

/// Where the dragged event would land if released now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub position: SlotPosition,
    pub valid: bool,
}

/// Live drag bookkeeping while the pointer button is held.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub event_id: EventId,
    pub duration_hours: u8,
    pub origin: Pos2,
    /// Slot the drag started from; a release back onto it is a click.
    pub origin_slot: SlotPosition,
    pub pointer: Pos2,
    /// Offset from the event rect's top-left to the grab point, so the
    /// preview follows the grab point rather than jumping to the corner.
    pub grab_offset: Vec2,
    pub candidate: Option<Candidate>,
    moved: bool,
}

/// A move that cleared every check except the break-hour gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingMove {
    pub event_id: EventId,
    pub position: SlotPosition,
}

#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
    BreakConfirmPending(PendingMove),
}

/// What a pointer release resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Nothing to do (no active drag, or mid-drag update).
    None,
    /// Event was repositioned.
    Moved {
        event_id: EventId,
        position: SlotPosition,
    },
    /// Pointer never travelled; treat as a click on the event.
    OpenDetail(EventId),
    /// Release landed on the break hour; awaiting user confirmation.
    AwaitingBreakConfirm(PendingMove),
    /// Invalid target, drag abandoned.
    Cancelled,
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn dragging_id(&self) -> Option<EventId> {
        match &self.state {
            DragState::Dragging(session) => Some(session.event_id),
            _ => None,
        }
    }

    pub fn pending_break(&self) -> Option<PendingMove> {
        match self.state {
            DragState::BreakConfirmPending(pending) => Some(pending),
            _ => None,
        }
    }

    /// Current candidate slot with validity, for preview painting.
    pub fn preview(&self) -> Option<Candidate> {
        match &self.state {
            DragState::Dragging(session) => session.candidate,
            _ => None,
        }
    }

    /// Start tracking a drag from an event body. Ignored while a break
    /// confirmation is still open.
    pub fn begin(&mut self, event: &Event, pointer: Pos2, grab_offset: Vec2, metrics: &GridMetrics) {
        if matches!(self.state, DragState::BreakConfirmPending(_)) {
            return;
        }
        self.state = DragState::Dragging(DragSession {
            event_id: event.id,
            duration_hours: event.duration_hours(),
            origin: pointer,
            origin_slot: metrics.slot_at(pointer),
            pointer,
            grab_offset,
            candidate: None,
            moved: false,
        });
    }

    /// Track pointer movement, recomputing the candidate slot.
    pub fn update(&mut self, pointer: Pos2, metrics: &GridMetrics, events: &[Event]) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };
        session.pointer = pointer;
        if (pointer - session.origin).length() > CLICK_SLOP {
            session.moved = true;
        }
        let position = metrics.slot_at(pointer);
        let valid = is_valid_target(position, session.event_id, session.duration_hours, events);
        session.candidate = Some(Candidate { position, valid });
    }

    /// Resolve a pointer release.
    pub fn release(&mut self, events: &[Event]) -> DragOutcome {
        let DragState::Dragging(session) = std::mem::take(&mut self.state) else {
            return DragOutcome::None;
        };

        if !session.moved {
            return DragOutcome::OpenDetail(session.event_id);
        }

        let Some(candidate) = session.candidate else {
            return DragOutcome::Cancelled;
        };
        // A release back onto the starting slot is a click, no matter how
        // much the pointer wandered inside the cell.
        if candidate.position == session.origin_slot {
            return DragOutcome::OpenDetail(session.event_id);
        }
        if !candidate.valid {
            return DragOutcome::Cancelled;
        }

        // Re-check at release time; the event list may have shifted since
        // the last pointer update.
        if !is_valid_target(
            candidate.position,
            session.event_id,
            session.duration_hours,
            events,
        ) {
            return DragOutcome::Cancelled;
        }

        if candidate.position.hour == BREAK_HOUR {
            let pending = PendingMove {
                event_id: session.event_id,
                position: candidate.position,
            };
            self.state = DragState::BreakConfirmPending(pending);
            return DragOutcome::AwaitingBreakConfirm(pending);
        }

        DragOutcome::Moved {
            event_id: session.event_id,
            position: candidate.position,
        }
    }

    /// User accepted dropping onto the break hour.
    pub fn confirm_break(&mut self) -> DragOutcome {
        let DragState::BreakConfirmPending(pending) = std::mem::take(&mut self.state) else {
            return DragOutcome::None;
        };
        DragOutcome::Moved {
            event_id: pending.event_id,
            position: pending.position,
        }
    }

    /// User declined the break-hour drop; the event stays put.
    pub fn dismiss_break(&mut self) -> DragOutcome {
        if matches!(self.state, DragState::BreakConfirmPending(_)) {
            self.state = DragState::Idle;
            return DragOutcome::Cancelled;
        }
        DragOutcome::None
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// A target is valid on a weekday, inside working hours, with no collision
/// against other events. The break hour passes here; release() gates it
/// behind confirmation separately.
pub fn is_valid_target(
    position: SlotPosition,
    event_id: EventId,
    duration_hours: u8,
    events: &[Event],
) -> bool {
    if position.day == 0 || position.day == 6 {
        return false;
    }
    if !(WORK_START_HOUR..WORK_END_HOUR).contains(&position.hour) {
        return false;
    }
    let range = TimeRange::new(position.day, position.hour, position.minutes, duration_hours);
    !conflicts_with_any(range, events, event_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventKind, EventSource};
    use egui::pos2;

    fn event(day: u8, start: u8, end: u8) -> Event {
        Event::new(day, start, end, "Standup", EventKind::Meeting, EventSource::Google).unwrap()
    }

    fn metrics() -> GridMetrics {
        GridMetrics::new(
            Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(700.0, 72.0 * 24.0)),
            72.0,
        )
    }

    fn drag_to(
        controller: &mut DragController,
        ev: &Event,
        target: Pos2,
        events: &[Event],
    ) -> DragOutcome {
        controller.begin(ev, pos2(150.0, 10.0), Vec2::ZERO, &metrics());
        controller.update(target, &metrics(), events);
        controller.release(events)
    }

    #[test]
    fn test_slot_at_maps_columns_and_rows() {
        let m = metrics();
        let slot = m.slot_at(pos2(250.0, 72.0 * 3.0 + 1.0));
        assert_eq!(slot.day, 2);
        assert_eq!(slot.hour, 12);
        assert_eq!(slot.minutes, 0);
    }

    #[test]
    fn test_slot_at_wraps_past_midnight() {
        let m = metrics();
        assert_eq!(m.slot_at(pos2(10.0, 72.0 * 15.0 + 1.0)).hour, 0);
        assert_eq!(m.slot_at(pos2(10.0, 72.0 * 23.0 + 1.0)).hour, 8);
    }

    #[test]
    fn test_slot_at_snaps_minutes_to_quarter_hours() {
        let m = metrics();
        // 20 minutes into the row snaps to :15.
        let y = 72.0 * 2.0 + 72.0 * (20.0 / 60.0);
        assert_eq!(m.slot_at(pos2(10.0, y)).minutes, 15);
        // Bottom edge of a row clamps to :45 instead of rolling to :60.
        let y = 72.0 * 3.0 - 0.5;
        assert_eq!(m.slot_at(pos2(10.0, y)).minutes, 45);
    }

    #[test]
    fn test_slot_at_clamps_outside_grid() {
        let m = metrics();
        let slot = m.slot_at(pos2(-50.0, -50.0));
        assert_eq!(slot.day, 0);
        assert_eq!(slot.hour, WORK_START_HOUR);
    }

    #[test]
    fn test_click_without_travel_opens_detail() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        controller.begin(&ev, pos2(150.0, 80.0), Vec2::ZERO, &metrics());
        controller.update(pos2(151.0, 81.0), &metrics(), &events);
        assert_eq!(controller.release(&events), DragOutcome::OpenDetail(ev.id));
    }

    #[test]
    fn test_release_on_origin_slot_opens_detail() {
        let ev = event(1, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        // 30px of travel, but still column 1 / row 1 at :00.
        controller.begin(&ev, pos2(110.0, 73.0), Vec2::ZERO, &metrics());
        controller.update(pos2(140.0, 73.0), &metrics(), &events);
        assert_eq!(controller.release(&events), DragOutcome::OpenDetail(ev.id));
        assert!(matches!(controller.state(), DragState::Idle));
    }

    #[test]
    fn test_valid_drop_moves_event() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        // Wednesday 11 AM.
        let outcome = drag_to(&mut controller, &ev, pos2(350.0, 72.0 * 2.0 + 1.0), &events);
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                event_id: ev.id,
                position: SlotPosition {
                    day: 3,
                    hour: 11,
                    minutes: 0
                },
            }
        );
        assert!(matches!(controller.state(), DragState::Idle));
    }

    #[test]
    fn test_weekend_drop_cancels() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        let outcome = drag_to(&mut controller, &ev, pos2(650.0, 72.0 * 2.0 + 1.0), &events);
        assert_eq!(outcome, DragOutcome::Cancelled);
    }

    #[test]
    fn test_after_hours_drop_cancels() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        // Row 9 is 6 PM, outside the working window.
        let outcome = drag_to(&mut controller, &ev, pos2(150.0, 72.0 * 9.0 + 1.0), &events);
        assert_eq!(outcome, DragOutcome::Cancelled);
    }

    #[test]
    fn test_overlapping_drop_cancels() {
        let ev = event(2, 10, 11);
        let blocker = event(3, 11, 12);
        let events = vec![ev.clone(), blocker];
        let mut controller = DragController::new();
        let outcome = drag_to(&mut controller, &ev, pos2(350.0, 72.0 * 2.0 + 1.0), &events);
        assert_eq!(outcome, DragOutcome::Cancelled);
    }

    #[test]
    fn test_break_hour_requires_confirmation() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        // Row 4 is 1 PM.
        let outcome = drag_to(&mut controller, &ev, pos2(150.0, 72.0 * 4.0 + 1.0), &events);
        let expected = PendingMove {
            event_id: ev.id,
            position: SlotPosition {
                day: 1,
                hour: 13,
                minutes: 0,
            },
        };
        assert_eq!(outcome, DragOutcome::AwaitingBreakConfirm(expected));
        assert_eq!(controller.pending_break(), Some(expected));

        assert_eq!(
            controller.confirm_break(),
            DragOutcome::Moved {
                event_id: ev.id,
                position: expected.position,
            }
        );
        assert!(matches!(controller.state(), DragState::Idle));
    }

    #[test]
    fn test_break_dismiss_leaves_event_in_place() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        drag_to(&mut controller, &ev, pos2(150.0, 72.0 * 4.0 + 1.0), &events);
        assert_eq!(controller.dismiss_break(), DragOutcome::Cancelled);
        assert!(matches!(controller.state(), DragState::Idle));
    }

    #[test]
    fn test_begin_ignored_while_break_pending() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let mut controller = DragController::new();
        drag_to(&mut controller, &ev, pos2(150.0, 72.0 * 4.0 + 1.0), &events);
        controller.begin(&ev, pos2(0.0, 0.0), Vec2::ZERO, &metrics());
        assert!(controller.pending_break().is_some());
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let mut controller = DragController::new();
        assert_eq!(controller.release(&[]), DragOutcome::None);
    }

    #[test]
    fn test_occupied_slot_freed_by_dragged_event_is_valid() {
        let ev = event(2, 10, 11);
        let events = vec![ev.clone()];
        let position = SlotPosition {
            day: 2,
            hour: 10,
            minutes: 0,
        };
        assert!(is_valid_target(position, ev.id, 1, &events));
    }
}
