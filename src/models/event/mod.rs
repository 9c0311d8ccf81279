// Event module
// Calendar entry model for the week grid

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::utils::date::format_time_label;

static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier assigned at creation and used for all lookups and
/// mutations. Two events sharing a day, hour, and title remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(u64);

impl EventId {
    fn next() -> Self {
        Self(NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event day must be 0-6, got {0}")]
    DayOutOfRange(u8),
    #[error("Event end ({end_hour}:{end_minutes:02}) must be after start ({start_hour}:{start_minutes:02})")]
    EndBeforeStart {
        start_hour: u8,
        start_minutes: u8,
        end_hour: u8,
        end_minutes: u8,
    },
}

/// Category label for an event. Controls color and icon grouping only; the
/// scheduling rules are agnostic to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Meeting,
    Review,
    Planning,
    Workshop,
    Session,
    Triage,
    Lunch,
    Demo,
    Retro,
    Talk,
    Other,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
            EventKind::Review => "review",
            EventKind::Planning => "planning",
            EventKind::Workshop => "workshop",
            EventKind::Session => "session",
            EventKind::Triage => "triage",
            EventKind::Lunch => "lunch",
            EventKind::Demo => "demo",
            EventKind::Retro => "retro",
            EventKind::Talk => "talk",
            EventKind::Other => "other",
        }
    }
}

/// Busy events consume availability; available ones do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Busy,
    Available,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Busy => "Busy",
            EventStatus::Available => "Available",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            EventStatus::Busy => EventStatus::Available,
            EventStatus::Available => EventStatus::Busy,
        }
    }
}

/// Where an event came from. Drives popup variant and styling, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Google,
    Iclosed,
}

/// A single entry on the week grid.
///
/// Hours live in the displayed-timezone hour space; `day` is week-relative
/// (0 = Sunday), not an absolute date.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub day: u8,
    pub start_hour: u8,
    pub start_minutes: u8,
    pub end_hour: u8,
    pub end_minutes: u8,
    pub title: String,
    pub kind: EventKind,
    pub status: EventStatus,
    pub source: EventSource,
    /// Display time range, kept alongside the numeric fields and recomputed
    /// whenever the event is moved.
    pub time_label: String,
}

impl Event {
    pub fn new(
        day: u8,
        start_hour: u8,
        end_hour: u8,
        title: impl Into<String>,
        kind: EventKind,
        source: EventSource,
    ) -> Result<Self, EventError> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        if day > 6 {
            return Err(EventError::DayOutOfRange(day));
        }
        if end_hour <= start_hour {
            return Err(EventError::EndBeforeStart {
                start_hour,
                start_minutes: 0,
                end_hour,
                end_minutes: 0,
            });
        }

        Ok(Self {
            id: EventId::next(),
            day,
            start_hour,
            start_minutes: 0,
            end_hour,
            end_minutes: 0,
            title,
            kind,
            status: EventStatus::Busy,
            source,
            time_label: format_time_label(start_hour, 0, end_hour, 0),
        })
    }

    /// Override the display label (the mock generator carries canned labels
    /// that reflect the reference hours rather than the mapped ones).
    pub fn with_time_label(mut self, label: impl Into<String>) -> Self {
        self.time_label = label.into();
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Duration in whole hours, floored to one slot for degenerate data.
    pub fn duration_hours(&self) -> u8 {
        self.end_hour.saturating_sub(self.start_hour).max(1)
    }

    pub fn is_busy(&self) -> bool {
        self.status == EventStatus::Busy
    }

    /// Relocate to a new slot, preserving duration and refreshing the
    /// display label. Minutes apply to both ends, matching how drops snap.
    pub fn move_to(&mut self, day: u8, start_hour: u8, minutes: u8) {
        let duration = self.end_hour - self.start_hour;
        self.day = day;
        self.start_hour = start_hour;
        self.start_minutes = minutes;
        self.end_hour = start_hour + duration;
        self.end_minutes = minutes;
        self.time_label = format_time_label(start_hour, minutes, self.end_hour, minutes);
    }

    /// Start of the event in minutes from midnight (display hour space).
    pub fn start_total_minutes(&self) -> u32 {
        self.start_hour as u32 * 60 + self.start_minutes as u32
    }

    /// End of the event in minutes from midnight (display hour space).
    pub fn end_total_minutes(&self) -> u32 {
        self.end_hour as u32 * 60 + self.end_minutes as u32
    }
}
