//! Demo event feed.
//!
//! No backing calendar account is wired up, so the grid is seeded from
//! three canned weekly schedules rotated by week number. Hours are mapped
//! into the selected timezone; the display labels stay fixed to the
//! reference schedule, which is what a synced remote calendar would show.

use chrono::{Datelike, NaiveDate};

use crate::models::event::{Event, EventKind, EventSource};
use crate::services::timezone::display_hour;

struct Seed {
    day: u8,
    start_hour: u8,
    end_hour: u8,
    title: &'static str,
    time_label: &'static str,
    kind: EventKind,
    source: EventSource,
}

const SET_A: &[Seed] = &[
    Seed {
        day: 1,
        start_hour: 9,
        end_hour: 10,
        title: "Morning Sync",
        time_label: "9:00 AM - 10:00 AM",
        kind: EventKind::Meeting,
        source: EventSource::Google,
    },
    Seed {
        day: 3,
        start_hour: 11,
        end_hour: 12,
        title: "Team Building",
        time_label: "11:00 AM - 12:00 PM",
        kind: EventKind::Meeting,
        source: EventSource::Google,
    },
    Seed {
        day: 5,
        start_hour: 15,
        end_hour: 16,
        title: "Code Review",
        time_label: "3:00 PM - 4:00 PM",
        kind: EventKind::Review,
        source: EventSource::Google,
    },
    Seed {
        day: 2,
        start_hour: 14,
        end_hour: 15,
        title: "Design Workshop",
        time_label: "2:00 PM - 3:00 PM",
        kind: EventKind::Workshop,
        source: EventSource::Iclosed,
    },
    Seed {
        day: 4,
        start_hour: 16,
        end_hour: 17,
        title: "Code Review Session",
        time_label: "4:00 PM - 5:00 PM",
        kind: EventKind::Session,
        source: EventSource::Iclosed,
    },
];

const SET_B: &[Seed] = &[
    Seed {
        day: 2,
        start_hour: 10,
        end_hour: 11,
        title: "Project Review",
        time_label: "10:00 AM - 11:00 AM",
        kind: EventKind::Review,
        source: EventSource::Google,
    },
    Seed {
        day: 4,
        start_hour: 13,
        end_hour: 14,
        title: "Sprint Planning",
        time_label: "1:00 PM - 2:00 PM",
        kind: EventKind::Planning,
        source: EventSource::Google,
    },
    Seed {
        day: 1,
        start_hour: 15,
        end_hour: 16,
        title: "Architecture Review",
        time_label: "3:00 PM - 4:00 PM",
        kind: EventKind::Review,
        source: EventSource::Iclosed,
    },
];

const SET_C: &[Seed] = &[
    Seed {
        day: 1,
        start_hour: 8,
        end_hour: 9,
        title: "Daily Standup",
        time_label: "8:00 AM - 9:00 AM",
        kind: EventKind::Meeting,
        source: EventSource::Google,
    },
    Seed {
        day: 3,
        start_hour: 12,
        end_hour: 13,
        title: "Lunch Meeting",
        time_label: "12:00 PM - 1:00 PM",
        kind: EventKind::Meeting,
        source: EventSource::Google,
    },
    Seed {
        day: 5,
        start_hour: 14,
        end_hour: 15,
        title: "Weekly Retro",
        time_label: "2:00 PM - 3:00 PM",
        kind: EventKind::Retro,
        source: EventSource::Google,
    },
    Seed {
        day: 2,
        start_hour: 16,
        end_hour: 17,
        title: "Tech Talk",
        time_label: "4:00 PM - 5:00 PM",
        kind: EventKind::Talk,
        source: EventSource::Iclosed,
    },
    Seed {
        day: 4,
        start_hour: 9,
        end_hour: 10,
        title: "Design Sprint",
        time_label: "9:00 AM - 10:00 AM",
        kind: EventKind::Session,
        source: EventSource::Iclosed,
    },
];

const WEEK_SETS: [&[Seed]; 3] = [SET_A, SET_B, SET_C];

/// Weeks elapsed since January 1 of the anchor's year.
fn week_number(anchor: NaiveDate) -> i64 {
    let jan1 = NaiveDate::from_ymd_opt(anchor.year(), 1, 1).unwrap_or(anchor);
    (anchor - jan1).num_days() / 7
}

/// Canned events for the week containing `anchor`, with hours shifted into
/// `zone_id`. Zone clamping can collapse a start/end pair onto the same
/// hour; ends are bumped to keep every event at least one slot tall.
pub fn events_for_week(anchor: NaiveDate, zone_id: &str) -> Vec<Event> {
    let set = WEEK_SETS[(week_number(anchor).rem_euclid(3)) as usize];

    set.iter()
        .filter_map(|seed| {
            let start = display_hour(seed.start_hour, zone_id);
            let end = display_hour(seed.end_hour, zone_id).max(start + 1);
            match Event::new(seed.day, start, end, seed.title, seed.kind, seed.source) {
                Ok(event) => Some(event.with_time_label(seed.time_label)),
                Err(err) => {
                    log::warn!("skipping seed event {:?}: {}", seed.title, err);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_sets_rotate() {
        // Jan 1-7 is week 0, Jan 8-14 week 1, Jan 15-21 week 2,
        // Jan 22 wraps back to the first set.
        let a = events_for_week(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), "Asia/Karachi");
        let b = events_for_week(NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(), "Asia/Karachi");
        let c = events_for_week(NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(), "Asia/Karachi");
        let d = events_for_week(NaiveDate::from_ymd_opt(2025, 1, 23).unwrap(), "Asia/Karachi");
        assert_eq!(a[0].title, "Morning Sync");
        assert_eq!(b[0].title, "Project Review");
        assert_eq!(c[0].title, "Daily Standup");
        assert_eq!(d[0].title, "Morning Sync");
    }

    #[test]
    fn test_non_americas_hours_stay_in_display_window() {
        let events = events_for_week(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), "Asia/Karachi");
        for event in &events {
            assert!((9..=16).contains(&event.start_hour), "{}", event.title);
            assert!(event.start_hour != 13, "{}", event.title);
        }
    }

    #[test]
    fn test_eastern_zone_shifts_hours() {
        let events =
            events_for_week(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), "America/New_York");
        let review = events.iter().find(|e| e.title == "Code Review").unwrap();
        // 3 PM reference is 10 AM eastern under the fixed -5 offset.
        assert_eq!(review.start_hour, 10);
        assert_eq!(review.end_hour, 11);
    }

    #[test]
    fn test_labels_stay_canned() {
        let events =
            events_for_week(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), "America/New_York");
        let review = events.iter().find(|e| e.title == "Code Review").unwrap();
        assert_eq!(review.time_label, "3:00 PM - 4:00 PM");
    }

    #[test]
    fn test_every_event_has_positive_span() {
        for week in 0..3 {
            let anchor = NaiveDate::from_ymd_opt(2025, 1, 2 + week * 7).unwrap();
            for event in events_for_week(anchor, "America/Los_Angeles") {
                assert!(event.end_hour > event.start_hour, "{}", event.title);
            }
        }
    }
}
