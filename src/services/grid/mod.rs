//! Week-grid time/slot model.
//!
//! The grid is 7 day columns by 24 hour rows. The hour axis starts at 9 AM
//! and wraps past midnight to 8 AM, identically for every column and every
//! week; only event placement differs.

pub mod availability;
pub mod conflict;
pub mod drag;
pub mod layout;

use chrono::NaiveDate;

use crate::utils::date::{add_days, week_start};

/// First hour of the working window (inclusive).
pub const WORK_START_HOUR: u8 = 9;
/// End of the working window (exclusive).
pub const WORK_END_HOUR: u8 = 18;
/// The hour blocked out for the daily break (1-2 PM).
pub const BREAK_HOUR: u8 = 13;
/// Rows on the time axis.
pub const SLOT_COUNT: usize = 24;

/// The fixed hour axis: `[9, 10, ..., 23, 0, 1, ..., 8]`.
pub fn hour_slots() -> [u8; SLOT_COUNT] {
    let mut slots = [0u8; SLOT_COUNT];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = ((WORK_START_HOUR as usize + i) % 24) as u8;
    }
    slots
}

/// Row index of an hour on the slot axis.
pub fn slot_row_for_hour(hour: u8) -> usize {
    let hour = (hour % 24) as usize;
    if hour >= WORK_START_HOUR as usize {
        hour - WORK_START_HOUR as usize
    } else {
        hour + (24 - WORK_START_HOUR as usize)
    }
}

/// The 7 dates of the displayed week, starting at the Sunday on or before
/// the anchor.
pub fn week_days(anchor: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(anchor);
    std::array::from_fn(|i| add_days(start, i as i64))
}

pub fn is_weekend(day: u8) -> bool {
    day % 7 == 0 || day % 7 == 6
}

pub fn is_working_hour(hour: u8) -> bool {
    (WORK_START_HOUR..WORK_END_HOUR).contains(&hour)
}
