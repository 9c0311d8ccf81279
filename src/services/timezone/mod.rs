// Timezone hour mapping
//
// Events are authored in a reference hour space and shifted into the selected
// display zone. Americas zones use a fixed offset table (deliberately not
// DST-aware); every other zone goes through real chrono-tz conversion. Both
// branches share two post-processing rules: hour 13 is never produced (the
// grid reserves it for the break slot), and the result is clamped into the
// branch's display window.

use chrono::{Local, TimeZone, Timelike};
use chrono_tz::Tz;

/// Zones resolved by the fixed offset table instead of chrono-tz.
const AMERICAS_ZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Toronto",
    "America/Vancouver",
    "America/Edmonton",
    "America/Winnipeg",
    "America/Sao_Paulo",
    "America/Argentina/Buenos_Aires",
    "America/Buenos_Aires",
    "America/Santiago",
    "America/Lima",
    "America/Bogota",
    "America/Caracas",
];

pub fn is_americas_zone(zone_id: &str) -> bool {
    AMERICAS_ZONES.contains(&zone_id)
}

fn fixed_offset_for(zone_id: &str) -> i32 {
    match zone_id {
        "America/New_York" | "America/Toronto" => -5,
        "America/Chicago" | "America/Winnipeg" => -6,
        "America/Denver" | "America/Edmonton" => -7,
        "America/Los_Angeles" | "America/Vancouver" => -8,
        // Remaining (South America) zones
        _ => -3,
    }
}

/// Map a reference hour into the hour shown on the grid for `zone_id`.
///
/// The asymmetric clamp windows (8-18 for Americas, 9-16 elsewhere) are
/// load-bearing compatibility rules, not an oversight.
pub fn display_hour(reference_hour: u8, zone_id: &str) -> u8 {
    if is_americas_zone(zone_id) {
        let local = (reference_hour as i32 + fixed_offset_for(zone_id)).rem_euclid(24) as u8;
        clamp_display(skip_break(local), 8, 18)
    } else {
        let local = zone_local_hour(reference_hour, zone_id);
        clamp_display(skip_break(local), 9, 16)
    }
}

/// Hour 13 is the break slot; events never start there.
fn skip_break(hour: u8) -> u8 {
    if hour == 13 {
        14
    } else {
        hour
    }
}

fn clamp_display(hour: u8, min: u8, max: u8) -> u8 {
    hour.clamp(min, max)
}

/// Convert today's `reference_hour:00` local timestamp into `zone_id` and
/// take the resulting wall-clock hour. Unparseable zone ids degrade to the
/// reference hour itself rather than failing.
fn zone_local_hour(reference_hour: u8, zone_id: &str) -> u8 {
    let Ok(tz) = zone_id.parse::<Tz>() else {
        log::warn!("Unrecognized timezone id '{}', using reference hour", zone_id);
        return reference_hour % 24;
    };

    let today = Local::now().date_naive();
    let Some(naive) = today.and_hms_opt(reference_hour as u32 % 24, 0, 0) else {
        return reference_hour % 24;
    };

    match Local.from_local_datetime(&naive).earliest() {
        Some(local_dt) => local_dt.with_timezone(&tz).hour() as u8,
        None => reference_hour % 24,
    }
}

/// Current wall-clock HH:MM in the given zone, for the selector rows and the
/// topbar clock. Falls back to local time for unknown ids.
pub fn zone_clock(zone_id: &str) -> String {
    match zone_id.parse::<Tz>() {
        Ok(tz) => Local::now().with_timezone(&tz).format("%H:%M").to_string(),
        Err(_) => Local::now().format("%H:%M").to_string(),
    }
}

/// Zone-local (hour, minute) now, used by the current-time indicator.
pub fn zone_now(zone_id: &str) -> (u8, u8) {
    match zone_id.parse::<Tz>() {
        Ok(tz) => {
            let now = Local::now().with_timezone(&tz);
            (now.hour() as u8, now.minute() as u8)
        }
        Err(_) => {
            let now = Local::now();
            (now.hour() as u8, now.minute() as u8)
        }
    }
}
