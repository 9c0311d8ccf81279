// Date utility functions
// Week math and display formatting shared across the UI and services

use chrono::{Datelike, Duration, Local, NaiveDate};

pub const DAY_NAMES_SHORT: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
pub const DAY_NAMES_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Calculate the Sunday on or before the given date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

pub fn same_month(d1: NaiveDate, d2: NaiveDate) -> bool {
    d1.year() == d2.year() && d1.month() == d2.month()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// "August 2026" - top bar title.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "Aug 24" - week range button.
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}

/// Header label pieces for a day column: ("MON", "24").
pub fn format_day_header(date: NaiveDate) -> (&'static str, String) {
    let name = DAY_NAMES_SHORT[date.weekday().num_days_from_sunday() as usize];
    (name, format!("{:02}", date.day()))
}

/// "9 AM" / "12 PM" / "8 AM" - hour labels along the time axis.
pub fn format_hour_12h(hour: u8) -> String {
    let hour = hour % 24;
    let (display, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{} {}", display, suffix)
}

/// "9:00 AM - 10:15 AM" - event time label.
pub fn format_time_label(start_hour: u8, start_minutes: u8, end_hour: u8, end_minutes: u8) -> String {
    format!(
        "{} - {}",
        format_clock_12h(start_hour, start_minutes),
        format_clock_12h(end_hour, end_minutes)
    )
}

fn format_clock_12h(hour: u8, minutes: u8) -> String {
    let hour = hour % 24;
    let (display, suffix) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{}:{:02} {}", display, minutes, suffix)
}

/// Ordinal suffix for a day-of-month: 1st, 2nd, 3rd, 4th, 11th..13th.
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_start_mid_week() {
        // Wednesday, Dec 4, 2024 -> Sunday, Dec 1, 2024
        let date = NaiveDate::from_ymd_opt(2024, 12, 4).unwrap();
        assert_eq!(week_start(date), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }

    #[test]
    fn test_week_start_on_sunday() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(week_start(date), date);
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // Saturday, Feb 1, 2025 -> Sunday, Jan 26, 2025
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(week_start(date), NaiveDate::from_ymd_opt(2025, 1, 26).unwrap());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_format_hour_12h() {
        assert_eq!(format_hour_12h(0), "12 AM");
        assert_eq!(format_hour_12h(9), "9 AM");
        assert_eq!(format_hour_12h(12), "12 PM");
        assert_eq!(format_hour_12h(13), "1 PM");
        assert_eq!(format_hour_12h(23), "11 PM");
    }

    #[test]
    fn test_format_time_label() {
        assert_eq!(format_time_label(9, 0, 10, 0), "9:00 AM - 10:00 AM");
        assert_eq!(format_time_label(14, 15, 15, 15), "2:15 PM - 3:15 PM");
    }

    #[test]
    fn test_format_day_header_pads_day_number() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let (name, number) = format_day_header(date);
        assert_eq!(name, "MON");
        assert_eq!(number, "03");
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
    }

    #[test]
    fn test_same_month() {
        let a = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let c = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(same_month(a, b));
        assert!(!same_month(a, c));
    }
}
