//! Human readable labels used when describing rules.

use chrono::Weekday;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ORDINALS: [&str; 5] = ["First", "Second", "Third", "Fourth", "Fifth"];

/// Return the English name of a month, 1 = January.
pub fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTHS[(month - 1) as usize]),
        _ => None,
    }
}

/// Return the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Return the ordinal label of a literal occurrence count, 1 = "First" up to 5 = "Fifth".
pub fn ordinal_name(nth: u8) -> Option<&'static str> {
    match nth {
        1..=5 => Some(ORDINALS[(nth - 1) as usize]),
        _ => None,
    }
}

// Display helper for possibly malformed data loaded without validation.
pub(crate) fn month_label(month: u32) -> String {
    month_name(month)
        .map(String::from)
        .unwrap_or_else(|| format!("month {}", month))
}

pub(crate) fn ordinal_label(nth: u8) -> String {
    ordinal_name(nth)
        .map(String::from)
        .unwrap_or_else(|| format!("#{}", nth))
}
