mod fixed;
mod labels;
mod name;
mod nth;
mod nth_weekday;
mod nth_weekday_after;
mod rule;
mod year_override;

pub use crate::calendar::rules::{
    fixed::FixedRule,
    labels::{month_name, ordinal_name, weekday_name},
    name::HolidayName,
    nth::Nth,
    nth_weekday::NthWeekdayRule,
    nth_weekday_after::NthWeekdayAfterRule,
    rule::{Rule, RuleKind},
    year_override::YearOverrideRule,
};

use chrono::{NaiveDate, Weekday};

use crate::errors::{HolidayError, HolidayResult};

// Any leap year will do: a (month, day) is valid in some year iff it is valid in a leap year.
const LEAP_YEAR: i32 = 2000;

pub(crate) fn validate_month(month: u32) -> HolidayResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(HolidayError::InvalidRule(format!(
            "`month` must be in 1..=12, got {}",
            month
        )))
    }
}

/// Check the `month` and `day` can form a date in at least one year, so February 29th is allowed
/// but February 30th is not.
pub(crate) fn validate_month_day(month: u32, day: u32) -> HolidayResult<()> {
    validate_month(month)?;
    match NaiveDate::from_ymd_opt(LEAP_YEAR, month, day) {
        Some(_) => Ok(()),
        None => Err(HolidayError::InvalidRule(format!(
            "`day` {} does not exist in {}",
            day,
            labels::month_label(month)
        ))),
    }
}

pub(crate) fn weekday_from_index(day_of_week: u8) -> HolidayResult<Weekday> {
    Weekday::try_from(day_of_week).map_err(|_| {
        HolidayError::InvalidRule(format!(
            "`day_of_week` must be in 0..=6 (0 = Monday), got {}",
            day_of_week
        ))
    })
}

/// Serialize a [`Weekday`] as its index from Monday, 0 to 6, the inverse of
/// [`weekday_from_index`].
pub(crate) mod weekday_index {
    use chrono::Weekday;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(weekday.num_days_from_monday() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_month_day() {
        assert!(validate_month_day(2, 29).is_ok());
        assert!(validate_month_day(12, 31).is_ok());
        assert!(validate_month_day(2, 30).is_err());
        assert!(validate_month_day(4, 31).is_err());
        assert!(validate_month_day(0, 1).is_err());
        assert!(validate_month_day(13, 1).is_err());
    }

    #[test]
    fn test_weekday_from_index() {
        assert_eq!(weekday_from_index(0).unwrap(), Weekday::Mon);
        assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sun);
        assert!(weekday_from_index(7).is_err());
    }
}
