use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::rules::{
    labels, validate_month, weekday_from_index, weekday_index, HolidayName,
};
use crate::errors::{HolidayError, HolidayResult};

/// A holiday on the nth occurrence of a weekday that comes after the nth occurrence of another
/// weekday in the same month.
///
/// U.S. Election Day is the first Tuesday after the first Monday of November, so it is never
/// November 1st. Unlike [`NthWeekdayRule`](crate::calendar::NthWeekdayRule) both counts are
/// literal: 5 means the fifth occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NthWeekdayAfterRuleDataModel")]
pub struct NthWeekdayAfterRule {
    pub(crate) name: HolidayName,
    pub(crate) month: u32,
    #[serde(serialize_with = "weekday_index::serialize")]
    pub(crate) day_of_week: Weekday,
    pub(crate) nth: u8,
    #[serde(serialize_with = "weekday_index::serialize")]
    pub(crate) after_day_of_week: Weekday,
    pub(crate) after_nth: u8,
}

#[derive(Deserialize)]
struct NthWeekdayAfterRuleDataModel {
    name: String,
    month: u32,
    day_of_week: u8,
    nth: u8,
    after_day_of_week: u8,
    after_nth: u8,
}

impl std::convert::TryFrom<NthWeekdayAfterRuleDataModel> for NthWeekdayAfterRule {
    type Error = HolidayError;
    fn try_from(model: NthWeekdayAfterRuleDataModel) -> Result<Self, Self::Error> {
        Self::try_new(
            &model.name,
            model.month,
            model.day_of_week,
            model.nth,
            model.after_day_of_week,
            model.after_nth,
        )
    }
}

fn validate_count(field: &str, value: u8) -> HolidayResult<u8> {
    if (1..=5).contains(&value) {
        Ok(value)
    } else {
        Err(HolidayError::InvalidRule(format!(
            "`{}` must be in 1..=5, got {}",
            field, value
        )))
    }
}

impl NthWeekdayAfterRule {
    /// Create a rule from the integer representation.
    ///
    /// Weekdays count from 0 = Monday to 6 = Sunday. `nth` and `after_nth` are in 1 to 5.
    pub fn try_new(
        name: &str,
        month: u32,
        day_of_week: u8,
        nth: u8,
        after_day_of_week: u8,
        after_nth: u8,
    ) -> HolidayResult<Self> {
        validate_month(month)?;
        Ok(NthWeekdayAfterRule {
            name: HolidayName::new(name),
            month,
            day_of_week: weekday_from_index(day_of_week)?,
            nth: validate_count("nth", nth)?,
            after_day_of_week: weekday_from_index(after_day_of_week)?,
            after_nth: validate_count("after_nth", after_nth)?,
        })
    }

    pub fn name(&self) -> HolidayName {
        self.name
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day_of_week(&self) -> Weekday {
        self.day_of_week
    }

    pub fn nth(&self) -> u8 {
        self.nth
    }

    pub fn after_day_of_week(&self) -> Weekday {
        self.after_day_of_week
    }

    pub fn after_nth(&self) -> u8 {
        self.after_nth
    }
}

impl fmt::Display for NthWeekdayAfterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} after the {} {} of {}",
            labels::ordinal_label(self.nth),
            labels::weekday_name(self.day_of_week),
            labels::ordinal_label(self.after_nth),
            labels::weekday_name(self.after_day_of_week),
            labels::month_label(self.month)
        )
    }
}
