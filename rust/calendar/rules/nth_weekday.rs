use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::calendar::rules::{
    labels, validate_month, weekday_from_index, weekday_index, HolidayName, Nth,
};
use crate::errors::{HolidayError, HolidayResult};

/// A holiday on the nth (or last) occurrence of a weekday in a month.
///
/// For example Martin Luther King Jr. Day is the third Monday of January and Memorial Day is the
/// last Monday of May.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NthWeekdayRuleDataModel")]
pub struct NthWeekdayRule {
    pub(crate) name: HolidayName,
    pub(crate) month: u32,
    #[serde(serialize_with = "weekday_index::serialize")]
    pub(crate) day_of_week: Weekday,
    pub(crate) nth: Nth,
}

#[derive(Deserialize)]
struct NthWeekdayRuleDataModel {
    name: String,
    month: u32,
    day_of_week: u8,
    nth: u8,
}

impl TryFrom<NthWeekdayRuleDataModel> for NthWeekdayRule {
    type Error = HolidayError;
    fn try_from(model: NthWeekdayRuleDataModel) -> Result<Self, Self::Error> {
        Self::try_new(&model.name, model.month, model.day_of_week, model.nth)
    }
}

impl NthWeekdayRule {
    /// Create a rule from the integer representation.
    ///
    /// `day_of_week` counts from 0 = Monday to 6 = Sunday. `nth` is 1 to 4 for a forward count
    /// and 5 for the last occurrence of the weekday in the month.
    pub fn try_new(name: &str, month: u32, day_of_week: u8, nth: u8) -> HolidayResult<Self> {
        validate_month(month)?;
        Ok(NthWeekdayRule {
            name: HolidayName::new(name),
            month,
            day_of_week: weekday_from_index(day_of_week)?,
            nth: Nth::try_from(nth)?,
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

    pub fn nth(&self) -> Nth {
        self.nth
    }
}

impl fmt::Display for NthWeekdayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} of {}",
            self.nth,
            labels::weekday_name(self.day_of_week),
            labels::month_label(self.month)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_weekday_rule_new() {
        let rule = NthWeekdayRule::try_new("MLK Day", 1, 0, 3).unwrap();
        assert_eq!(rule.day_of_week(), Weekday::Mon);
        assert_eq!(rule.nth(), Nth::Third);
        assert_eq!(rule.to_string(), "Third Monday of January");

        let rule = NthWeekdayRule::try_new("Memorial Day", 5, 0, 5).unwrap();
        assert_eq!(rule.to_string(), "Last Monday of May");
    }

    #[test]
    fn test_nth_weekday_rule_invalid() {
        assert!(NthWeekdayRule::try_new("Bad", 0, 0, 1).is_err());
        assert!(NthWeekdayRule::try_new("Bad", 1, 7, 1).is_err());
        assert!(NthWeekdayRule::try_new("Bad", 1, 0, 6).is_err());
        assert!(NthWeekdayRule::try_new("Bad", 1, 0, 0).is_err());
    }
}
