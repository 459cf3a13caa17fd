use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::rules::HolidayName;
use crate::errors::{HolidayError, HolidayResult};

/// A one-off date for a holiday in one specific year.
///
/// Used for holidays with no simple yearly rule, such as Easter, and to move a holiday whose
/// usual rule does not apply in a given year. An override beats every other rule kind for its
/// name and year.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearOverrideRuleDataModel")]
pub struct YearOverrideRule {
    pub(crate) name: HolidayName,
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

#[derive(Deserialize)]
struct YearOverrideRuleDataModel {
    name: String,
    year: i32,
    month: u32,
    day: u32,
}

impl std::convert::TryFrom<YearOverrideRuleDataModel> for YearOverrideRule {
    type Error = HolidayError;
    fn try_from(model: YearOverrideRuleDataModel) -> Result<Self, Self::Error> {
        Self::try_new(&model.name, model.year, model.month, model.day)
    }
}

impl YearOverrideRule {
    /// Create an override; (`year`, `month`, `day`) must be a real date.
    pub fn try_new(name: &str, year: i32, month: u32, day: u32) -> HolidayResult<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(HolidayError::InvalidRule(format!(
                "{:04}-{:02}-{:02} is not a valid date for an override",
                year, month, day
            )));
        }
        Ok(YearOverrideRule {
            name: HolidayName::new(name),
            year,
            month,
            day,
        })
    }

    pub fn name(&self) -> HolidayName {
        self.name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for YearOverrideRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_override_new() {
        let rule = YearOverrideRule::try_new("Easter", 2024, 3, 31).unwrap();
        assert_eq!(rule.year(), 2024);
        assert_eq!(rule.to_string(), "Easter 2024");
    }

    #[test]
    fn test_year_override_invalid() {
        assert!(YearOverrideRule::try_new("Leap", 2023, 2, 29).is_err());
        assert!(YearOverrideRule::try_new("Leap", 2024, 2, 29).is_ok());
    }
}
