use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::rules::{labels, validate_month_day, HolidayName};
use crate::errors::{HolidayError, HolidayResult};

/// A holiday falling on the same month and day every year, e.g. Christmas on December 25th.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FixedRuleDataModel")]
pub struct FixedRule {
    pub(crate) name: HolidayName,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

#[derive(Deserialize)]
struct FixedRuleDataModel {
    name: String,
    month: u32,
    day: u32,
}

impl std::convert::TryFrom<FixedRuleDataModel> for FixedRule {
    type Error = HolidayError;
    fn try_from(model: FixedRuleDataModel) -> Result<Self, Self::Error> {
        Self::try_new(&model.name, model.month, model.day)
    }
}

impl FixedRule {
    /// Create a fixed date rule.
    ///
    /// The `month` and `day` must exist in at least one year. February 29th is accepted and
    /// fails to resolve only in non-leap years.
    pub fn try_new(name: &str, month: u32, day: u32) -> HolidayResult<Self> {
        validate_month_day(month, day)?;
        Ok(FixedRule {
            name: HolidayName::new(name),
            month,
            day,
        })
    }

    pub fn name(&self) -> HolidayName {
        self.name
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for FixedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", labels::month_label(self.month), self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rule_new() {
        let rule = FixedRule::try_new("Christmas", 12, 25).unwrap();
        assert_eq!(rule.name().as_str(), "Christmas");
        assert_eq!((rule.month(), rule.day()), (12, 25));
        assert_eq!(rule.to_string(), "December 25");
    }

    #[test]
    fn test_fixed_rule_leap_day_allowed() {
        assert!(FixedRule::try_new("Leap Day", 2, 29).is_ok());
    }

    #[test]
    fn test_fixed_rule_invalid() {
        assert!(FixedRule::try_new("Bad", 2, 30).is_err());
        assert!(FixedRule::try_new("Bad", 13, 1).is_err());
        assert!(FixedRule::try_new("Bad", 6, 0).is_err());
    }
}
