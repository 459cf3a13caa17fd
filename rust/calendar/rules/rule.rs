use serde::{Deserialize, Serialize};
use std::convert::From;
use std::fmt;

use crate::calendar::rules::{
    FixedRule, HolidayName, NthWeekdayAfterRule, NthWeekdayRule, YearOverrideRule,
};

/// The kind of a holiday rule, without its data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    YearOverride,
    Fixed,
    NthWeekday,
    NthWeekdayAfter,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RuleKind::YearOverride => "year override",
            RuleKind::Fixed => "fixed",
            RuleKind::NthWeekday => "nth weekday",
            RuleKind::NthWeekdayAfter => "nth weekday after",
        };
        f.write_str(label)
    }
}

/// Container for the holiday rule types.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    YearOverride(YearOverrideRule),
    Fixed(FixedRule),
    NthWeekday(NthWeekdayRule),
    NthWeekdayAfter(NthWeekdayAfterRule),
}

impl Rule {
    /// The name of the holiday this rule describes.
    pub fn name(&self) -> HolidayName {
        match self {
            Rule::YearOverride(r) => r.name(),
            Rule::Fixed(r) => r.name(),
            Rule::NthWeekday(r) => r.name(),
            Rule::NthWeekdayAfter(r) => r.name(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::YearOverride(_) => RuleKind::YearOverride,
            Rule::Fixed(_) => RuleKind::Fixed,
            Rule::NthWeekday(_) => RuleKind::NthWeekday,
            Rule::NthWeekdayAfter(_) => RuleKind::NthWeekdayAfter,
        }
    }
}

impl From<YearOverrideRule> for Rule {
    fn from(item: YearOverrideRule) -> Self {
        Rule::YearOverride(item)
    }
}

impl From<FixedRule> for Rule {
    fn from(item: FixedRule) -> Self {
        Rule::Fixed(item)
    }
}

impl From<NthWeekdayRule> for Rule {
    fn from(item: NthWeekdayRule) -> Self {
        Rule::NthWeekday(item)
    }
}

impl From<NthWeekdayAfterRule> for Rule {
    fn from(item: NthWeekdayAfterRule) -> Self {
        Rule::NthWeekdayAfter(item)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::YearOverride(r) => r.fmt(f),
            Rule::Fixed(r) => r.fmt(f),
            Rule::NthWeekday(r) => r.fmt(f),
            Rule::NthWeekdayAfter(r) => r.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name_and_kind() {
        let rule: Rule = FixedRule::try_new("Christmas", 12, 25).unwrap().into();
        assert_eq!(rule.name(), HolidayName::new("Christmas"));
        assert_eq!(rule.kind(), RuleKind::Fixed);

        let rule: Rule = NthWeekdayAfterRule::try_new("Election Day", 11, 1, 1, 0, 1)
            .unwrap()
            .into();
        assert_eq!(rule.kind(), RuleKind::NthWeekdayAfter);
        assert_eq!(
            rule.to_string(),
            "First Tuesday after the First Monday of November"
        );
    }
}
