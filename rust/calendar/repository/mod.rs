//! Read access to stored holiday rules.
//!
//! The engine never stores rules itself; it reads snapshots through [`RuleRepository`] on every
//! query. [`MemoryRepository`] is an in-memory implementation which can be loaded from JSON.

mod memory;

pub use crate::calendar::repository::memory::MemoryRepository;

use indexmap::IndexSet;
use std::sync::Arc;

use crate::calendar::rules::{
    FixedRule, HolidayName, NthWeekdayAfterRule, NthWeekdayRule, Rule, RuleKind, YearOverrideRule,
};

/// Read-only access to holiday rules, grouped by kind and by name.
///
/// All methods return owned snapshots. Implementations are expected to hold at most one rule of
/// each yearly kind per name and at most one [`YearOverrideRule`] per name and year; where a
/// store holds more, the first one returned is used.
pub trait RuleRepository {
    /// The override for `name` in `year`, if any.
    fn year_override(&self, name: &HolidayName, year: i32) -> Option<YearOverrideRule>;

    fn fixed(&self, name: &HolidayName) -> Option<FixedRule>;

    fn nth_weekday(&self, name: &HolidayName) -> Option<NthWeekdayRule>;

    fn nth_weekday_after(&self, name: &HolidayName) -> Option<NthWeekdayAfterRule>;

    fn all_fixed(&self) -> Vec<FixedRule>;

    fn all_nth_weekday(&self) -> Vec<NthWeekdayRule>;

    fn all_nth_weekday_after(&self) -> Vec<NthWeekdayAfterRule>;

    /// Every override whose year is `year`.
    fn all_year_overrides(&self, year: i32) -> Vec<YearOverrideRule>;

    /// The distinct names across all rule kinds, including names that only have overrides.
    fn distinct_names(&self) -> IndexSet<HolidayName>;

    /// Returns whether any rule of any kind exists for `name`.
    fn contains_name(&self, name: &HolidayName) -> bool {
        self.distinct_names().contains(name)
    }

    /// The rule of a given kind for `name`; `year` is only used for overrides.
    fn rule_of_kind(&self, kind: RuleKind, name: &HolidayName, year: i32) -> Option<Rule> {
        match kind {
            RuleKind::YearOverride => self.year_override(name, year).map(Rule::from),
            RuleKind::Fixed => self.fixed(name).map(Rule::from),
            RuleKind::NthWeekday => self.nth_weekday(name).map(Rule::from),
            RuleKind::NthWeekdayAfter => self.nth_weekday_after(name).map(Rule::from),
        }
    }

    /// Fixed rules falling on `month` and `day` in every year.
    fn fixed_on(&self, month: u32, day: u32) -> Vec<FixedRule> {
        self.all_fixed()
            .into_iter()
            .filter(|r| r.month == month && r.day == day)
            .collect()
    }
}

impl<R: RuleRepository + ?Sized> RuleRepository for Arc<R> {
    fn year_override(&self, name: &HolidayName, year: i32) -> Option<YearOverrideRule> {
        (**self).year_override(name, year)
    }

    fn fixed(&self, name: &HolidayName) -> Option<FixedRule> {
        (**self).fixed(name)
    }

    fn nth_weekday(&self, name: &HolidayName) -> Option<NthWeekdayRule> {
        (**self).nth_weekday(name)
    }

    fn nth_weekday_after(&self, name: &HolidayName) -> Option<NthWeekdayAfterRule> {
        (**self).nth_weekday_after(name)
    }

    fn all_fixed(&self) -> Vec<FixedRule> {
        (**self).all_fixed()
    }

    fn all_nth_weekday(&self) -> Vec<NthWeekdayRule> {
        (**self).all_nth_weekday()
    }

    fn all_nth_weekday_after(&self) -> Vec<NthWeekdayAfterRule> {
        (**self).all_nth_weekday_after()
    }

    fn all_year_overrides(&self, year: i32) -> Vec<YearOverrideRule> {
        (**self).all_year_overrides(year)
    }

    fn distinct_names(&self) -> IndexSet<HolidayName> {
        (**self).distinct_names()
    }

    fn contains_name(&self, name: &HolidayName) -> bool {
        (**self).contains_name(name)
    }

    fn fixed_on(&self, month: u32, day: u32) -> Vec<FixedRule> {
        (**self).fixed_on(month, day)
    }
}
