//! Resolve holiday rules to dates and determine whether a date is a holiday.
//!
//! Holidays are described by *rules* rather than dates. There are four rule kinds:
//! - [`FixedRule`]: the same month and day every year, e.g. Christmas on December 25th.
//! - [`NthWeekdayRule`]: the nth or last weekday of a month, e.g. the third Monday of January.
//! - [`NthWeekdayAfterRule`]: the nth weekday after the nth occurrence of another weekday, e.g.
//!   the first Tuesday after the first Monday of November.
//! - [`YearOverrideRule`]: an exact date for a holiday in one specific year.
//!
//! The [`Rule`] enum contains any of them and implements [`ResolveDate`], which computes the date
//! of a rule in a year.
//!
//! # Resolving holidays
//!
//! A [`HolidayEngine`] reads rules from a [`RuleRepository`] and, for a name and year, tries its
//! rules in [`PRECEDENCE`] order: an override for that year, then fixed, then nth weekday, then
//! nth weekday after. The first rule which resolves gives the date.
//!
//! ### Example
//! This example stores a fixed rule for Independence Day, together with an override moving it
//! to the observed Friday in 2026.
//! ```rust
//! # use holidays::calendar::{ymd, FixedRule, HolidayEngine, MemoryRepository, YearOverrideRule};
//! let mut repo = MemoryRepository::new();
//! repo.add_fixed(FixedRule::try_new("Independence Day", 7, 4).unwrap());
//! repo.add_year_override(YearOverrideRule::try_new("Independence Day", 2026, 7, 3).unwrap());
//! let engine = HolidayEngine::new(repo);
//! assert_eq!(ymd(2025, 7, 4), engine.resolve("Independence Day", 2025).unwrap());
//! assert_eq!(ymd(2026, 7, 3), engine.resolve("Independence Day", 2026).unwrap());
//! ```
//!
//! # Holiday lookup
//!
//! The inverse query, [`HolidayEngine::is_holiday`], returns the rule of the holiday falling on a
//! date, if any.
//!
//! ### Example
//! ```rust
//! # use holidays::calendar::{ymd, HolidayEngine, MemoryRepository, NthWeekdayAfterRule};
//! let mut repo = MemoryRepository::new();
//! repo.add_nth_weekday_after(NthWeekdayAfterRule::try_new("Election Day", 11, 1, 1, 0, 1).unwrap());
//! let engine = HolidayEngine::new(repo);
//! let rule = engine.is_holiday(&ymd(2024, 11, 5)).unwrap();
//! assert_eq!(rule.name().as_str(), "Election Day");
//! assert!(engine.is_holiday(&ymd(2024, 11, 4)).is_none());
//! ```

mod engine;
mod options;
mod repository;
mod resolver;
mod rules;

mod serde;

#[cfg(feature = "python")]
pub(crate) mod py;

pub use crate::calendar::{
    engine::{HolidayEngine, PRECEDENCE},
    options::{EngineOptions, EnumerationOrder, FastPathPolicy},
    repository::{MemoryRepository, RuleRepository},
    resolver::{
        resolve_fixed, resolve_nth_weekday, resolve_nth_weekday_after, resolve_year_override,
        ResolveDate,
    },
    rules::{
        month_name, ordinal_name, weekday_name, FixedRule, HolidayName, Nth, NthWeekdayAfterRule,
        NthWeekdayRule, Rule, RuleKind, YearOverrideRule,
    },
};

use chrono::NaiveDate;

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}
