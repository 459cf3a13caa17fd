//! Compute the concrete date of a holiday rule in a given year.
//!
//! Each rule kind has a pure resolution function. The [`ResolveDate`] trait wraps these so that a
//! [`Rule`] dispatches to the right one with a single match.

use chrono::prelude::*;

use crate::calendar::rules::{
    FixedRule, NthWeekdayAfterRule, NthWeekdayRule, Rule, YearOverrideRule,
};
use crate::errors::{HolidayError, HolidayResult};

/// Resolution of a rule to a date.
pub trait ResolveDate {
    /// Return the date of the holiday in `year`.
    fn resolve(&self, year: i32) -> HolidayResult<NaiveDate>;

    /// Returns whether the rule gives a date in `year` at all. Yearly rules apply to every year.
    fn applies_to(&self, _year: i32) -> bool {
        true
    }
}

/// Return the date of a [`FixedRule`] in `year`.
///
/// Fails with [`HolidayError::InvalidDate`] rather than clamping, e.g. for February 29th in a
/// non-leap year.
pub fn resolve_fixed(rule: &FixedRule, year: i32) -> HolidayResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, rule.month, rule.day)
        .ok_or_else(|| HolidayError::invalid_date(year, rule.month, rule.day))
}

/// Return the date of an [`NthWeekdayRule`] in `year`.
///
/// Counts forward from the 1st for the first to fourth occurrence and backward from the end of
/// the month for the last occurrence.
pub fn resolve_nth_weekday(rule: &NthWeekdayRule, year: i32) -> HolidayResult<NaiveDate> {
    let first = first_of_month(year, rule.month)?;
    match rule.nth.count() {
        Some(n) => month_days(first)
            .filter(|d| d.weekday() == rule.day_of_week)
            .nth(n - 1)
            .ok_or(HolidayError::NotFound {
                name: rule.name,
                year,
                month: rule.month,
            }),
        None => {
            let mut date = last_of_month(first);
            while date.weekday() != rule.day_of_week {
                date = date.pred_opt().ok_or(HolidayError::NotFound {
                    name: rule.name,
                    year,
                    month: rule.month,
                })?;
            }
            Ok(date)
        }
    }
}

/// Return the date of an [`NthWeekdayAfterRule`] in `year`.
///
/// Both counts are tracked in one forward pass over the month. A target weekday is counted only
/// once the anchor weekday has reached `after_nth` occurrences on an earlier day; the anchor is
/// counted after the target on each day.
pub fn resolve_nth_weekday_after(
    rule: &NthWeekdayAfterRule,
    year: i32,
) -> HolidayResult<NaiveDate> {
    let first = first_of_month(year, rule.month)?;
    let mut count: u8 = 0;
    let mut after_count: u8 = 0;
    for date in month_days(first) {
        let weekday = date.weekday();
        if after_count >= rule.after_nth && weekday == rule.day_of_week {
            count += 1;
        }
        if weekday == rule.after_day_of_week {
            after_count += 1;
        }
        if count >= rule.nth && after_count >= rule.after_nth {
            return Ok(date);
        }
    }
    Err(HolidayError::NotFound {
        name: rule.name,
        year,
        month: rule.month,
    })
}

/// Return the date of a [`YearOverrideRule`], which carries its own year.
pub fn resolve_year_override(rule: &YearOverrideRule) -> HolidayResult<NaiveDate> {
    NaiveDate::from_ymd_opt(rule.year, rule.month, rule.day)
        .ok_or_else(|| HolidayError::invalid_date(rule.year, rule.month, rule.day))
}

fn first_of_month(year: i32, month: u32) -> HolidayResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| HolidayError::invalid_date(year, month, 1))
}

// Every day of the month of `first`, in order.
fn month_days(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let month = first.month();
    first.iter_days().take_while(move |d| d.month() == month)
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    let mut day = 31;
    let mut date = first.with_day(day);
    while date.is_none() && day > 28 {
        day -= 1;
        date = first.with_day(day);
    }
    date.unwrap_or(first)
}

impl ResolveDate for FixedRule {
    fn resolve(&self, year: i32) -> HolidayResult<NaiveDate> {
        resolve_fixed(self, year)
    }
}

impl ResolveDate for NthWeekdayRule {
    fn resolve(&self, year: i32) -> HolidayResult<NaiveDate> {
        resolve_nth_weekday(self, year)
    }
}

impl ResolveDate for NthWeekdayAfterRule {
    fn resolve(&self, year: i32) -> HolidayResult<NaiveDate> {
        resolve_nth_weekday_after(self, year)
    }
}

impl ResolveDate for YearOverrideRule {
    fn resolve(&self, year: i32) -> HolidayResult<NaiveDate> {
        if !self.applies_to(year) {
            return Err(HolidayError::YearNotAvailable {
                name: self.name,
                year,
            });
        }
        resolve_year_override(self)
    }

    fn applies_to(&self, year: i32) -> bool {
        self.year == year
    }
}

impl ResolveDate for Rule {
    fn resolve(&self, year: i32) -> HolidayResult<NaiveDate> {
        match self {
            Rule::YearOverride(r) => r.resolve(year),
            Rule::Fixed(r) => r.resolve(year),
            Rule::NthWeekday(r) => r.resolve(year),
            Rule::NthWeekdayAfter(r) => r.resolve(year),
        }
    }

    fn applies_to(&self, year: i32) -> bool {
        match self {
            Rule::YearOverride(r) => r.applies_to(year),
            _ => true,
        }
    }
}
