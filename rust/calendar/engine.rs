use chrono::prelude::*;
use indexmap::IndexSet;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::calendar::options::{EngineOptions, EnumerationOrder, FastPathPolicy};
use crate::calendar::repository::RuleRepository;
use crate::calendar::resolver::{resolve_year_override, ResolveDate};
use crate::calendar::rules::{HolidayName, Rule, RuleKind};
use crate::errors::{HolidayError, HolidayResult};

/// The order in which rule kinds are consulted for a name and year; the first that resolves wins.
///
/// A one-off override for the year beats a fixed date, which beats an nth-weekday rule, which
/// beats an nth-weekday-after rule.
pub const PRECEDENCE: [RuleKind; 4] = [
    RuleKind::YearOverride,
    RuleKind::Fixed,
    RuleKind::NthWeekday,
    RuleKind::NthWeekdayAfter,
];

/// Resolves holiday names to dates, and dates to holidays, from the rules in a repository.
///
/// The engine holds no state besides its repository and options, so a shared reference can
/// serve concurrent queries whenever the repository is `Sync`.
#[derive(Clone, Debug)]
pub struct HolidayEngine<R> {
    repository: R,
    options: EngineOptions,
}

impl<R: RuleRepository> HolidayEngine<R> {
    /// Create an engine with default [`EngineOptions`].
    pub fn new(repository: R) -> Self {
        Self::with_options(repository, EngineOptions::default())
    }

    pub fn with_options(repository: R, options: EngineOptions) -> Self {
        HolidayEngine {
            repository,
            options,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Return every rule stored for `name` that applies to `year`, in [`PRECEDENCE`] order.
    pub fn rules_for(&self, name: &str, year: i32) -> Vec<Rule> {
        self.rules_for_name(&HolidayName::new(name), year)
    }

    fn rules_for_name(&self, name: &HolidayName, year: i32) -> Vec<Rule> {
        PRECEDENCE
            .iter()
            .filter_map(|kind| self.repository.rule_of_kind(*kind, name, year))
            .collect()
    }

    /// Return the first rule for `name`, in [`PRECEDENCE`] order, which resolves in `year`,
    /// together with its date.
    ///
    /// A rule which fails to resolve, e.g. February 29th in a non-leap year, passes to the rule
    /// of next precedence.
    ///
    /// # Errors
    /// - [`HolidayError::HolidayNotFound`] if no rule of any kind exists for `name`.
    /// - [`HolidayError::YearNotAvailable`] if rules exist for `name` but none of them resolves
    ///   in `year`, typically when there are only overrides for other years.
    pub fn resolve_rule(
        &self,
        name: &HolidayName,
        year: i32,
    ) -> HolidayResult<(Rule, NaiveDate)> {
        let rules = self.rules_for_name(name, year);
        if rules.is_empty() && !self.repository.contains_name(name) {
            return Err(HolidayError::HolidayNotFound(*name));
        }
        for rule in rules {
            match rule.resolve(year) {
                Ok(date) => {
                    trace!(holiday = %name, year, kind = %rule.kind(), "resolved rule");
                    return Ok((rule, date));
                }
                Err(e) => {
                    debug!(
                        holiday = %name, year, kind = %rule.kind(), error = %e,
                        "rule failed to resolve, trying next kind"
                    );
                }
            }
        }
        Err(HolidayError::YearNotAvailable { name: *name, year })
    }

    /// Return the date of the holiday `name` in `year`.
    ///
    /// See [`resolve_rule`](HolidayEngine::resolve_rule) for precedence and errors.
    pub fn resolve(&self, name: &str, year: i32) -> HolidayResult<NaiveDate> {
        self.resolve_name(&HolidayName::new(name), year)
    }

    /// As [`resolve`](HolidayEngine::resolve) for an existing [`HolidayName`].
    pub fn resolve_name(&self, name: &HolidayName, year: i32) -> HolidayResult<NaiveDate> {
        self.resolve_rule(name, year).map(|(_, date)| date)
    }

    /// Return the distinct names of all stored holidays.
    pub fn list_names(&self) -> IndexSet<HolidayName> {
        self.repository.distinct_names()
    }

    /// Return the rules in force in `year`: every yearly rule plus the overrides for `year`.
    ///
    /// A name may appear more than once, e.g. with both a fixed rule and an override. Order
    /// follows [`EngineOptions::enumeration`].
    pub fn enumerate(&self, year: i32) -> Vec<Rule> {
        let rules = self
            .repository
            .all_fixed()
            .into_iter()
            .map(Rule::from)
            .chain(self.repository.all_nth_weekday().into_iter().map(Rule::from))
            .chain(
                self.repository
                    .all_nth_weekday_after()
                    .into_iter()
                    .map(Rule::from),
            )
            .chain(
                self.repository
                    .all_year_overrides(year)
                    .into_iter()
                    .map(Rule::from),
            );
        match self.options.enumeration {
            EnumerationOrder::Repository => rules.collect(),
            EnumerationOrder::ByDate => rules
                .sorted_by_key(|rule| {
                    let date = rule.resolve(year);
                    (date.is_err(), date.ok())
                })
                .collect(),
        }
    }

    /// Return each holiday of `year` once, with the rule that decides it and its date.
    ///
    /// Holidays with no rule resolving in `year` are left out.
    pub fn holidays_for_year(&self, year: i32) -> Vec<(Rule, NaiveDate)> {
        let holidays = self
            .enumerate(year)
            .into_iter()
            .map(|rule| rule.name())
            .unique()
            .filter_map(|name| match self.resolve_rule(&name, year) {
                Ok(resolved) => Some(resolved),
                Err(e) => {
                    debug!(holiday = %name, year, error = %e, "holiday has no date in year");
                    None
                }
            });
        match self.options.enumeration {
            EnumerationOrder::Repository => holidays.collect(),
            EnumerationOrder::ByDate => holidays.sorted_by_key(|(_, date)| *date).collect(),
        }
    }

    /// Return the rule of a holiday falling on `date`, or `None` if it is not a holiday.
    ///
    /// Fixed rules matching the month and day are checked first, subject to
    /// [`EngineOptions::fast_path`]. Otherwise every rule of the year is resolved by name and
    /// compared to `date`; names which fail to resolve are skipped.
    pub fn is_holiday(&self, date: &NaiveDate) -> Option<Rule> {
        let year = date.year();
        if let Some(rule) = self.fast_path(date) {
            return Some(rule);
        }
        self.enumerate(year).into_iter().find(|rule| {
            match self.resolve_name(&rule.name(), year) {
                Ok(resolved) => resolved == *date,
                Err(e) => {
                    debug!(holiday = %rule.name(), year, error = %e, "skipping unresolvable holiday");
                    false
                }
            }
        })
    }

    /// Returns whether `date` is not a holiday.
    pub fn is_not_holiday(&self, date: &NaiveDate) -> bool {
        self.is_holiday(date).is_none()
    }

    /// Return the fixed rule on the month and day of `date` when it is the only candidate.
    ///
    /// Several fixed rules sharing a month and day are left to the full scan.
    fn fast_path(&self, date: &NaiveDate) -> Option<Rule> {
        let fixed = self.repository.fixed_on(date.month(), date.day());
        match self.options.fast_path {
            FastPathPolicy::Legacy => fixed.into_iter().exactly_one().ok().map(Rule::from),
            FastPathPolicy::OverridesFirst => {
                let year = date.year();
                let overridden = self
                    .repository
                    .all_year_overrides(year)
                    .into_iter()
                    .find(|r| resolve_year_override(r).ok() == Some(*date));
                match overridden {
                    Some(rule) => Some(rule.into()),
                    None => fixed
                        .into_iter()
                        .filter(|r| self.repository.year_override(&r.name, year).is_none())
                        .exactly_one()
                        .ok()
                        .map(Rule::from),
                }
            }
        }
    }
}
