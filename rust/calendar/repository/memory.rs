use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::calendar::repository::RuleRepository;
use crate::calendar::rules::{
    FixedRule, HolidayName, NthWeekdayAfterRule, NthWeekdayRule, Rule, YearOverrideRule,
};

/// An in-memory store of holiday rules, kept in insertion order.
///
/// Adding a rule replaces any existing rule of the same kind for the same name (and year, for
/// overrides) while keeping its original position.
///
/// Serializes as lists of rule records, one per rule kind:
/// ```rust
/// # use holidays::calendar::{MemoryRepository, RuleRepository};
/// # use holidays::json::JSON;
/// let json = r#"{
///     "fixed": [{"name": "Christmas", "month": 12, "day": 25}],
///     "nth_weekday": [{"name": "MLK Day", "month": 1, "day_of_week": 0, "nth": 3}]
/// }"#;
/// let repo = MemoryRepository::from_json(json).unwrap();
/// assert_eq!(repo.distinct_names().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RuleSetDataModel", into = "RuleSetDataModel")]
pub struct MemoryRepository {
    fixed: IndexMap<HolidayName, FixedRule>,
    nth_weekday: IndexMap<HolidayName, NthWeekdayRule>,
    nth_weekday_after: IndexMap<HolidayName, NthWeekdayAfterRule>,
    year_overrides: IndexMap<(HolidayName, i32), YearOverrideRule>,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct RuleSetDataModel {
    fixed: Vec<FixedRule>,
    nth_weekday: Vec<NthWeekdayRule>,
    nth_weekday_after: Vec<NthWeekdayAfterRule>,
    year_overrides: Vec<YearOverrideRule>,
}

impl std::convert::From<RuleSetDataModel> for MemoryRepository {
    fn from(model: RuleSetDataModel) -> Self {
        let mut repo = MemoryRepository::new();
        model.fixed.into_iter().for_each(|r| repo.add_fixed(r));
        model
            .nth_weekday
            .into_iter()
            .for_each(|r| repo.add_nth_weekday(r));
        model
            .nth_weekday_after
            .into_iter()
            .for_each(|r| repo.add_nth_weekday_after(r));
        model
            .year_overrides
            .into_iter()
            .for_each(|r| repo.add_year_override(r));
        repo
    }
}

impl std::convert::From<MemoryRepository> for RuleSetDataModel {
    fn from(repo: MemoryRepository) -> Self {
        RuleSetDataModel {
            fixed: repo.fixed.into_values().collect(),
            nth_weekday: repo.nth_weekday.into_values().collect(),
            nth_weekday_after: repo.nth_weekday_after.into_values().collect(),
            year_overrides: repo.year_overrides.into_values().collect(),
        }
    }
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository from rules of any kind.
    pub fn from_rules<I: IntoIterator<Item = Rule>>(rules: I) -> Self {
        let mut repo = Self::new();
        rules.into_iter().for_each(|r| repo.add(r));
        repo
    }

    /// Add a rule of any kind.
    pub fn add(&mut self, rule: Rule) {
        match rule {
            Rule::YearOverride(r) => self.add_year_override(r),
            Rule::Fixed(r) => self.add_fixed(r),
            Rule::NthWeekday(r) => self.add_nth_weekday(r),
            Rule::NthWeekdayAfter(r) => self.add_nth_weekday_after(r),
        }
    }

    pub fn add_fixed(&mut self, rule: FixedRule) {
        self.fixed.insert(rule.name, rule);
    }

    pub fn add_nth_weekday(&mut self, rule: NthWeekdayRule) {
        self.nth_weekday.insert(rule.name, rule);
    }

    pub fn add_nth_weekday_after(&mut self, rule: NthWeekdayAfterRule) {
        self.nth_weekday_after.insert(rule.name, rule);
    }

    pub fn add_year_override(&mut self, rule: YearOverrideRule) {
        self.year_overrides.insert((rule.name, rule.year), rule);
    }

    /// Returns the total number of rules held.
    pub fn len(&self) -> usize {
        self.fixed.len()
            + self.nth_weekday.len()
            + self.nth_weekday_after.len()
            + self.year_overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RuleRepository for MemoryRepository {
    fn year_override(&self, name: &HolidayName, year: i32) -> Option<YearOverrideRule> {
        self.year_overrides.get(&(*name, year)).cloned()
    }

    fn fixed(&self, name: &HolidayName) -> Option<FixedRule> {
        self.fixed.get(name).cloned()
    }

    fn nth_weekday(&self, name: &HolidayName) -> Option<NthWeekdayRule> {
        self.nth_weekday.get(name).cloned()
    }

    fn nth_weekday_after(&self, name: &HolidayName) -> Option<NthWeekdayAfterRule> {
        self.nth_weekday_after.get(name).cloned()
    }

    fn all_fixed(&self) -> Vec<FixedRule> {
        self.fixed.values().cloned().collect()
    }

    fn all_nth_weekday(&self) -> Vec<NthWeekdayRule> {
        self.nth_weekday.values().cloned().collect()
    }

    fn all_nth_weekday_after(&self) -> Vec<NthWeekdayAfterRule> {
        self.nth_weekday_after.values().cloned().collect()
    }

    fn all_year_overrides(&self, year: i32) -> Vec<YearOverrideRule> {
        self.year_overrides
            .values()
            .filter(|r| r.year == year)
            .cloned()
            .collect()
    }

    fn distinct_names(&self) -> IndexSet<HolidayName> {
        self.fixed
            .keys()
            .chain(self.nth_weekday.keys())
            .chain(self.nth_weekday_after.keys())
            .chain(self.year_overrides.keys().map(|(name, _)| name))
            .copied()
            .collect()
    }

    fn contains_name(&self, name: &HolidayName) -> bool {
        self.fixed.contains_key(name)
            || self.nth_weekday.contains_key(name)
            || self.nth_weekday_after.contains_key(name)
            || self.year_overrides.keys().any(|(n, _)| n == name)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_repo() -> MemoryRepository {
        MemoryRepository::from_rules(vec![
            FixedRule::try_new("Christmas", 12, 25).unwrap().into(),
            NthWeekdayRule::try_new("MLK Day", 1, 0, 3).unwrap().into(),
            YearOverrideRule::try_new("Easter", 2024, 3, 31).unwrap().into(),
            YearOverrideRule::try_new("Easter", 2025, 4, 20).unwrap().into(),
        ])
    }

    #[test]
    fn test_lookups() {
        let repo = fixture_repo();
        let easter = HolidayName::new("Easter");
        assert_eq!(repo.year_override(&easter, 2025).unwrap().month(), 4);
        assert!(repo.year_override(&easter, 2026).is_none());
        assert!(repo.fixed(&HolidayName::new("Christmas")).is_some());
        assert!(repo.fixed(&HolidayName::new("MLK Day")).is_none());
        assert!(repo.nth_weekday(&HolidayName::new("MLK Day")).is_some());
        assert_eq!(repo.all_year_overrides(2024).len(), 1);
        assert_eq!(repo.len(), 4);
    }

    #[test]
    fn test_distinct_names() {
        let repo = fixture_repo();
        let distinct = repo.distinct_names();
        let names: Vec<&str> = distinct.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Christmas", "MLK Day", "Easter"]);
        assert!(repo.contains_name(&HolidayName::new("Easter")));
        assert!(!repo.contains_name(&HolidayName::new("Festivus")));
    }

    #[test]
    fn test_add_replaces_in_place() {
        let mut repo = fixture_repo();
        repo.add_fixed(FixedRule::try_new("New Year", 1, 1).unwrap());
        repo.add_fixed(FixedRule::try_new("Christmas", 12, 26).unwrap());
        let fixed = repo.all_fixed();
        assert_eq!(fixed.len(), 2);
        assert_eq!(fixed[0].day(), 26);
        assert_eq!(fixed[1].name().as_str(), "New Year");
    }

    #[test]
    fn test_fixed_on() {
        let repo = fixture_repo();
        assert_eq!(repo.fixed_on(12, 25).len(), 1);
        assert!(repo.fixed_on(12, 24).is_empty());
    }
}
