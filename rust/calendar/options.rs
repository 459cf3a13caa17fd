use serde::{Deserialize, Serialize};

/// How [`HolidayEngine::is_holiday`](crate::calendar::HolidayEngine::is_holiday) treats fixed
/// rules before falling back to resolving every holiday of the year.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FastPathPolicy {
    /// Return the fixed rule matching the month and day straight away, when there is exactly
    /// one.
    ///
    /// A year override which moves that holiday to another date in the same year is not
    /// consulted, so the fixed rule is reported on its usual date even though
    /// [`resolve`](crate::calendar::HolidayEngine::resolve) gives the override's date.
    Legacy,
    /// Check the year's overrides first and skip fixed rules whose name is overridden in that
    /// year, so `is_holiday` always agrees with `resolve`.
    ///
    /// With either policy, several fixed rules sharing the month and day fall back to the scan.
    #[default]
    OverridesFirst,
}

/// The order of rules and holidays returned for a year.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnumerationOrder {
    /// Whatever order the repository returns, grouped by rule kind. Callers must not depend on it.
    #[default]
    Repository,
    /// Stable sort by resolved date; rules which fail to resolve are placed last.
    ByDate,
}

/// Configuration of a [`HolidayEngine`](crate::calendar::HolidayEngine).
///
/// Missing fields take their default when deserialized:
/// ```rust
/// # use holidays::calendar::{EngineOptions, EnumerationOrder, FastPathPolicy};
/// # use holidays::json::JSON;
/// let options = EngineOptions::from_json(r#"{"enumeration": "ByDate"}"#).unwrap();
/// assert_eq!(options.enumeration, EnumerationOrder::ByDate);
/// assert_eq!(options.fast_path, FastPathPolicy::OverridesFirst);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub fast_path: FastPathPolicy,
    pub enumeration: EnumerationOrder,
}

impl EngineOptions {
    /// Options with the unconditional fixed-date fast path and repository ordering.
    pub fn legacy() -> Self {
        EngineOptions {
            fast_path: FastPathPolicy::Legacy,
            enumeration: EnumerationOrder::Repository,
        }
    }
}
