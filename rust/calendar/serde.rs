use crate::calendar::{
    EngineOptions, FixedRule, MemoryRepository, NthWeekdayAfterRule, NthWeekdayRule, Rule,
    YearOverrideRule,
};
use crate::json::JSON;

impl JSON for FixedRule {}
impl JSON for NthWeekdayRule {}
impl JSON for NthWeekdayAfterRule {}
impl JSON for YearOverrideRule {}
impl JSON for Rule {}
impl JSON for MemoryRepository {}
impl JSON for EngineOptions {}
