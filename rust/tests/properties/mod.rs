use crate::calendar::{
    resolve_fixed, resolve_nth_weekday, ymd, FixedRule, HolidayEngine, MemoryRepository, Nth,
    NthWeekdayAfterRule, NthWeekdayRule, Rule, YearOverrideRule,
};
use crate::errors::HolidayError;
use chrono::prelude::*;

const YEARS: std::ops::RangeInclusive<i32> = 1990..=2060;

fn weekdays() -> Vec<u8> {
    (0..7).collect()
}

fn us_federal() -> MemoryRepository {
    MemoryRepository::from_rules(vec![
        Rule::from(FixedRule::try_new("New Year's Day", 1, 1).unwrap()),
        NthWeekdayRule::try_new("MLK Day", 1, 0, 3).unwrap().into(),
        NthWeekdayRule::try_new("Presidents Day", 2, 0, 3).unwrap().into(),
        NthWeekdayRule::try_new("Memorial Day", 5, 0, 5).unwrap().into(),
        FixedRule::try_new("Juneteenth", 6, 19).unwrap().into(),
        FixedRule::try_new("Independence Day", 7, 4).unwrap().into(),
        NthWeekdayRule::try_new("Labor Day", 9, 0, 1).unwrap().into(),
        NthWeekdayAfterRule::try_new("Election Day", 11, 1, 1, 0, 1)
            .unwrap()
            .into(),
        FixedRule::try_new("Veterans Day", 11, 11).unwrap().into(),
        NthWeekdayRule::try_new("Thanksgiving", 11, 3, 4).unwrap().into(),
        FixedRule::try_new("Christmas", 12, 25).unwrap().into(),
        YearOverrideRule::try_new("Easter", 2024, 3, 31).unwrap().into(),
        YearOverrideRule::try_new("Easter", 2025, 4, 20).unwrap().into(),
        YearOverrideRule::try_new("Independence Day", 2026, 7, 3)
            .unwrap()
            .into(),
    ])
}

#[test]
fn fixed_resolves_to_exact_date() {
    for month in 1..=12 {
        for day in 1..=31 {
            let rule = match FixedRule::try_new("F", month, day) {
                Ok(r) => r,
                Err(_) => continue,
            };
            for year in YEARS {
                match NaiveDate::from_ymd_opt(year, month, day) {
                    Some(date) => assert_eq!(resolve_fixed(&rule, year).unwrap(), date),
                    None => assert!(matches!(
                        resolve_fixed(&rule, year),
                        Err(HolidayError::InvalidDate { .. })
                    )),
                }
            }
        }
    }
}

#[test]
fn nth_weekday_is_nth_match_from_first() {
    for year in YEARS {
        for month in 1..=12 {
            for dow in weekdays() {
                for nth in 1..=4u8 {
                    let rule = NthWeekdayRule::try_new("N", month, dow, nth).unwrap();
                    let date = resolve_nth_weekday(&rule, year).unwrap();
                    assert_eq!(date.month(), month);
                    assert_eq!(date.weekday().num_days_from_monday() as u8, dow);
                    // exactly nth - 1 earlier matches in the month
                    let earlier = (1..date.day())
                        .filter(|d| {
                            ymd(year, month, *d).weekday() == date.weekday()
                        })
                        .count();
                    assert_eq!(earlier, (nth - 1) as usize);
                }
            }
        }
    }
}

#[test]
fn last_weekday_has_no_later_match() {
    for year in YEARS {
        for month in 1..=12 {
            for dow in weekdays() {
                let rule = NthWeekdayRule::try_new("L", month, dow, 5).unwrap();
                assert_eq!(rule.nth(), Nth::Last);
                let date = resolve_nth_weekday(&rule, year).unwrap();
                assert_eq!(date.month(), month);
                assert_eq!(date.weekday().num_days_from_monday() as u8, dow);
                let next = date + chrono::Days::new(7);
                assert_ne!(next.month(), month);
            }
        }
    }
}

#[test]
fn override_precedence_over_fixed() {
    let engine = HolidayEngine::new(us_federal());
    assert_eq!(
        engine.resolve("Independence Day", 2026).unwrap(),
        ymd(2026, 7, 3)
    );
    assert_eq!(
        engine.resolve("Independence Day", 2027).unwrap(),
        ymd(2027, 7, 4)
    );
}

#[test]
fn is_holiday_round_trip() {
    let engine = HolidayEngine::new(us_federal());
    for year in YEARS {
        for name in engine.list_names() {
            let date = match engine.resolve_name(&name, year) {
                Ok(d) => d,
                Err(HolidayError::YearNotAvailable { .. }) => continue,
                Err(e) => panic!("unexpected error {}", e),
            };
            let rule = engine.is_holiday(&date).unwrap();
            assert_eq!(rule.name(), name, "{} in {}", name, year);
        }
    }
}

#[test]
fn holidays_for_year_agree_with_resolve() {
    let engine = HolidayEngine::new(us_federal());
    for year in YEARS {
        for (rule, date) in engine.holidays_for_year(year) {
            assert_eq!(engine.resolve_name(&rule.name(), year).unwrap(), date);
        }
    }
}

#[test]
fn unknown_holiday() {
    let engine = HolidayEngine::new(us_federal());
    assert!(matches!(
        engine.resolve("NotARealHoliday", 2024),
        Err(HolidayError::HolidayNotFound(_))
    ));
}

#[test]
fn concrete_scenarios() {
    let engine = HolidayEngine::new(us_federal());
    assert_eq!(engine.resolve("MLK Day", 2024).unwrap(), ymd(2024, 1, 15));
    assert_eq!(engine.resolve("Election Day", 2024).unwrap(), ymd(2024, 11, 5));
    for year in YEARS {
        assert_eq!(engine.resolve("Christmas", year).unwrap(), ymd(year, 12, 25));
    }
    let feb_30 = FixedRule {
        name: "Bad".into(),
        month: 2,
        day: 30,
    };
    for year in YEARS {
        assert!(matches!(
            resolve_fixed(&feb_30, year),
            Err(HolidayError::InvalidDate { .. })
        ));
    }
}

#[test]
fn election_day_is_never_first_of_november() {
    let engine = HolidayEngine::new(us_federal());
    for year in YEARS {
        let date = engine.resolve("Election Day", year).unwrap();
        assert_eq!(date.weekday(), Weekday::Tue);
        assert!((2..=8).contains(&date.day()));
    }
}
