//! This is the documentation for holidays-rs
//!
//! Holidays are stored as rules, not dates: fixed dates, nth weekdays of a month, nth weekdays
//! after another weekday, and one-off overrides for a given year. The [`calendar`] module resolves
//! these rules for any year and answers whether a date is a holiday. Rules are read from a
//! [`RuleRepository`](calendar::RuleRepository) supplied by the caller.

#[cfg(test)]
mod tests;

pub mod errors;
pub mod json;

pub mod calendar;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Holidays
    m.add_class::<calendar::py::PyHolidayEngine>()?;

    Ok(())
}
