//! Error types returned by rule resolution and holiday lookups.

use thiserror::Error;

use crate::calendar::HolidayName;

/// Result type for holiday operations.
pub type HolidayResult<T> = Result<T, HolidayError>;

/// Failures surfaced by the rule resolver and the [`HolidayEngine`](crate::calendar::HolidayEngine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    /// The `year`, `month` and `day` of a rule do not form a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// No rule of any kind exists for the name.
    #[error("holiday '{0}' cannot be found")]
    HolidayNotFound(HolidayName),

    /// Rules exist for the name but none of them gives a date in the requested year.
    #[error("holiday '{name}' is known but has no date for {year}; check its year overrides")]
    YearNotAvailable { name: HolidayName, year: i32 },

    /// A weekday scan reached the end of the month without satisfying its count.
    #[error("'{name}' has no matching day in {year:04}-{month:02}")]
    NotFound {
        name: HolidayName,
        year: i32,
        month: u32,
    },

    /// A rule was constructed with out-of-range values.
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}

impl HolidayError {
    pub(crate) fn invalid_date(year: i32, month: u32, day: u32) -> Self {
        HolidayError::InvalidDate { year, month, day }
    }
}

#[cfg(feature = "python")]
impl From<HolidayError> for pyo3::PyErr {
    fn from(err: HolidayError) -> Self {
        use pyo3::exceptions::{PyKeyError, PyValueError};
        match err {
            HolidayError::HolidayNotFound(_) | HolidayError::YearNotAvailable { .. } => {
                PyKeyError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
