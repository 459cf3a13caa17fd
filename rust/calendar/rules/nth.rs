use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::errors::HolidayError;

/// Occurrence of a weekday within a month for an [`NthWeekdayRule`](crate::calendar::NthWeekdayRule).
///
/// Stored as the integers 1 to 5, where 5 is **not** a literal fifth occurrence but the last
/// occurrence of the weekday in the month.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Nth {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    /// The final occurrence in the month, which may be the fourth or the fifth.
    Last = 5,
}

impl Nth {
    /// The number of forward matches to count, or `None` for [`Nth::Last`].
    pub fn count(&self) -> Option<usize> {
        match self {
            Nth::Last => None,
            _ => Some(*self as usize),
        }
    }
}

impl TryFrom<u8> for Nth {
    type Error = HolidayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Nth::First),
            2 => Ok(Nth::Second),
            3 => Ok(Nth::Third),
            4 => Ok(Nth::Fourth),
            5 => Ok(Nth::Last),
            _ => Err(HolidayError::InvalidRule(format!(
                "`nth` must be in 1..=5 (5 = last), got {}",
                value
            ))),
        }
    }
}

impl From<Nth> for u8 {
    fn from(item: Nth) -> Self {
        item as u8
    }
}

impl fmt::Display for Nth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Nth::First => "First",
            Nth::Second => "Second",
            Nth::Third => "Third",
            Nth::Fourth => "Fourth",
            Nth::Last => "Last",
        };
        f.write_str(label)
    }
}
