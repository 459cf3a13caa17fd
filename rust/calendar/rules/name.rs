use internment::Intern;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The identity of a holiday, e.g. *"Christmas"* or *"Election Day"*.
///
/// Names are interned so that copying and comparing them, which the engine does for every
/// repository lookup, is cheap. Names are case sensitive and need not be unique across rule
/// kinds: several rule records may share one name and precedence decides between them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayName {
    pub(crate) name: Intern<String>,
}

impl HolidayName {
    /// Constructs a new `HolidayName`.
    pub fn new(name: &str) -> Self {
        HolidayName {
            name: Intern::new(name.to_string()),
        }
    }

    /// Return the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl From<&str> for HolidayName {
    fn from(item: &str) -> Self {
        HolidayName::new(item)
    }
}

impl From<String> for HolidayName {
    fn from(item: String) -> Self {
        HolidayName {
            name: Intern::new(item),
        }
    }
}

impl fmt::Display for HolidayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for HolidayName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HolidayName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_equality() {
        let a = HolidayName::new("Christmas");
        let b = HolidayName::from("Christmas");
        assert_eq!(a, b);
        assert_ne!(a, HolidayName::new("christmas"));
    }

    #[test]
    fn name_ordering() {
        let mut names = vec![
            HolidayName::new("MLK Day"),
            HolidayName::new("Christmas"),
            HolidayName::new("Election Day"),
        ];
        names.sort();
        let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Christmas", "Election Day", "MLK Day"]);
    }
}
