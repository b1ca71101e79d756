use serde::{Serialize, Serializer};
use std::fmt;

/// A wall-clock reading at minute resolution.
///
/// Punch labels are parsed permissively: the two halves of `H:MM` are
/// converted to integers with no range validation, so a label like
/// "25:99" yields an out-of-range but non-crashing value that flows
/// through every downstream computation unchanged. This is why the
/// engine does not use `chrono::NaiveTime` for punches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: i64,
    pub minutes: i64,
}

impl ClockTime {
    pub fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }

    /// Parse an `H:MM` / `HH:MM` label. Returns `None` when the label has
    /// no `:` or either half is not an integer; range is NOT checked.
    pub fn parse(label: &str) -> Option<Self> {
        let clean = label.trim();
        let (h, m) = clean.split_once(':')?;
        let hours = h.trim().parse::<i64>().ok()?;
        let minutes = m.trim().parse::<i64>().ok()?;
        Some(Self { hours, minutes })
    }

    pub fn minute_of_day(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    pub fn from_minute_of_day(total: i64) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
