use super::clock_time::ClockTime;
use serde::Serialize;

/// A raw punch as supplied by the caller: the time label as it appeared
/// in the source log, plus the original position in that log. The label
/// may be empty or unparsable; the normalizer drops those entries.
#[derive(Debug, Clone)]
pub struct RawPunch {
    pub label: String,
    pub position: usize,
}

impl RawPunch {
    pub fn new<S: Into<String>>(label: S, position: usize) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// A normalized punch: parsed time plus the original source position.
/// Pairing always follows the sorted order, never the source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Punch {
    pub time: ClockTime,
    pub position: usize,
}
