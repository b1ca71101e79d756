use super::clock_time::ClockTime;
use serde::Serialize;

/// Outcome of the target clock-out projection.
///
/// A closed set: `Exceeded`/`Completed` carry no remaining time,
/// `ClockedIn`/`ClockedOut` always do. The serialized `status` values
/// are part of the JSON output contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Projection {
    /// Clocked in and the target is already met.
    Exceeded,
    /// Clocked out and the target is already met.
    Completed,
    /// Clocked in: clock out at `target_clock_out` to meet the target.
    ClockedIn {
        target_clock_out: ClockTime,
        remaining_minutes: i64,
    },
    /// Clocked out with work still remaining.
    ClockedOut { remaining_minutes: i64 },
}

impl Projection {
    pub fn remaining_minutes(&self) -> Option<i64> {
        match self {
            Projection::ClockedIn {
                remaining_minutes, ..
            }
            | Projection::ClockedOut { remaining_minutes } => Some(*remaining_minutes),
            _ => None,
        }
    }
}
