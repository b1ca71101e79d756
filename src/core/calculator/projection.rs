//! Target clock-out projection.

use crate::core::MIN_LUNCH_BREAK_MINUTES;
use crate::models::clock_time::ClockTime;
use crate::models::projection::Projection;
use crate::utils::time::MINUTES_PER_DAY;

/// Project the remaining work and, when clocked in, the wall-clock time
/// at which the daily target will be met.
///
/// The assumed-lunch addition here is keyed on the punch count (>= 2 and
/// no detected break); the informational flag on the summary uses a
/// different period-count condition. The two are intentionally kept as
/// separate predicates.
pub fn calculate_target_clock_out(
    punch_count: usize,
    total_worked_minutes: i64,
    lunch_detected: bool,
    target_minutes: i64,
    now: ClockTime,
) -> Projection {
    let mut remaining = target_minutes - total_worked_minutes;

    if !lunch_detected && punch_count >= 2 {
        remaining += MIN_LUNCH_BREAK_MINUTES;
    }

    if punch_count % 2 != 0 {
        // Currently clocked in.
        if remaining <= 0 {
            return Projection::Exceeded;
        }

        let mut target_out = now.minute_of_day() + remaining;
        if target_out >= MINUTES_PER_DAY {
            target_out -= MINUTES_PER_DAY;
        }

        Projection::ClockedIn {
            target_clock_out: ClockTime::from_minute_of_day(target_out),
            remaining_minutes: remaining,
        }
    } else {
        // Currently clocked out.
        if remaining <= 0 {
            return Projection::Completed;
        }

        Projection::ClockedOut {
            remaining_minutes: remaining,
        }
    }
}
