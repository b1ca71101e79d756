//! Lunch-break detection over the gaps between paired work periods.

use crate::models::clock_time::ClockTime;
use crate::models::punch::Punch;
use crate::utils::time::wrapped_duration;
use serde::Serialize;

/// Heuristic time-of-day range used to recognize a midday gap as the
/// lunch break. Bounds are minute-of-day, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunchWindow {
    pub start_minute: i64,
    pub end_minute: i64,
}

impl LunchWindow {
    pub fn new(start_minute: i64, end_minute: i64) -> Self {
        Self {
            start_minute,
            end_minute,
        }
    }

    pub fn contains(&self, minute_of_day: i64) -> bool {
        minute_of_day >= self.start_minute && minute_of_day <= self.end_minute
    }
}

impl Default for LunchWindow {
    /// 11:30 - 14:15
    fn default() -> Self {
        Self::new(11 * 60 + 30, 14 * 60 + 15)
    }
}

/// A detected lunch break: the gap between an out punch and the next in
/// punch. `start_index` is the index of the out punch in the sorted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunchBreak {
    pub start_index: usize,
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: i64,
}

/// Find the lunch break among the gaps at odd punch indexes (the time
/// between work periods). A gap qualifies when either endpoint falls in
/// the window; lunches often start before 11:30 or end after 14:15, and
/// one endpoint in range is enough to recognize them. Among qualifying
/// gaps the longest wins, first seen kept on ties. Needs at least 3
/// punches (one full period plus a following punch).
pub fn find_lunch_break(punches: &[Punch], window: &LunchWindow) -> Option<LunchBreak> {
    if punches.len() < 3 {
        return None;
    }

    let mut best: Option<LunchBreak> = None;
    let mut best_duration = 0i64;

    let mut i = 1;
    while i + 1 < punches.len() {
        let start = punches[i].time;
        let end = punches[i + 1].time;

        if window.contains(start.minute_of_day()) || window.contains(end.minute_of_day()) {
            let duration = wrapped_duration(start.minute_of_day(), end.minute_of_day());

            if duration > best_duration {
                best_duration = duration;
                best = Some(LunchBreak {
                    start_index: i,
                    start,
                    end,
                    duration_minutes: duration,
                });
            }
        }

        i += 2;
    }

    best
}
