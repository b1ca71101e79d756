use crate::models::clock_time::ClockTime;
use crate::models::punch::Punch;
use crate::utils::time::wrapped_duration;
use serde::Serialize;

/// A paired (in, out) interval. Pairing is positional on the sorted
/// punch list: period `k` uses punches `2k` and `2k+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkPeriod {
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: i64,
}

/// The unterminated period from the last punch to "now". Present only
/// when the punch count is odd; rebuilt on every run, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenPeriod {
    pub start: ClockTime,
    pub end: ClockTime,
    pub duration_minutes: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub periods: Vec<WorkPeriod>,
    pub open_period: Option<OpenPeriod>,
    pub total_worked_minutes: i64,
}

/// Pair sorted punches into work periods and accumulate the total.
/// `end < start` assumes a day boundary and adds 1440 minutes.
pub fn build_timeline(punches: &[Punch], now: ClockTime) -> Timeline {
    let mut periods = Vec::new();
    let mut total = 0;

    let mut i = 0;
    while i + 1 < punches.len() {
        let start = punches[i].time;
        let end = punches[i + 1].time;
        let duration = wrapped_duration(start.minute_of_day(), end.minute_of_day());

        total += duration;
        periods.push(WorkPeriod {
            start,
            end,
            duration_minutes: duration,
        });

        i += 2;
    }

    // Odd punch count: the last punch opens a live period ending at "now".
    let open_period = if punches.len() % 2 != 0 {
        let start = punches[punches.len() - 1].time;
        let duration = wrapped_duration(start.minute_of_day(), now.minute_of_day());
        total += duration;

        Some(OpenPeriod {
            start,
            end: now,
            duration_minutes: duration,
        })
    } else {
        None
    };

    Timeline {
        periods,
        open_period,
        total_worked_minutes: total,
    }
}
