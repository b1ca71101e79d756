//! Time utilities: parsing HH:MM, wraparound durations, the lunch window.

use crate::core::breaks::LunchWindow;
use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use chrono::{Local, NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 1440;

/// Strict HH:MM parsing, used for operator-supplied values (`--now`,
/// targets, the config lunch window). Punch labels go through the
/// permissive `ClockTime::parse` instead.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn clock_from_naive(t: NaiveTime) -> ClockTime {
    ClockTime::new(t.hour() as i64, t.minute() as i64)
}

/// Current wall-clock reading, taken once per invocation.
pub fn now_clock() -> ClockTime {
    let now = Local::now();
    ClockTime::new(now.hour() as i64, now.minute() as i64)
}

/// Minutes from `start` to `end`, assuming a single day boundary when the
/// difference is negative. The boundary is assumed, never validated.
pub fn wrapped_duration(start_minute: i64, end_minute: i64) -> i64 {
    let mut diff = end_minute - start_minute;
    if diff < 0 {
        diff += MINUTES_PER_DAY;
    }
    diff
}

/// Parse an optional strict HH:MM argument (e.g. `--now`).
pub fn parse_optional_clock(input: Option<&String>) -> AppResult<Option<ClockTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(clock_from_naive(t)))
    } else {
        Ok(None)
    }
}

/// Parse a `HH:MM-HH:MM` lunch window expression from the config file.
pub fn parse_lunch_window(raw: &str) -> Option<LunchWindow> {
    let (start, end) = raw.trim().split_once('-')?;
    let start = parse_time(start.trim())?;
    let end = parse_time(end.trim())?;
    Some(LunchWindow::new(
        clock_from_naive(start).minute_of_day(),
        clock_from_naive(end).minute_of_day(),
    ))
}

/// Parse a daily target expressed as `H:MM` and validate its range
/// (1-12 hours, 0-59 minutes).
pub fn parse_target(raw: &str) -> AppResult<(i64, i64)> {
    let invalid = || AppError::InvalidTarget(raw.to_string());

    let (h, m) = raw.trim().split_once(':').ok_or_else(|| invalid())?;
    let hours = h.trim().parse::<i64>().map_err(|_| invalid())?;
    let minutes = m.trim().parse::<i64>().map_err(|_| invalid())?;

    if !(1..=12).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(invalid());
    }

    Ok((hours, minutes))
}
