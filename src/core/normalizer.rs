//! Punch normalization: raw labels in source order become sorted,
//! minute-resolution punches.

use crate::models::clock_time::ClockTime;
use crate::models::punch::{Punch, RawPunch};

/// Turn raw `(label, position)` pairs into punches sorted ascending by
/// minute-of-day. Entries with an empty or unparsable label are dropped
/// before sorting. The sort is stable, so equal times keep source order.
pub fn normalize(raw: &[RawPunch]) -> Vec<Punch> {
    let mut punches: Vec<Punch> = raw
        .iter()
        .filter(|r| !r.label.trim().is_empty())
        .filter_map(|r| {
            ClockTime::parse(&r.label).map(|time| Punch {
                time,
                position: r.position,
            })
        })
        .collect();

    punches.sort_by_key(|p| p.time.minute_of_day());
    punches
}
