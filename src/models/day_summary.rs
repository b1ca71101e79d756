use super::projection::Projection;
use super::punch::Punch;
use crate::core::breaks::LunchBreak;
use crate::core::calculator::timeline::Timeline;
use serde::Serialize;

/// The full result of one reconciliation run. This is the entire contract
/// handed to rendering and export; nothing is cached between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    /// Normalized punches, sorted by minute-of-day.
    pub punches: Vec<Punch>,
    pub timeline: Timeline,
    pub lunch_break: Option<LunchBreak>,
    /// Informational assumed-lunch minutes (0 when a break was detected or
    /// the day has too little structure to assume one). Does not change
    /// `total_worked_minutes`.
    pub lunch_adjustment_minutes: i64,
    pub target_minutes: i64,
    /// Worked minus target; negative means deficit.
    pub surplus_minutes: i64,
    pub projection: Projection,
}
