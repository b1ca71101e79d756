use crate::core::calculator::timeline::Timeline;

/// Worked minus target. Negative means the day is still in deficit.
pub fn calculate_surplus(timeline: &Timeline, target_minutes: i64) -> i64 {
    timeline.total_worked_minutes - target_minutes
}
