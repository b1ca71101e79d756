use crate::core::MIN_LUNCH_BREAK_MINUTES;
use crate::core::breaks::{self, LunchWindow};
use crate::core::calculator::{projection, surplus, timeline};
use crate::core::normalizer;
use crate::models::clock_time::ClockTime;
use crate::models::day_summary::DaySummary;
use crate::models::punch::RawPunch;

/// Per-run inputs. Everything the computation depends on is passed in
/// explicitly; the wall-clock reading is taken once by the caller so a
/// single run stays internally consistent.
#[derive(Debug, Clone, Copy)]
pub struct ComputeParams {
    pub target_minutes: i64,
    pub lunch_window: LunchWindow,
    pub now: ClockTime,
}

pub struct Engine;

impl Engine {
    /// Reconcile one day of punches. Returns `None` when no valid punch
    /// survives normalization (a valid empty-day state, not an error).
    /// Re-running with identical punches, target and `now` yields an
    /// identical summary.
    pub fn compute(raw: &[RawPunch], params: &ComputeParams) -> Option<DaySummary> {
        let punches = normalizer::normalize(raw);
        if punches.is_empty() {
            return None;
        }

        let lunch_break = breaks::find_lunch_break(&punches, &params.lunch_window);
        let timeline = timeline::build_timeline(&punches, params.now);
        let surplus_minutes = surplus::calculate_surplus(&timeline, params.target_minutes);

        // Informational assumed-lunch flag. Keyed on the period count, NOT
        // on the punch-count condition used inside the projection.
        let assume_lunch = lunch_break.is_none()
            && (timeline.periods.len() > 1
                || (timeline.periods.len() == 1 && timeline.open_period.is_some()));
        let lunch_adjustment_minutes = if assume_lunch {
            MIN_LUNCH_BREAK_MINUTES
        } else {
            0
        };

        let projection = projection::calculate_target_clock_out(
            punches.len(),
            timeline.total_worked_minutes,
            lunch_break.is_some(),
            params.target_minutes,
            params.now,
        );

        Some(DaySummary {
            punches,
            timeline,
            lunch_break,
            lunch_adjustment_minutes,
            target_minutes: params.target_minutes,
            surplus_minutes,
            projection,
        })
    }
}
