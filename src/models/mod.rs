pub mod clock_time;
pub mod day_summary;
pub mod projection;
pub mod punch;
