pub mod breaks;
pub mod calculator;
pub mod logic;
pub mod normalizer;

/// Minimum lunch break assumed when no midday gap was detected.
pub const MIN_LUNCH_BREAK_MINUTES: i64 = 45;

/// Default daily work target: 7h24 = 444 minutes.
pub const DEFAULT_TARGET_MINUTES: i64 = 7 * 60 + 24;
