pub mod config;
pub mod export;
pub mod init;
pub mod summary;
pub mod target;

use crate::config::Config;
use crate::core::logic::ComputeParams;
use crate::errors::AppResult;
use crate::models::punch::RawPunch;
use crate::utils::time::{now_clock, parse_optional_clock, parse_target};

/// Build the per-run engine inputs shared by `summary` and `export`:
/// target (CLI override or stored config), lunch window from config,
/// wall clock read once (or injected via --now).
pub(crate) fn resolve_params(
    cfg: &Config,
    target: Option<&String>,
    now: Option<&String>,
) -> AppResult<ComputeParams> {
    let target_minutes = match target {
        Some(raw) => {
            let (hours, minutes) = parse_target(raw)?;
            hours * 60 + minutes
        }
        None => cfg.target_total_minutes(),
    };

    let now = parse_optional_clock(now)?.unwrap_or_else(now_clock);

    Ok(ComputeParams {
        target_minutes,
        lunch_window: cfg.lunch_window()?,
        now,
    })
}

/// Argv order is the opaque source position of each punch.
pub(crate) fn to_raw_punches(labels: &[String]) -> Vec<RawPunch> {
    labels
        .iter()
        .enumerate()
        .map(|(position, label)| RawPunch::new(label.clone(), position))
        .collect()
}
