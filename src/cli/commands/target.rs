use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::format_duration;
use crate::utils::time::parse_target;

/// Handle the `target` subcommand: show or persist the daily work target.
/// Updating the target never triggers a recomputation by itself.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Target { target, show } = &cli.command {
        if let Some(raw) = target {
            let (hours, minutes) = parse_target(raw)?;

            let mut updated = cfg.clone();
            updated.target_hours = hours;
            updated.target_minutes = minutes;

            if !cli.test {
                updated.save_to(&Config::resolve_file(cli.config.as_deref()))?;
            }

            success(format!(
                "Daily target set to {} ({} min)",
                format_duration(updated.target_total_minutes()),
                updated.target_total_minutes()
            ));
        }

        if *show || target.is_none() {
            info(format!(
                "Daily target: {} ({} min)",
                format_duration(cfg.target_total_minutes()),
                cfg.target_total_minutes()
            ));
        }
    }
    Ok(())
}
