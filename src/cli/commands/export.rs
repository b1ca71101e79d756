use crate::cli::commands::{resolve_params, to_raw_punches};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        punches,
        format,
        file,
        target,
        now,
        force,
    } = cmd
    {
        let params = resolve_params(cfg, target.as_ref(), now.as_ref())?;
        let raw = to_raw_punches(punches);

        match Engine::compute(&raw, &params) {
            None => warning("No usable punch data — nothing to export."),
            Some(summary) => ExportLogic::export(&summary, format, file, *force)?,
        }
    }
    Ok(())
}
