use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::format_duration;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing punchsum…");

    let path = Config::init_all(cli.config.as_deref(), cli.test)?;
    let cfg = Config::load_from(&path)?;

    println!("📄 Config file : {}", path.display());
    println!(
        "🎯 Daily target: {} | Lunch window: {}",
        format_duration(cfg.target_total_minutes()),
        cfg.lunch_window
    );

    success("punchsum initialization completed!");
    Ok(())
}
