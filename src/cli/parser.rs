use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchsum
/// CLI application to reconcile daily clock punches
#[derive(Parser)]
#[command(
    name = "punchsum",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: reconcile daily punches, detect the lunch break and project the target clock-out",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or update the daily work target
    Target {
        /// New target as H:MM (1-12 hours, 0-59 minutes), e.g. "7:24"
        target: Option<String>,

        #[arg(long = "show", help = "Print the stored daily target")]
        show: bool,
    },

    /// Reconcile a day of punches and print the summary
    Summary {
        /// Punch labels in source order (H:MM or HH:MM); unparsable labels
        /// are dropped, the rest are re-sorted chronologically
        punches: Vec<String>,

        /// One-shot target override (H:MM), not persisted
        #[arg(long = "target", value_name = "H:MM")]
        target: Option<String>,

        /// Inject the current wall-clock time (HH:MM); defaults to system time
        #[arg(long = "now", value_name = "HH:MM")]
        now: Option<String>,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,

        #[arg(long = "details", help = "Show the normalized punch table")]
        details: bool,
    },

    /// Export the computed summary in various formats
    Export {
        /// Punch labels in source order (H:MM or HH:MM)
        punches: Vec<String>,

        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// One-shot target override (H:MM), not persisted
        #[arg(long = "target", value_name = "H:MM")]
        target: Option<String>,

        /// Inject the current wall-clock time (HH:MM); defaults to system time
        #[arg(long = "now", value_name = "HH:MM")]
        now: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
