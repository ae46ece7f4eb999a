use crate::utils::Language;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rWorkdays
#[derive(Parser)]
#[command(
    name = "rworkdays",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check a yearly time-tracking export for missing days and count office, home-office and no-work days",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (ignore the user configuration file)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Analyze a time-tracking export (xlsx, xls, xlsb, ods or csv)
    ///
    /// Examples:
    ///   rworkdays analyze Monatsjournal_2024.xlsx
    ///   rworkdays analyze journal.xlsx --sheet 1 --bookings
    ///   rworkdays analyze export.csv --json
    Analyze {
        /// Export file to analyze
        file: PathBuf,

        /// Sheet name or 0-based index (workbooks only; default: first sheet)
        #[arg(long, value_name = "SHEET")]
        sheet: Option<String>,

        /// Booking type that marks a home-office day
        #[arg(long, value_name = "TEXT")]
        label: Option<String>,

        /// Language of month names in the report
        #[arg(long, value_enum)]
        lang: Option<Language>,

        /// List every parsed booking with the category of its day
        #[arg(long, short = 'b', conflicts_with = "json")]
        bookings: bool,

        /// Print the full report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}
