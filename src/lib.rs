//! rWorkdays library root.
//! Exposes the CLI parser, the high-level run() function and the analysis
//! engine (normalize → classify → coverage → reconcile).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use logging::{LogConfig, init_logging};
use std::io::IsTerminal;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics to stderr
    init_logging(
        &LogConfig::from_verbosity(cli.verbose).with_ansi(std::io::stderr().is_terminal()),
    );

    // 3️⃣ init writes the config, it never reads it
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli);
    }

    // 4️⃣ load config once; test mode ignores the user's file
    let cfg = if cli.test && cli.config.is_none() {
        Config::default()
    } else {
        Config::load(cli.config.as_deref())?
    };

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
