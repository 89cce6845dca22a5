//! LogCalc library root.
//! Exposes the CLI parser, the high-level run() function and the engine,
//! store and persistence modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as cmd;

    match &cli.command {
        Commands::Init => cmd::init::handle(cli),
        Commands::Config { .. } => cmd::config::handle(&cli.command, cfg),
        Commands::Material { .. } => cmd::material::handle(&cli.command, cfg),
        Commands::Calc { .. } => cmd::calc::handle(&cli.command, cfg),
        Commands::Track { .. } => cmd::track::handle(&cli.command, cfg),
        Commands::History { .. } => cmd::history::handle(&cli.command, cfg),
        Commands::Shift { .. } => cmd::shift::handle(&cli.command, cfg),
        Commands::Logbook { .. } => cmd::logbook::handle(&cli.command, cfg),
        Commands::Export { .. } => cmd::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cmd::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db wins over the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
