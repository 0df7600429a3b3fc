//! chemlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod sink;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Courses => cli::commands::courses::handle(cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply command-line overrides
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(std::path::Path::new(path)),
        None => Config::load(),
    };

    if let Some(custom_workbook) = &cli.workbook {
        cfg.workbook = custom_workbook.clone();
    }

    dispatch(&cli, &cfg)
}
