//! paysched library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
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
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Balance { .. } => cli::commands::balance::handle(&cli.command, cfg),
        Commands::Date { .. } => cli::commands::date::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load the config once
    let mut cfg = Config::load();

    // apply the data-file override from the command line, if any
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }

    dispatch(&cli, &cfg)
}
