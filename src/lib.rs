//! attendlog library root.
//! Exposes the CLI parser, the high-level run() function and the ledger
//! core used by the integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::handle_init(cli, cfg),
        Commands::Login => commands::handle_login(cli, cfg),
        Commands::Register {
            user_id,
            display_name,
            role,
        } => commands::handle_register(cli, cfg, user_id, display_name, *role),
        Commands::Users { delete } => commands::handle_users(cli, cfg, delete),
        Commands::In => commands::handle_in(cli, cfg),
        Commands::Out { session } => commands::handle_out(cli, cfg, session),
        Commands::Auto => commands::handle_auto(cli, cfg),
        Commands::ForceOut { session_id } => commands::handle_force_out(cli, cfg, session_id),
        Commands::Sessions => commands::handle_sessions(cfg),
        Commands::Records => commands::handle_records(cli, cfg),
        Commands::Export {
            format,
            file,
            force,
        } => commands::handle_export(cli, cfg, *format, file, *force),
        Commands::Exports { copy, file } => commands::handle_exports(cli, cfg, copy, file),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once, then apply the CLI override for the data dir
    let mut cfg = Config::load();
    if let Some(custom_dir) = &cli.data_dir {
        cfg.data_dir = custom_dir.clone();
    }

    dispatch(&cli, &cfg)
}
