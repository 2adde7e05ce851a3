//! obras library root.
//! Exposes the CLI parser, the high-level run() function, the backend
//! client and the screen controllers.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod device;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use api::ApiClient;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Site { action } => {
            let api = ApiClient::http(&cfg.api_url);
            cli::commands::site::handle(action, cfg, &api, use_color(cli))
        }
        Commands::Inspection { action } => {
            let api = ApiClient::http(&cfg.api_url);
            cli::commands::inspection::handle(action, cfg, &api, use_color(cli))
        }
    }
}

fn use_color(cli: &Cli) -> bool {
    !cli.no_color && std::env::var_os("NO_COLOR").is_none()
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once and resolve the backend address
    let mut cfg = match (Config::load(), &cli.command) {
        (Ok(cfg), _) => cfg,
        // a broken file must not lock out the commands that repair it
        (Err(e), Commands::Config { .. }) => {
            ui::messages::warning(format!("{e}; using default settings"));
            Config::default()
        }
        (Err(e), _) => return Err(e),
    };
    cfg.resolve_api_url(cli.api_url.as_deref());

    // 3️⃣ diagnostics
    logging::init(&cfg.log_level, cli.verbose);
    tracing::debug!(api_url = %cfg.api_url, "configuration resolved");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
