// File: services/bookagame_cli/src/main.rs
use bookagame_api::error_message;
use bookagame_common::logging;
use bookagame_config::load_config;
use clap::Parser;

mod app_context;
mod cli;
mod commands;
mod output;

use app_context::AppContext;
use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    logging::init_with_level(logging::parse_level(level));

    let ctx = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            std::process::exit(2);
        }
    };

    if let Err(e) = commands::run(&ctx, cli.command, cli.json).await {
        logging::log_error(&e, "command failed");
        eprintln!("Error: {}", error_message(&e));
        std::process::exit(1);
    }
}
