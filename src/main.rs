mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use course_organizer::AppConfig;
use dotenv::dotenv;
use std::process;
use tracing::error;

fn main() {
    dotenv().ok();

    let args = Cli::parse();

    let _guard = logging::init_logger();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let result = match &args.command {
        Commands::Generate(generate) => commands::run_generate(&config, generate),
        Commands::Symlink(symlink) => commands::run_symlink(symlink),
        Commands::Full(full) => commands::run_full(&config, full),
        Commands::PrintConfig => commands::run_print_config(&config),
    };

    if let Err(err) = result {
        error!("{:#}", err);
        drop(_guard);
        process::exit(1);
    }
}
