mod cli;
mod config;
mod preview;
mod remap;

use anyhow::Result;
use clap::Parser;
use colored::*;
use is_terminal::IsTerminal;
use log::LevelFilter;

use cli::{Cli, Commands};
use cli::commands::config::handle_config_command;
use cli::commands::generate::handle_generate_command;
use config::Config;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(err) = run(cli) {
        log::debug!("Run failed: {:?}", err);
        eprintln!("{} {:#}", "❌ Error occurred:".bright_red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => handle_generate_command(args, &Config::load()?),
        Commands::Config(command) => handle_config_command(command),
    }
}

/// Verbosity picks the default level, RUST_LOG overrides it
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
