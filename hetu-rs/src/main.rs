//! Main entry point for the hetu-rs CLI

mod cli;
mod commands;
mod utils;

use anyhow::Result;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbosity
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    let settings = utils::load_settings(cli.settings.as_deref())?;

    // Execute command
    match cli.command {
        Commands::Catalog(args) => commands::catalog::execute(args),
        Commands::Sequence(args) => commands::sequence::execute(args),
        Commands::Modes(args) => commands::modes::execute(args),
        Commands::Circuit(args) => commands::circuit::execute(args, &settings),
        Commands::Simulate(args) => commands::simulate::execute(args, settings),
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Completions { shell } => {
            print_completions(shell, &mut Cli::command());
            Ok(())
        }
    }
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
