//! Root CLI structure for hetu-rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    catalog::CatalogArgs, circuit::CircuitArgs, modes::ModesArgs, sequence::SequenceArgs,
    simulate::SimulateArgs, tree::TreeArgs,
};

#[derive(Parser)]
#[command(name = "hetu-rs")]
#[command(about = "Explore the He Tu and Luo Shu diagrams from the command line", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Animation settings file (.yaml, .yml or .json)
    #[arg(long, global = true, env = "HETU_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the points of a diagram
    Catalog(CatalogArgs),

    /// Order points along a group sequence
    Sequence(SequenceArgs),

    /// Show He Tu galaxy or helix parameters
    Modes(ModesArgs),

    /// Sample the Luo Shu energy circuit
    Circuit(CircuitArgs),

    /// Run a scripted animation and report the timeline
    Simulate(SimulateArgs),

    /// Show the zone and group hierarchy of a diagram
    Tree(TreeArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
