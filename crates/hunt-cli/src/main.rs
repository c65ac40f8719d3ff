//! Terminal front end for Hunt the Wumpus.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use hunt_core::STARTING_ARROWS;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hunt",
    about = "Hunt the Wumpus in a dodecahedral cave system",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log dungeon events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter the caves and hunt interactively
    Play {
        /// RNG seed for a reproducible dungeon (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Arrows in the quiver at the start of each hunt
        #[arg(
            short,
            long,
            default_value_t = STARTING_ARROWS,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        arrows: u32,
    },

    /// Print which caves connect to which
    Map,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { seed, arrows } => commands::play::run(seed, arrows),
        Commands::Map => commands::map::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr so narration on stdout stays clean. `RUST_LOG` adds filters.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
