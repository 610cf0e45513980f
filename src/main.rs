//! layoutcat - keyboard layout catalog packer
//!
//! Packs a directory of keyboard layout description files into a single
//! compact catalog, and decodes catalog entries back for inspection.

// Module declarations
mod cli;
mod config;
mod constants;
mod models;
mod packing;
mod parser;
mod services;

use clap::{Parser, Subcommand};
use cli::{CliResult, InspectArgs, PackArgs, UnpackArgs};

/// Keyboard layout catalog packer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a directory of layout files into a catalog
    Pack(PackArgs),
    /// Decode a catalog entry back into per-key positions
    Unpack(UnpackArgs),
    /// Show a layout's packed string and key matrix
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let result: CliResult<()> = match cli.command {
        Commands::Pack(args) => args.execute(),
        Commands::Unpack(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code() as i32);
    }
}
