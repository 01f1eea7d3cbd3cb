// this_file: crates/cosm-cli/src/main.rs

//! Cosm CLI: glyph outlines from a directory of pixel bitmaps.

mod bitmap;
mod cli;
mod commands;
mod manifest;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Build(args) => commands::build::run(&args),
        Commands::Resolve(args) => commands::resolve::run(&args),
        Commands::Info(args) => commands::info::run(&args),
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
