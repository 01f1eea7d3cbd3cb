// this_file: crates/cosm-cli/src/cli.rs

//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cosm - dot-and-pill glyph outlines from pixel bitmaps
#[derive(Parser, Debug)]
#[command(name = "cosm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG still applies)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every glyph bitmap in a directory and write a manifest
    #[command(alias = "b")]
    Build(BuildArgs),

    /// Show which character a bitmap file stem stands for
    #[command(alias = "r")]
    Resolve(ResolveArgs),

    /// Print the effective font configuration as JSON
    #[command(alias = "i")]
    Info(InfoArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Directory of glyph bitmaps (*.png)
    #[arg(short, long, default_value = "glyphs")]
    pub glyphs: PathBuf,

    /// Manifest output path
    #[arg(short, long, default_value = "Cosm.json")]
    pub output: PathBuf,

    /// Also write one SVG import document per glyph into this directory
    #[arg(long = "svg-dir")]
    pub svg_dir: Option<PathBuf>,

    /// JSON file overriding the built-in font configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Worker threads (0 = number of CPUs)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Keep placed outlines as they are (no rounding, pruning or reorientation)
    #[arg(long)]
    pub raw: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// File stems to resolve, e.g. `a`, `_a`, `_.`
    #[arg(required = true)]
    pub stems: Vec<String>,

    /// JSON file overriding the built-in font configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// JSON file overriding the built-in font configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
