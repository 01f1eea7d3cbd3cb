// this_file: crates/cosm-cli/src/commands/info.rs

//! Info command implementation
//!
//! Prints the configuration a build would use.

use anyhow::{Context, Result};

use super::load_config;
use crate::cli::InfoArgs;

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}
