// this_file: crates/cosm-cli/src/commands/resolve.rs

//! Resolve command implementation

use anyhow::{bail, Result};
use cosm_outline::resolve;

use super::load_config;
use crate::cli::ResolveArgs;

pub fn run(args: &ResolveArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut failed = 0;

    for stem in &args.stems {
        match resolve(stem, &config.escapes) {
            Ok(ch) => println!("{stem}\t{ch}\tU+{:04X}", u32::from(ch)),
            Err(err) => {
                eprintln!("{stem}\t{err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} stems could not be resolved", args.stems.len());
    }
    Ok(())
}
