// this_file: crates/cosm-cli/src/commands/mod.rs

//! Command implementations

pub mod build;
pub mod info;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};
use cosm_core::FontConfig;

/// Built-in configuration, or the overrides in `path`.
pub fn load_config(path: Option<&Path>) -> Result<FontConfig> {
    match path {
        Some(path) => FontConfig::from_json_file(path)
            .with_context(|| format!("Invalid configuration in {}", path.display())),
        None => Ok(FontConfig::default()),
    }
}
