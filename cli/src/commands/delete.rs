//! # FDL Delete Command
//!
//! File: cli/src/commands/delete.rs
//!
//! Deletes whatever exists at a path. Directories must be empty unless
//! `--recursive` is given.
//!
//! ```bash
//! fdl delete old.txt
//! fdl delete --recursive build/
//! ```
//!
use super::{resolve_directory, resolve_existing};
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Path to delete
    pub path: String,

    /// Remove a directory and everything below it
    #[arg(long, short)]
    pub recursive: bool,
}

pub fn handle_delete(args: DeleteArgs, cfg: &Config) -> Result<()> {
    let entity = resolve_existing(cfg, &args.path)?;
    info!("Deleting {} '{}'", entity.kind(), entity);

    let deleted = if entity.is_directory() && args.recursive {
        resolve_directory(cfg, &args.path)?.delete_recursive()
    } else {
        entity.delete()
    }
    .with_context(|| format!("Failed to delete '{}'", args.path))?;

    if !deleted {
        let reason = if entity.is_directory() && !args.recursive {
            "directory is not empty (use --recursive)".to_string()
        } else {
            format!("the {} could not be removed", entity.kind())
        };
        return Err(CliError::NoEffect {
            path: entity.full_path().to_string(),
            reason,
        }
        .into());
    }
    println!("Deleted {} {}", entity.kind(), entity.to_native_path());
    Ok(())
}
