//! # FDL Move Command
//!
//! File: cli/src/commands/mv.rs
//!
//! Moves a file or directory. The destination's parent directories are
//! created unless `--no-recursive` is given. An existing destination is
//! never overwritten.
//!
//! ```bash
//! fdl move draft.md published/2024/post.md
//! ```
//!
use super::{resolve_directory, resolve_existing, resolve_file};
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct MoveArgs {
    /// Entry to move
    pub from: String,

    /// New location
    pub to: String,

    /// Fail instead of creating the destination's parent directories
    #[arg(long)]
    pub no_recursive: bool,
}

pub fn handle_move(args: MoveArgs, cfg: &Config) -> Result<()> {
    let source = resolve_existing(cfg, &args.from)?;
    let destination = if source.is_directory() {
        resolve_directory(cfg, &args.to)?.into_file()
    } else {
        resolve_file(cfg, &args.to)?
    };
    info!("Moving '{}' to '{}'", source, destination);

    let moved = source
        .move_to(&destination, !args.no_recursive)
        .with_context(|| format!("Failed to move '{}' to '{}'", args.from, args.to))?;
    if !moved {
        let reason = if destination.exists() {
            "destination already exists".to_string()
        } else {
            "the move was refused".to_string()
        };
        return Err(CliError::NoEffect {
            path: source.full_path().to_string(),
            reason,
        }
        .into());
    }
    println!(
        "Moved {} -> {}",
        source.to_native_path(),
        destination.to_native_path()
    );
    Ok(())
}
