//! # FDL Create Command
//!
//! File: cli/src/commands/create.rs
//!
//! Creates an empty file, or a directory with `--dir`. Missing parent
//! directories are created unless `--no-recursive` is given. Creating
//! something that already exists is not an error.
//!
//! ```bash
//! fdl create logs/today.log
//! fdl create --dir build/out/
//! ```
//!
use super::{resolve_directory, resolve_file};
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use anyhow::Context;
use clap::Parser;
use fdl::File;
use tracing::info;

#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Path to create
    pub path: String,

    /// Create a directory instead of a file
    #[arg(long)]
    pub dir: bool,

    /// Fail instead of creating missing parent directories
    #[arg(long)]
    pub no_recursive: bool,
}

pub fn handle_create(args: CreateArgs, cfg: &Config) -> Result<()> {
    let entity: File = if args.dir {
        resolve_directory(cfg, &args.path)?.into_file()
    } else {
        resolve_file(cfg, &args.path)?
    };
    info!("Creating {} '{}'", entity.kind(), entity);

    let created = entity
        .create(!args.no_recursive)
        .with_context(|| format!("Failed to create '{}'", args.path))?;
    if !created {
        return Err(CliError::NoEffect {
            path: entity.full_path().to_string(),
            reason: format!("could not create {}", entity.kind()),
        }
        .into());
    }
    println!("Created {} {}", entity.kind(), entity.to_native_path());
    Ok(())
}
