//! # FDL Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! **DISCLAIMER:** This tool is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! One module per subcommand of the `fdl` binary. Each module defines a clap
//! `Args` struct and a `handle_*` function taking the parsed arguments and the
//! loaded configuration.
//!
//! ## Commands
//!
//! - `info`: decomposition and on-disk facts about a path
//! - `create`: create a file or directory
//! - `delete`: delete a file or directory
//! - `mv`: move an entry
//! - `ls`: list a directory
//! - `cat`: print a file's content from an offset
//! - `write`: write text into a file at an offset
//!
//! ## Path Resolution
//!
//! Command-line paths are native paths. Absolute paths are used as given;
//! relative ones are resolved against `paths.root` when configured, and
//! against the working directory otherwise.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use fdl::{Directory, File};
use std::path::Path;
use tracing::debug;

pub mod cat;
pub mod create;
pub mod delete;
pub mod info;
pub mod ls;
pub mod mv;
pub mod write;

/// Resolves `raw` to a file entity. A trailing separator is rejected.
pub(crate) fn resolve_file(cfg: &Config, raw: &str) -> Result<File> {
    let file = match cfg.root_directory()? {
        Some(root) if !Path::new(raw).is_absolute() => root.open_file(raw),
        _ => File::from_native_path(raw),
    }
    .with_context(|| format!("Invalid file path '{}'", raw))?;
    debug!("Resolved '{}' to file '{}'", raw, file);
    Ok(file)
}

/// Resolves `raw` to a directory entity. A trailing separator is accepted.
pub(crate) fn resolve_directory(cfg: &Config, raw: &str) -> Result<Directory> {
    let dir = match cfg.root_directory()? {
        Some(root) if !Path::new(raw).is_absolute() => root.open_directory(raw),
        _ => Directory::from_native_path(raw),
    }
    .with_context(|| format!("Invalid directory path '{}'", raw))?;
    debug!("Resolved '{}' to directory '{}'", raw, dir);
    Ok(dir)
}

/// Resolves `raw` to whatever currently exists there: a directory entity if a
/// directory is on disk, a file entity otherwise.
pub(crate) fn resolve_existing(cfg: &Config, raw: &str) -> Result<File> {
    let dir = resolve_directory(cfg, raw)?;
    if dir.is_directory_on_disk() {
        return Ok(dir.into_file());
    }
    resolve_file(cfg, raw)
}
