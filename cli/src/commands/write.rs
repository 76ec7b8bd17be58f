//! # FDL Write Command
//!
//! File: cli/src/commands/write.rs
//!
//! Writes text into a file at `--offset` (default: the start), overwriting
//! bytes already there. With `--append` the text goes after the current end.
//! The file is created first if it does not exist.
//!
//! ```bash
//! fdl write notes.txt "first line"
//! fdl write --append notes.txt "second line"
//! ```
//!
use super::resolve_file;
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// File to write
    pub path: String,

    /// Text to write
    pub text: String,

    /// Byte offset to start writing at
    #[arg(long, default_value_t = 0, conflicts_with = "append")]
    pub offset: u64,

    /// Write after the current end of the file
    #[arg(long)]
    pub append: bool,

    /// Terminate the text with a newline
    #[arg(long, short)]
    pub newline: bool,
}

pub fn handle_write(args: WriteArgs, cfg: &Config) -> Result<()> {
    let file = resolve_file(cfg, &args.path)?;
    if file.is_directory_on_disk() {
        return Err(CliError::WrongKind {
            path: file.to_native_path(),
            found: "directory",
            expected: "file",
        }
        .into());
    }
    if !file.exists()
        && !file
            .create(true)
            .with_context(|| format!("Failed to create '{}'", args.path))?
    {
        return Err(CliError::NoEffect {
            path: file.full_path().to_string(),
            reason: "could not create file".to_string(),
        }
        .into());
    }

    let manager = cfg.file_manager();
    let mut stream = manager
        .open(&file)
        .with_context(|| format!("Failed to open '{}'", args.path))?;
    let offset = if args.append {
        stream.len()?
    } else {
        args.offset
    };
    stream.seek_write(offset)?;

    let mut data = args.text.into_bytes();
    if args.newline {
        data.push(b'\n');
    }
    let written = stream.write(&data)?;
    if !stream.flush() {
        return Err(CliError::NoEffect {
            path: file.full_path().to_string(),
            reason: "flush failed".to_string(),
        }
        .into());
    }
    stream.close();
    info!("Wrote {} bytes to '{}' at offset {}", written, file, offset);
    println!("Wrote {} bytes to {}", written, file.to_native_path());
    Ok(())
}
