//! # FDL Cat Command
//!
//! File: cli/src/commands/cat.rs
//!
//! Writes a file's content to stdout, starting at `--offset`. The file is
//! opened through the configured handler registry, so `.gz` files print
//! decompressed when the gzip handler is enabled.
//!
//! ```bash
//! fdl cat notes.txt
//! fdl cat --offset 128 --length 64 blob.bin
//! ```
//!
use super::resolve_file;
use crate::core::config::Config;
use crate::core::error::{CliError, Result};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct CatArgs {
    /// File to print
    pub path: String,

    /// Byte offset to start reading from
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// Maximum number of bytes to print
    #[arg(long)]
    pub length: Option<usize>,
}

pub fn handle_cat(args: CatArgs, cfg: &Config) -> Result<()> {
    let file = resolve_file(cfg, &args.path)?;
    if file.is_directory_on_disk() {
        return Err(CliError::WrongKind {
            path: file.to_native_path(),
            found: "directory",
            expected: "file",
        }
        .into());
    }
    info!("Reading '{}' from offset {}", file, args.offset);

    let manager = cfg.file_manager();
    let mut stream = manager
        .open(&file)
        .with_context(|| format!("Failed to open '{}'", args.path))?;
    debug!("Opened via '{}' handler", stream.handler_name());
    stream.seek_read(args.offset)?;

    let content = match args.length {
        Some(length) => {
            // Never allocate past what is left in the stream.
            let remaining = stream.len()?.saturating_sub(args.offset);
            let cap = usize::try_from(remaining).map_or(length, |r| r.min(length));
            let mut buf = vec![0u8; cap];
            let n = stream.read(&mut buf)?;
            buf.truncate(n);
            buf
        }
        None => stream.read_to_end()?,
    };
    stream.close();

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&content)
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")?;
    Ok(())
}
