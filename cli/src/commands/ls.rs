//! # FDL List Command
//!
//! File: cli/src/commands/ls.rs
//!
//! Lists the direct children of a directory, sorted by name. Directories
//! are printed with a trailing `/`. With no argument the configured root
//! (or the working directory) is listed.
//!
//! ```bash
//! fdl ls
//! fdl ls --long assets
//! ```
//!
use super::resolve_directory;
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use fdl::File;
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct LsArgs {
    /// Directory to list
    #[arg(default_value = "")]
    pub path: String,

    /// Show kind and size for each entry
    #[arg(long, short)]
    pub long: bool,
}

pub fn handle_ls(args: LsArgs, cfg: &Config) -> Result<()> {
    let dir = resolve_directory(cfg, &args.path)?;
    info!("Listing '{}'", dir);
    let entries = dir
        .contained_files()
        .with_context(|| format!("Failed to list '{}'", dir.to_native_path()))?;
    debug!("{} entries", entries.len());

    for entry in &entries {
        println!("{}", format_entry(entry, args.long));
    }
    Ok(())
}

fn format_entry(entry: &File, long: bool) -> String {
    let name = if entry.is_directory() {
        format!("{}/", entry.full_name())
    } else {
        entry.full_name().to_string()
    };
    if !long {
        return name;
    }
    let size = if entry.is_directory() {
        "-".to_string()
    } else {
        entry
            .size()
            .map(|s| s.to_string())
            .unwrap_or_else(|_| "?".to_string())
    };
    format!("{:<9} {:>10}  {}", entry.kind(), size, name)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use fdl::Directory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_entry() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        let dir = Directory::from_native_path(temp.path().to_str().unwrap()).unwrap();
        let entries = dir.contained_files().unwrap();

        assert_eq!(format_entry(&entries[0], false), "a.txt");
        assert_eq!(format_entry(&entries[1], false), "sub/");
        assert!(format_entry(&entries[0], true).ends_with("5  a.txt"));
        assert!(format_entry(&entries[1], true).starts_with("directory"));
    }
}
