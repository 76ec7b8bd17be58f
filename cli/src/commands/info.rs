//! # FDL Info Command
//!
//! File: cli/src/commands/info.rs
//!
//! Prints how a path decomposes (name, extension, root, native form) and
//! what currently exists there. Works for paths that do not exist yet.
//!
//! ```bash
//! fdl info reports/2024/summary.csv
//! ```
//!
use super::resolve_existing;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use fdl::{ErrorKind, File};
use tracing::info;

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to describe
    pub path: String,
}

pub fn handle_info(args: InfoArgs, cfg: &Config) -> Result<()> {
    info!("Handling info command for '{}'", args.path);
    let entity = resolve_existing(cfg, &args.path)?;
    for (key, value) in describe(&entity, cfg)? {
        println!("{:<10} {}", format!("{}:", key), value);
    }
    Ok(())
}

/// Key/value lines shown by `fdl info`, in display order.
fn describe(entity: &File, cfg: &Config) -> Result<Vec<(&'static str, String)>> {
    let mut lines = vec![
        ("path", entity.full_path().to_string()),
        ("native", entity.to_native_path()),
        ("kind", entity.kind().to_string()),
        ("name", entity.file_name().to_string()),
        ("full name", entity.full_name().to_string()),
        (
            "extension",
            entity.extension().unwrap_or("(none)").to_string(),
        ),
        ("root", entity.root_path().to_string()),
        ("exists", entity.exists().to_string()),
    ];

    if !entity.is_directory() {
        let manager = cfg.file_manager();
        lines.push((
            "mode",
            if entity.is_binary_with(manager.text_extensions()) {
                "binary".to_string()
            } else {
                "text".to_string()
            },
        ));
        lines.push(("handler", manager.handler_for(entity).name().to_string()));
        match entity.size() {
            Ok(size) => lines.push(("size", size.to_string())),
            Err(e) if e.kind() == ErrorKind::FileMissing => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(lines)
}
