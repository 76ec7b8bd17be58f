//! # FDL Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! **DISCLAIMER:** This tool is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module loads, merges and validates the configuration of the `fdl`
//! command-line tool. Configuration decides where relative paths are rooted
//! and how files are opened (which extensions are text, whether `.gz` files
//! are served decompressed).
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file named by `--config` / `FDL_CONFIG`. When given, no
//!    other file is read.
//! 2. Project-specific `.fdl.toml` in the current directory or an ancestor.
//!    The search stops at the first directory containing `.git`.
//! 3. User-specific `config.toml` in the platform config directory
//!    (`~/.config/fdl/config.toml` on Linux).
//! 4. Default values defined in the code.
//!
//! After merging, `~` is expanded in paths and the result is validated.
//!
//! ## Examples
//!
//! ```toml
//! [paths]
//! root = "~/data"
//!
//! [streams]
//! text_extensions = ["txt", "md", "log"]
//! gzip = true
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let manager = cfg.file_manager();
//! let root = cfg.root_directory()?;
//! ```
//!
use crate::core::error::{CliError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use fdl::{Directory, FileManager, TextExtensions, DEFAULT_TEXT_EXTENSIONS};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub streams: StreamsConfig,
}

/// Where relative command-line paths are resolved.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Native path of the base directory. Unset means the working directory.
    #[serde(default)]
    pub root: Option<String>,
}

/// How files are opened.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StreamsConfig {
    #[serde(default = "default_text_extensions")]
    pub text_extensions: Vec<String>,
    /// Serve `.gz` files through the gzip handler.
    #[serde(default = "default_gzip")]
    pub gzip: bool,
}

impl Default for StreamsConfig {
    fn default() -> Self {
        StreamsConfig {
            text_extensions: default_text_extensions(),
            gzip: default_gzip(),
        }
    }
}

fn default_text_extensions() -> Vec<String> {
    DEFAULT_TEXT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}
fn default_gzip() -> bool {
    true
}

impl Config {
    pub fn text_extensions(&self) -> TextExtensions {
        TextExtensions::new(&self.streams.text_extensions)
    }

    /// Builds the handler registry described by `[streams]`.
    pub fn file_manager(&self) -> FileManager {
        let manager = if self.streams.gzip {
            FileManager::with_builtin_handlers()
        } else {
            FileManager::new()
        };
        manager.with_text_extensions(self.text_extensions())
    }

    /// The configured root as a `Directory`, or `None` when unset.
    pub fn root_directory(&self) -> Result<Option<Directory>> {
        match &self.paths.root {
            Some(root) => Directory::from_native_path(root)
                .map(Some)
                .with_context(|| format!("Configured root '{}' is not a usable path", root)),
            None => Ok(None),
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".fdl.toml";

/// # Load Configuration (`load_config`)
///
/// Loads the effective configuration. With `explicit` set, only that file is
/// read; otherwise user and project files are discovered and merged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir =
                std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "fdl") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.fdl.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => return None,
        }
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = StreamsConfig::default();
    Config {
        paths: PathsConfig {
            root: project_cfg.paths.root.or(user.paths.root),
        },
        streams: StreamsConfig {
            text_extensions: if project_cfg.streams.text_extensions != defaults.text_extensions {
                project_cfg.streams.text_extensions
            } else {
                user.streams.text_extensions
            },
            gzip: if project_cfg.streams.gzip != defaults.gzip {
                project_cfg.streams.gzip
            } else {
                user.streams.gzip
            },
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(root) = config.paths.root.as_mut() {
        *root = shellexpand::tilde(root.as_str()).into_owned();
        debug!("Expanded root directory: {}", root);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if let Some(root) = &config.paths.root {
        let root_dir = PathBuf::from(root);
        if !root_dir.exists() {
            warn!("Configured root '{}' does not exist.", root_dir.display());
        } else if !root_dir.is_dir() {
            return Err(anyhow!(CliError::Config(format!(
                "Configured root '{}' exists but is not a directory.",
                root_dir.display()
            ))));
        }
        if let Err(e) = Directory::from_native_path(root) {
            return Err(anyhow!(CliError::Config(format!(
                "Configured root '{}' is not a valid path: {}",
                root, e
            ))));
        }
    }
    for ext in &config.streams.text_extensions {
        let bare = ext.strip_prefix('.').unwrap_or(ext);
        if bare.is_empty() || bare.contains(['.', '/', '\\']) {
            return Err(anyhow!(CliError::Config(format!(
                "Invalid text extension '{}'. Expected a single extension such as \"txt\".",
                ext
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
