//! # FDL CLI Error Types
//!
//! File: cli/src/core/error.rs
//!
//! **DISCLAIMER:** This tool is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Errors raised by the command-line layer itself. Library failures arrive as
//! `fdl::FdlError` and travel through `anyhow` untouched, so `main` can print
//! them with the operation and path they carry.
//!
//! ## Architecture
//!
//! - `CliError`: a `thiserror` enum for configuration problems, paths of the
//!   wrong kind, and operations that returned without effect.
//! - `Result<T>`: a type alias for `anyhow::Result<T>` used by every handler.
//!
//! ## Examples
//!
//! ```rust
//! if file.is_directory_on_disk() {
//!     return Err(CliError::WrongKind { path, found: "directory", expected: "file" }.into());
//! }
//!
//! let stream = file
//!     .open()
//!     .with_context(|| format!("Failed to open '{}'", file))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the FDL command-line tool.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("'{path}' is a {found}, expected a {expected}")]
    WrongKind {
        path: String,
        found: &'static str,
        expected: &'static str,
    },

    #[error("Operation on '{path}' did not take effect: {reason}")]
    NoEffect { path: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
