//! # FDL CLI Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! **DISCLAIMER:** This tool is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Infrastructure shared by every command handler:
//! - `config`: configuration loading, merging and validation
//! - `error`: the CLI error type and `Result` alias
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{CliError, Result};
//! ```
//!
pub mod config;
pub mod error;
