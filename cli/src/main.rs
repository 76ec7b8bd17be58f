//! # FDL Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! **DISCLAIMER:** This tool is in the early phases of being written
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This file is the entry point of the `fdl` command-line tool, a thin
//! front-end over the `fdl` library. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and routing to the command handlers
//!
//! ## Architecture
//!
//! - Each subcommand is a variant of the `Commands` enum
//! - Each variant maps to a `handle_*` function in `commands/`
//! - All errors propagate here and are printed to stderr with exit code 1
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! fdl --help
//!
//! # Describe a path with debug logging
//! fdl -vv info data/archive.tar.gz
//!
//! # Use an explicit configuration file
//! FDL_CONFIG=./ci.toml fdl ls
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod core;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "fdl",
    about = "Inspect and manipulate files through the FDL filesystem library",
    long_about = "Create, move, delete, list, read and write files and directories.\n\
                  Paths are handled in FDL's canonical form on every platform.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the discovered ones
    #[arg(long, env = "FDL_CONFIG", global = true)]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    Info(commands::info::InfoArgs),
    Create(commands::create::CreateArgs),
    #[command(alias = "rm")]
    Delete(commands::delete::DeleteArgs),
    #[command(name = "move", alias = "mv")]
    Move(commands::mv::MoveArgs),
    Ls(commands::ls::LsArgs),
    Cat(commands::cat::CatArgs),
    Write(commands::write::WriteArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = core::config::load_config(cli.config.as_deref()).and_then(|cfg| {
        match cli.command {
            Commands::Info(args) => commands::info::handle_info(args, &cfg),
            Commands::Create(args) => commands::create::handle_create(args, &cfg),
            Commands::Delete(args) => commands::delete::handle_delete(args, &cfg),
            Commands::Move(args) => commands::mv::handle_move(args, &cfg),
            Commands::Ls(args) => commands::ls::handle_ls(args, &cfg),
            Commands::Cat(args) => commands::cat::handle_cat(args, &cfg),
            Commands::Write(args) => commands::write::handle_write(args, &cfg),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
