//! CLI command definitions for todo-presets
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod init;
pub mod list;
pub mod show;

use crate::format::OutputFormat;
use clap::{Parser, Subcommand};
use init::InitArgs;
use list::ListArgs;
use show::ShowArgs;
use std::path::PathBuf;

/// Todo preset catalog and initializer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to database file (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Directory of preset JSON files (overrides config)
    #[arg(short, long, global = true)]
    pub presets_dir: Option<PathBuf>,

    /// User that owns created records (overrides config)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename.
    /// Stdout logging falls back to stderr with `--format json`.
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available presets
    List(ListArgs),

    /// Show one preset with its todo tree
    Show(ShowArgs),

    /// Create a preset's tag group, tags and todos for the user
    Init(InitArgs),
}

impl Cli {
    /// Whether log lines go to stdout. JSON results own stdout, so stdout
    /// logging is moved to stderr for them.
    pub fn logs_to_stdout(&self) -> bool {
        matches!(self.log.as_str(), "1" | "stdout") && self.command.format() != OutputFormat::Json
    }
}

impl Command {
    /// Output format requested for the command's result.
    pub fn format(&self) -> OutputFormat {
        match self {
            Command::List(args) => args.format,
            Command::Show(args) => args.format,
            Command::Init(args) => args.format,
        }
    }
}
