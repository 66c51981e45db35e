//! CLI argument parsing for vaultscan
//!
//! Uses clap for argument parsing. Global flags: --root, --exclude,
//! --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_format;
pub use vaultscan_core::format::OutputFormat;
use vaultscan_core::vault::DEFAULT_DAILY_DIR;

/// Vaultscan - knowledge-graph analysis for markdown note vaults
#[derive(Parser, Debug)]
#[command(name = "vaultscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root directory
    #[arg(long, global = true, env = "VAULT_PATH", default_value = ".")]
    pub root: PathBuf,

    /// Directory name to exclude in addition to the default set
    /// (can be specified multiple times)
    #[arg(long, short = 'x', global = true, action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report notes with no incoming or outgoing links
    Orphans,

    /// Generate a tag usage overview
    Tags {
        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Create a daily note
    Daily {
        /// Target date (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// Daily notes directory under the vault root
        #[arg(long, default_value = DEFAULT_DAILY_DIR)]
        dir: String,
    },
}
