//! # CLI Argument Definitions
//!
//! Command-line structure of the `lbox` binary, built with `clap` derive.

use clap::{Parser, Subcommand};
use lbox_launch::parse_sm_version;
use lbox_logger::LevelFilter;
use std::path::PathBuf;

/// Inspect launch boxes and generate per-SM launch constants.
#[derive(Debug, Parser)]
#[command(name = "lbox")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Minimum log level written to stderr (`error`, `warn`, `info`, `debug`, `trace`)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Also write rolling log files to this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Resolve the boxes of a manifest and print the selected launch parameters
    Resolve {
        /// Manifest file (TOML, JSON or YAML)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Target SM (e.g. `75`, `7.5`, `sm_75`); overrides the manifest
        #[arg(long, value_parser = parse_sm)]
        sm: Option<u32>,

        /// Resolve only the box with this name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Generate a Rust module with the resolved constants of every box
    Codegen {
        /// Manifest file (TOML, JSON or YAML)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Target SM (e.g. `75`, `7.5`, `sm_75`); overrides the manifest
        #[arg(long, value_parser = parse_sm)]
        sm: Option<u32>,

        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List the SM versions with named helpers
    Versions {},
}

fn parse_sm(raw: &str) -> Result<u32, String> {
    parse_sm_version(raw)
        .ok_or_else(|| format!("'{raw}' is not an SM version (try 75, 7.5 or sm_75)"))
}
