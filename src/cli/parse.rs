//! CLI parse: clap types for homevar. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Homevar CLI - per-user application settings seeded from templates
#[derive(Parser)]
#[command(name = "homevar")]
#[command(about = "Per-user application settings seeded from bundled templates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Application identity; the config lives under ~/var/<app>
    #[arg(long)]
    pub app: String,

    /// Template document used to seed and patch the config
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Config file name inside the application directory
    #[arg(long, default_value = "config.yml")]
    pub file: String,

    /// Use this directory instead of ~/var/<app>
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current config document
    Show {
        /// Output format (yaml, json, toml)
        #[arg(long, default_value = "yaml")]
        format: String,
    },
    /// Print one value addressed by a dotted key, e.g. server.port
    Get {
        key: String,
    },
    /// Merge a patch document into the config and write it
    Merge {
        /// Patch file; format follows its extension
        patch: PathBuf,
    },
    /// Print the path of the config file
    Path,
    /// Reload the config from the template and the file on disk
    Refresh,
    /// Delete the config file
    Delete,
}
