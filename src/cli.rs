//! CLI arguments and subcommands for swapview.
//!
//! Every flag is optional; running without arguments scans /proc and prints the
//! swap table.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "swapview",
    about = "Show per-process swap usage, sorted ascending, with a total",
    long_about = "Show per-process swap usage, sorted ascending, with a total.\n\n\
                  Reads /proc/<pid>/cmdline and /proc/<pid>/smaps for every process, \
                  sums the Swap fields of all mappings and prints one row per process. \
                  Processes that exit or cannot be read during the scan are left out.",
    version,
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Process root to scan
    #[arg(long)]
    pub proc_root: Option<PathBuf>,

    /// Worker threads for probing processes (0 = one per CPU)
    #[arg(short = 'j', long)]
    pub parallelism: Option<usize>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log level (logs go to stderr)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,
}

/// Subcommands for additional functionality
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the process root and per-process files are readable
    Check,

    /// Generate a default configuration file
    Config {
        /// Output file path ("-" for stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,
    },
}
