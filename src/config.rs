//! Configuration management for swapview.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.

use crate::cli::{Args, ConfigFormat, LogLevel};
use crate::collector::{DEFAULT_PROC_ROOT, MAX_PARALLELISM};
use crate::report::ReportFormat;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Config files probed when no --config is given, first match wins.
pub const DEFAULT_CONFIG_PATHS: [&str; 6] = [
    "/etc/swapview/swapview.yaml",
    "/etc/swapview/swapview.yml",
    "/etc/swapview/swapview.json",
    "./swapview.yaml",
    "./swapview.yml",
    "./swapview.json",
];

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one entry per process
    #[serde(alias = "proc-root")]
    pub proc_root: Option<PathBuf>,

    /// Probe worker threads, 0 or unset means one per CPU
    pub parallelism: Option<usize>,

    /// "off" | "error" | "warn" | "info" | "debug" | "trace"
    #[serde(alias = "log-level")]
    pub log_level: Option<String>,

    /// "table" | "json"
    pub output: Option<ReportFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proc_root: Some(PathBuf::from(DEFAULT_PROC_ROOT)),
            parallelism: Some(0),
            log_level: Some("warn".into()),
            output: Some(ReportFormat::Table),
        }
    }
}

impl Config {
    pub fn proc_root(&self) -> PathBuf {
        self.proc_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROC_ROOT))
    }

    pub fn parallelism(&self) -> usize {
        self.parallelism.unwrap_or(0)
    }

    pub fn output(&self) -> ReportFormat {
        self.output.unwrap_or_default()
    }

    /// Effective log level, falling back to warn for unknown values.
    pub fn log_level(&self) -> LogLevel {
        match self.log_level.as_deref() {
            Some("off") => LogLevel::Off,
            Some("error") => LogLevel::Error,
            Some("info") => LogLevel::Info,
            Some("debug") => LogLevel::Debug,
            Some("trace") => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }
}

fn log_level_name(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Off => "off",
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> anyhow::Result<()> {
    if let Some(root) = &cfg.proc_root {
        if root.as_os_str().is_empty() {
            bail!("proc_root must not be empty");
        }
    }

    if let Some(threads) = cfg.parallelism {
        if threads > MAX_PARALLELISM {
            bail!(
                "parallelism {} exceeds the maximum of {}",
                threads,
                MAX_PARALLELISM
            );
        }
    }

    if let Some(level) = cfg.log_level.as_deref() {
        if !LOG_LEVELS.contains(&level) {
            bail!(
                "Invalid log_level '{}', expected one of: {}",
                level,
                LOG_LEVELS.join(", ")
            );
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref())?
    };

    if let Some(root) = &args.proc_root {
        config.proc_root = Some(root.clone());
    }
    if let Some(threads) = args.parallelism {
        config.parallelism = Some(threads);
    }
    if let Some(level) = args.log_level {
        config.log_level = Some(log_level_name(level).to_string());
    }
    if args.json {
        config.output = Some(ReportFormat::Json);
    }

    Ok(config)
}

/// Loads configuration from `path`, or from the first existing default location.
///
/// A missing file yields the defaults; an explicitly given path must exist.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                bail!("config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => match DEFAULT_CONFIG_PATHS
            .iter()
            .copied()
            .map(Path::new)
            .find(|p| p.exists())
        {
            Some(p) => p.to_path_buf(),
            None => return Ok(Config::default()),
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?,
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?,
        // Default to YAML
        _ => serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?,
    };
    info!("Loaded configuration from: {}", path.display());
    Ok(config)
}

/// Serializes a configuration in the requested format.
pub fn render_config(config: &Config, format: &ConfigFormat) -> anyhow::Result<String> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}
