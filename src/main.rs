//! swapview - version 0.1.0
//!
//! Prints per-process swap usage sorted ascending with a total.
//! This is the main entry point that wires CLI, config, logging and the report.

mod commands;

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, Level};

use commands::{command_check, command_config};
use swapview::cli::{Args, Commands, LogLevel};
use swapview::config::{render_config, resolve_config, validate_effective_config, Config};
use swapview::{render, Collector};

/// Initializes tracing logging subsystem with configured log level.
/// Logs go to stderr so stdout only carries the report.
fn setup_logging(level: LogLevel) {
    let max_level = match level {
        LogLevel::Off => return,
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Helper function to load and validate configuration.
/// Exits the process with error code 1 if validation fails.
fn load_validated_config(args: &Args) -> anyhow::Result<Config> {
    let config = resolve_config(args)?;
    if let Err(e) = validate_effective_config(&config) {
        eprintln!("Configuration invalid: {}", e);
        std::process::exit(1);
    }
    Ok(config)
}

/// Scans the process root and prints the report.
fn run_report(config: &Config) -> anyhow::Result<()> {
    let collector = Collector::new(config.proc_root(), config.parallelism());
    let collection = collector.collect()?;
    debug!(
        "{} of {} entries produced a record",
        collection.records.len(),
        collection.candidates
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render(&mut out, collection.records, config.output()).context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.check_config {
        let config = resolve_config(&args)?;
        if let Err(e) = validate_effective_config(&config) {
            eprintln!("Configuration invalid: {}", e);
            std::process::exit(1);
        }
        println!("Configuration is valid");
        return Ok(());
    }

    let config = load_validated_config(&args)?;

    if args.show_config {
        println!("{}", render_config(&config, &args.config_format)?);
        return Ok(());
    }

    setup_logging(config.log_level());

    match &args.command {
        Some(Commands::Check) => command_check(&config),
        Some(Commands::Config { output, format }) => command_config(output.clone(), format.clone()),
        None => run_report(&config),
    }
}
