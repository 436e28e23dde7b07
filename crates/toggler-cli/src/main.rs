//! Comment Toggler CLI
//!
//! Comments, uncomments and toggles build blocks in text files.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::{Summary, WriteMode};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialise logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd, &cli.config),
        None => {
            // No command provided - show help hint
            println!(
                "{} Comment build-block processor",
                "comment-toggler".green().bold()
            );
            println!();
            println!(
                "Run {} for available commands.",
                "comment-toggler --help".cyan()
            );
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config: &Path) -> Result<()> {
    match cmd {
        Commands::Process {
            files,
            out_dir,
            options,
            write,
        } => {
            let mode = WriteMode::from(&write);
            let summary = commands::run_process(
                config,
                &files,
                out_dir.as_deref(),
                &options.overlay(),
                mode,
            )?;
            report(summary, mode)
        }
        Commands::Run {
            targets,
            options,
            write,
        } => {
            let mode = WriteMode::from(&write);
            let summary =
                commands::run_targets(config, &targets, &options.overlay(), mode)?;
            report(summary, mode)
        }
        Commands::Targets => commands::run_list_targets(config),
    }
}

fn report(summary: Summary, mode: WriteMode) -> Result<()> {
    let verb = match mode {
        WriteMode::Write => "changed",
        WriteMode::DryRun | WriteMode::Check => "would change",
    };
    println!(
        "{} {} file(s) processed, {} {}, {} warning(s)",
        "OK".green().bold(),
        summary.processed,
        summary.changed,
        verb,
        summary.warnings
    );

    if mode == WriteMode::Check && summary.changed > 0 {
        return Err(CliError::user(format!(
            "{} file(s) are not up to date",
            summary.changed
        )));
    }

    Ok(())
}
