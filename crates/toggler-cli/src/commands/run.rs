//! Run and targets command implementations
//!
//! Targets come from the configuration file; see `crate::config`.

use std::path::Path;

use colored::Colorize;
use toggler_core::Toggler;
use tracing::info;

use crate::commands::apply::{Summary, WriteMode, apply_jobs};
use crate::config::{Config, OptionsOverlay};
use crate::error::{CliError, Result};

/// Run the named targets, or every target when `names` is empty
pub fn run_targets(
    config_path: &Path,
    names: &[String],
    overrides: &OptionsOverlay,
    mode: WriteMode,
) -> Result<Summary> {
    let config = Config::load(config_path)?;

    let selected: Vec<&str> = if names.is_empty() {
        config.targets.keys().map(String::as_str).collect()
    } else {
        names.iter().map(String::as_str).collect()
    };

    if selected.is_empty() {
        return Err(CliError::user(format!(
            "No targets defined in {}",
            config_path.display()
        )));
    }

    let mut summary = Summary::default();
    for name in selected {
        let target = config.target(name)?;
        let options = config.resolve_options(Some(target), overrides);
        let jobs = target.expand(&config.root)?;

        info!(name, files = jobs.len(), "Running target");
        println!(
            "{} Running target {} ({} file{})",
            "=>".blue().bold(),
            name.cyan(),
            jobs.len(),
            if jobs.len() == 1 { "" } else { "s" }
        );

        summary.merge(apply_jobs(&jobs, &Toggler::new(options), mode)?);
    }

    Ok(summary)
}

/// Print the targets defined in the configuration file
pub fn run_list_targets(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;

    if config.targets.is_empty() {
        println!("No targets defined in {}", config_path.display());
        return Ok(());
    }

    for (name, target) in &config.targets {
        let dest = target
            .dest
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "in place".to_string());
        println!(
            "{} {} -> {}",
            name.green().bold(),
            target.files.join(", "),
            dest.dimmed()
        );
    }

    Ok(())
}
